//! Document analysis: intake → pipeline → report, one source or a batch.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use clausecheck_classify::{Pipeline, PipelineError};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{info, warn};

use crate::intake::{Intake, IntakeError, Source};
use crate::report::{Outcome, Report};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl DocumentError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Intake(e) => e.exit_code(),
            Self::Pipeline(PipelineError::InsufficientText { .. }) => 3,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Intake(e) => e.kind(),
            Self::Pipeline(PipelineError::InsufficientText { .. }) => "insufficient_text",
        }
    }
}

/// Load one source and analyze it.
pub fn analyze_source(
    intake: &Intake,
    pipeline: &Pipeline,
    source: &Source,
) -> Result<Report, DocumentError> {
    let start = Instant::now();

    let document = intake.load(source)?;
    let analysis = pipeline.analyze(&document.text)?;

    info!(
        filename = %document.filename,
        sections = analysis.section_count,
        clauses = analysis.summary.total,
        high_risk = analysis.summary.high_risk,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "document analyzed"
    );

    Ok(Report::new(document.filename, &document.text, analysis, Utc::now()))
}

/// Analyze every source on the blocking pool. Outcomes come back in source
/// order, one per source, failures included.
pub async fn analyze_batch(
    intake: Arc<Intake>,
    pipeline: Arc<Pipeline>,
    sources: Vec<Source>,
) -> Result<Vec<Outcome>, JoinError> {
    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            let intake = Arc::clone(&intake);
            let pipeline = Arc::clone(&pipeline);
            tokio::task::spawn_blocking(move || {
                let result = analyze_source(&intake, &pipeline, &source);
                (source, result)
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        let (source, result) = handle.await?;
        if let Err(e) = &result {
            warn!(filename = %source.filename(), kind = e.kind(), "{e}");
        }
        outcomes.push(Outcome::new(&source, result));
    }
    Ok(outcomes)
}
