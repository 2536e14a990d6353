//! Per-document analysis report, as serialized to JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use clausecheck_classify::Analysis;
use clausecheck_core::{Clause, Summary};
use serde::Serialize;

use crate::intake::Source;
use crate::run::DocumentError;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub success: bool,
    pub filename: String,
    /// Length of the extracted text in characters.
    pub extracted_text_length: usize,
    pub total_clauses: usize,
    /// RFC 3339, UTC.
    pub analyzed_at: String,
    pub statistics: Summary,
    pub clauses: Vec<Clause>,
}

impl Report {
    pub fn new(filename: String, text: &str, analysis: Analysis, at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            filename,
            extracted_text_length: text.chars().count(),
            total_clauses: analysis.summary.total,
            analyzed_at: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            statistics: analysis.summary,
            clauses: analysis.clauses,
        }
    }
}

/// A document that could not be analyzed.
#[derive(Debug, Clone, Serialize)]
pub struct FailedReport {
    pub success: bool,
    pub filename: String,
    pub error: String,
    /// One of `no_file`, `invalid_arguments`, `disallowed_type`,
    /// `insufficient_text`, `internal`.
    pub kind: &'static str,
    #[serde(skip)]
    pub exit_code: u8,
}

impl FailedReport {
    pub fn new(filename: String, err: &DocumentError) -> Self {
        Self {
            success: false,
            filename,
            error: err.to_string(),
            kind: err.kind(),
            exit_code: err.exit_code(),
        }
    }
}

/// Result of analyzing one source.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Analyzed(Report),
    Failed(FailedReport),
}

impl Outcome {
    pub fn new(source: &Source, result: Result<Report, DocumentError>) -> Self {
        match result {
            Ok(report) => Self::Analyzed(report),
            Err(e) => Self::Failed(FailedReport::new(source.filename(), &e)),
        }
    }

    /// Process exit code; 0 on success.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Analyzed(_) => 0,
            Self::Failed(f) => f.exit_code,
        }
    }
}

/// JSON for a run: the lone outcome as an object when one source was given,
/// otherwise an array in source order.
pub fn outcomes_json(outcomes: &[Outcome]) -> serde_json::Result<String> {
    match outcomes {
        [single] => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(outcomes),
    }
}
