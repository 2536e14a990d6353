//! Clause extraction pipeline: segment → detect → score → compare.
//!
//! The pipeline holds only configuration. Each call is independent and
//! produces fresh records, so one [`Pipeline`] can be shared across threads.

use clausecheck_core::{Clause, ReviewStatus, Section, Summary, excerpt, segment};
use tracing::debug;

use crate::classifier::Classifier;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::playbook::Comparator;

/// Clauses extracted from one document plus their aggregate statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub section_count: usize,
    pub clauses: Vec<Clause>,
    pub summary: Summary,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    min_text_chars: usize,
    classifier: Classifier,
    comparator: Comparator,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            min_text_chars: config.min_text_chars,
            classifier: Classifier::new(config.scoring.clone()),
            comparator: Comparator::new(config.scoring),
        }
    }

    /// Extract clauses from `text` in section order, then clause type order
    /// within a section. Ids run `1..=N`.
    pub fn extract_clauses(&self, text: &str) -> Result<Vec<Clause>, PipelineError> {
        self.check_length(text)?;
        Ok(self.clauses_for(&segment(text)))
    }

    /// [`extract_clauses`](Self::extract_clauses) plus summary statistics.
    pub fn analyze(&self, text: &str) -> Result<Analysis, PipelineError> {
        self.check_length(text)?;
        let sections = segment(text);
        let clauses = self.clauses_for(&sections);
        let summary = Summary::from_clauses(&clauses);

        debug!(
            sections = sections.len(),
            clauses = summary.total,
            high_risk = summary.high_risk,
            "analysis complete"
        );

        Ok(Analysis {
            section_count: sections.len(),
            clauses,
            summary,
        })
    }

    fn check_length(&self, text: &str) -> Result<(), PipelineError> {
        let found = text.trim().chars().count();
        if found == 0 || found < self.min_text_chars {
            return Err(PipelineError::InsufficientText {
                found,
                required: self.min_text_chars.max(1),
            });
        }
        Ok(())
    }

    fn clauses_for(&self, sections: &[Section]) -> Vec<Clause> {
        let mut clauses = Vec::new();

        for section in sections {
            let detected = self.classifier.detect(&section.text);
            debug!(
                section = section.index,
                detected = detected.len(),
                "section classified"
            );

            for clause_type in detected {
                let confidence = self.classifier.confidence(&section.text, clause_type);
                let comparison = self.comparator.compare(&section.text, clause_type.key);
                let id = clauses.len() + 1;

                debug!(
                    id,
                    clause_type = clause_type.key,
                    confidence,
                    status = comparison.status.as_str(),
                    "clause extracted"
                );

                clauses.push(Clause {
                    id,
                    display_type: clause_type.display_name(),
                    type_key: clause_type.key.to_string(),
                    excerpt: excerpt(&section.text),
                    full_text: section.text.clone(),
                    confidence,
                    section_index: section.index,
                    comparison,
                    review_status: ReviewStatus::Pending,
                });
            }
        }

        clauses
    }
}

/// [`Pipeline::extract_clauses`] with default configuration.
pub fn extract_clauses(text: &str) -> Result<Vec<Clause>, PipelineError> {
    Pipeline::default().extract_clauses(text)
}

/// [`Pipeline::analyze`] with default configuration.
pub fn analyze(text: &str) -> Result<Analysis, PipelineError> {
    Pipeline::default().analyze(text)
}
