//! Clause detection, confidence scoring, and playbook comparison.

mod classifier;
mod config;
mod error;
pub mod patterns;
mod pipeline;
pub mod playbook;

pub use classifier::{Classifier, detect, score};
pub use config::{MIN_TEXT_CHARS, PipelineConfig, ScoringConfig};
pub use error::PipelineError;
pub use patterns::ClauseType;
pub use pipeline::{Analysis, Pipeline, analyze, extract_clauses};
pub use playbook::{Comparator, PlaybookRule, compare};
