use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("insufficient text: {found} non-blank characters, need at least {required}")]
    InsufficientText { found: usize, required: usize },
}
