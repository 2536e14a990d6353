//! Document intake, reporting, and rendering for the `clausecheck` binary.

pub mod display;
pub mod intake;
pub mod report;
mod run;

pub use intake::{
    Document, DocumentKind, Intake, IntakeError, PlainTextExtractor, Source, TextExtractor,
    sources_from_args,
};
pub use report::{FailedReport, Outcome, Report, outcomes_json};
pub use run::{DocumentError, analyze_batch, analyze_source};
