pub mod clause;
pub mod section;

pub use clause::{
    Clause, ComparisonResult, ComparisonStatus, ConfidenceBand, ReviewStatus, Summary,
    display_name, excerpt, round2,
};
pub use section::{Section, segment};
