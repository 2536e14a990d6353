//! Clause records produced by one pipeline run.
//!
//! Field names on the wire follow the report shape the review client reads
//! (`type`, `text`, `section_number`, ...), so the Rust names and the JSON
//! names differ in a few places.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in [`Clause::excerpt`].
pub const EXCERPT_CHARS: usize = 500;

/// Appended to an excerpt when the section text was cut.
pub const TRUNCATION_MARKER: &str = "...";

/// Outcome of comparing a clause against its playbook rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    /// Clause type was detected but no playbook rule governs it.
    NoPlaybook,
    Compliant,
    NeedsReview,
}

impl ComparisonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPlaybook => "no_playbook",
            Self::Compliant => "compliant",
            Self::NeedsReview => "needs_review",
        }
    }
}

/// Reviewer decision on a clause.
///
/// The pipeline only ever produces `Pending`; accepting or rejecting a clause
/// belongs to whoever consumes the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// Coarse bucket for a confidence value, used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            Self::High
        } else if confidence >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Result of a playbook comparison for one clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub status: ComparisonStatus,
    /// Compliance score in `[0, 1]`, two decimals.
    pub score: f64,
    #[serde(rename = "red_flags")]
    pub red_flags_found: Vec<String>,
    #[serde(rename = "missing")]
    pub missing_elements: Vec<String>,
    #[serde(
        rename = "preferred",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_language: Option<String>,
}

impl ComparisonResult {
    pub fn has_red_flags(&self) -> bool {
        !self.red_flags_found.is_empty()
    }
}

/// One detected clause: a (section, clause type) pair with its scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// 1-based, unique within a single run.
    pub id: usize,
    #[serde(rename = "type")]
    pub display_type: String,
    pub type_key: String,
    #[serde(rename = "text")]
    pub excerpt: String,
    pub full_text: String,
    pub confidence: f64,
    #[serde(rename = "section_number")]
    pub section_index: usize,
    pub comparison: ComparisonResult,
    #[serde(rename = "status", default)]
    pub review_status: ReviewStatus,
}

impl Clause {
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }

    pub fn is_high_risk(&self) -> bool {
        self.comparison.has_red_flags()
    }
}

/// Aggregate statistics over the clauses of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    /// Clauses with at least one red flag.
    pub high_risk: usize,
    pub avg_confidence: f64,
    /// Number of distinct clause type keys present.
    pub clause_types: usize,
}

impl Summary {
    pub fn from_clauses(clauses: &[Clause]) -> Self {
        let total = clauses.len();
        let high_risk = clauses.iter().filter(|c| c.is_high_risk()).count();
        let avg_confidence = if total > 0 {
            round2(clauses.iter().map(|c| c.confidence).sum::<f64>() / total as f64)
        } else {
            0.0
        };
        let clause_types = clauses
            .iter()
            .map(|c| c.type_key.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total,
            high_risk,
            avg_confidence,
            clause_types,
        }
    }
}

/// Human-readable name for a clause type key: `ip_ownership` → `Ip Ownership`.
pub fn display_name(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// First [`EXCERPT_CHARS`] characters of `text`, with [`TRUNCATION_MARKER`]
/// appended when anything was cut.
pub fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
