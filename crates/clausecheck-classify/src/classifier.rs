//! Pattern-based clause detection and confidence scoring.
//!
//! A section "contains" a clause type when the type's pattern matches
//! anywhere in it. Types are tested independently, so one section can carry
//! several clauses. Confidence grows with the number of matches and with the
//! length of the section, and is capped below certainty.

use crate::config::ScoringConfig;
use crate::patterns::{self, ClauseType};
use clausecheck_core::round2;

/// Detects clause types in section text and scores each detection.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    scoring: ScoringConfig,
}

impl Classifier {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    /// Clause types present in `text`, in pattern library order.
    pub fn detect(&self, text: &str) -> Vec<&'static ClauseType> {
        patterns::clause_types()
            .iter()
            .filter(|ct| ct.is_match(text))
            .collect()
    }

    /// Confidence that `text` is an instance of `clause_type`.
    ///
    /// `min(ceiling, base + per_match * m + min(context_cap, w / words_per_unit))`
    /// where `m` is the match count and `w` the word count, rounded to two
    /// decimals.
    pub fn confidence(&self, text: &str, clause_type: &ClauseType) -> f64 {
        let s = &self.scoring;
        let matches = clause_type.count_matches(text) as f64;
        let words = text.split_whitespace().count() as f64;

        let context = (words / s.confidence_words_per_unit).min(s.confidence_context_cap);
        let raw = s.confidence_base + s.confidence_per_match * matches + context;

        round2(raw.min(s.confidence_ceiling))
    }
}

/// Keys of the clause types present in `text`, in pattern library order.
pub fn detect(text: &str) -> Vec<&'static str> {
    Classifier::default()
        .detect(text)
        .into_iter()
        .map(|ct| ct.key)
        .collect()
}

/// Confidence for `key` with default weights. `None` if the key is not in the
/// pattern library.
pub fn score(text: &str, key: &str) -> Option<f64> {
    patterns::lookup(key).map(|ct| Classifier::default().confidence(text, ct))
}
