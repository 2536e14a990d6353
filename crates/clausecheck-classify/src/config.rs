//! Scoring weights and pipeline limits.
//!
//! The weights are uncalibrated tunables. Defaults come from the named
//! constants below; callers that want different behaviour build their own
//! [`ScoringConfig`].

/// Confidence assigned to any detected clause before evidence is added.
pub const CONFIDENCE_BASE: f64 = 0.5;
/// Added per non-overlapping pattern match in the section.
pub const CONFIDENCE_PER_MATCH: f64 = 0.15;
/// Upper bound on the section-length contribution.
pub const CONFIDENCE_CONTEXT_CAP: f64 = 0.25;
/// Words needed for one full unit of section-length contribution.
pub const CONFIDENCE_WORDS_PER_UNIT: f64 = 200.0;
/// Confidence never exceeds this.
pub const CONFIDENCE_CEILING: f64 = 0.9;

/// Subtracted from the compliance score per red flag found.
pub const RED_FLAG_PENALTY: f64 = 0.2;
/// Subtracted from the compliance score per required element missing.
pub const MISSING_ELEMENT_PENALTY: f64 = 0.15;
/// Scores at or above this are `compliant`.
pub const COMPLIANCE_THRESHOLD: f64 = 0.7;
/// Score reported for clause types without a playbook rule.
pub const NO_PLAYBOOK_SCORE: f64 = 0.5;

/// Minimum non-blank characters a document needs before detection runs.
pub const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub confidence_base: f64,
    pub confidence_per_match: f64,
    pub confidence_context_cap: f64,
    pub confidence_words_per_unit: f64,
    pub confidence_ceiling: f64,
    pub red_flag_penalty: f64,
    pub missing_element_penalty: f64,
    pub compliance_threshold: f64,
    pub no_playbook_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence_base: CONFIDENCE_BASE,
            confidence_per_match: CONFIDENCE_PER_MATCH,
            confidence_context_cap: CONFIDENCE_CONTEXT_CAP,
            confidence_words_per_unit: CONFIDENCE_WORDS_PER_UNIT,
            confidence_ceiling: CONFIDENCE_CEILING,
            red_flag_penalty: RED_FLAG_PENALTY,
            missing_element_penalty: MISSING_ELEMENT_PENALTY,
            compliance_threshold: COMPLIANCE_THRESHOLD,
            no_playbook_score: NO_PLAYBOOK_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub scoring: ScoringConfig,
    /// Documents with fewer non-blank characters are rejected.
    pub min_text_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            min_text_chars: MIN_TEXT_CHARS,
        }
    }
}

impl PipelineConfig {
    pub fn with_min_text_chars(mut self, min_text_chars: usize) -> Self {
        self.min_text_chars = min_text_chars;
        self
    }
}
