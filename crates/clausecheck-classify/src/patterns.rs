//! Pattern library: the fixed set of clause types and how to spot them.
//!
//! Declaration order is significant. It is the order in which clause types
//! are tested against a section, which in turn fixes clause id assignment.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// `(key, pattern)` in detection order. Patterns are matched case-insensitively.
const PATTERN_SOURCES: &[(&str, &str)] = &[
    (
        "confidentiality",
        r"confidential(ity)?|non-disclosure|proprietary information",
    ),
    ("governing_law", r"governing law|applicable law|law of"),
    ("jurisdiction", r"jurisdiction|venue|courts? of"),
    ("termination", r"termination|terminate|cancel(l)?ation"),
    ("assignment", r"assignment|assign|transfer of rights"),
    (
        "liability_cap",
        r"liability cap|limit(ation)? of liability|damages cap",
    ),
    ("indemnity", r"indemnif(y|ication)|hold harmless"),
    (
        "ip_ownership",
        r"intellectual property|IP ownership|copyright",
    ),
    ("payment_terms", r"payment|compensation|fees|pricing"),
    ("audit_rights", r"audit|inspection rights|right to examine"),
    (
        "data_protection",
        r"data protection|privacy|GDPR|personal data",
    ),
    (
        "force_majeure",
        r"force majeure|act of god|circumstances beyond",
    ),
];

static PATTERN_LIBRARY: LazyLock<Vec<ClauseType>> = LazyLock::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|&(key, pattern)| ClauseType::compile(key, pattern))
        .collect()
});

/// A clause category with its compiled detection pattern.
#[derive(Debug)]
pub struct ClauseType {
    pub key: &'static str,
    pub pattern: &'static str,
    regex: Regex,
}

impl ClauseType {
    fn compile(key: &'static str, pattern: &'static str) -> Self {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("pattern library entries are valid regexes");
        Self {
            key,
            pattern,
            regex,
        }
    }

    /// `governing_law` → `Governing Law`.
    pub fn display_name(&self) -> String {
        clausecheck_core::display_name(self.key)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of non-overlapping matches in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// All clause types, in detection order.
pub fn clause_types() -> &'static [ClauseType] {
    &PATTERN_LIBRARY
}

pub fn lookup(key: &str) -> Option<&'static ClauseType> {
    clause_types().iter().find(|ct| ct.key == key)
}
