//! Playbook registry and clause comparison.
//!
//! A playbook rule says what good language for a clause type looks like:
//! phrases that should not appear (red flags) and phrases that must appear
//! (required elements). Comparison is plain case-insensitive substring
//! containment. Red flags cost more than missing elements.

use clausecheck_core::{ComparisonResult, ComparisonStatus, round2};

use crate::config::ScoringConfig;

/// Governance rule for one clause type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybookRule {
    pub key: &'static str,
    pub preferred_language: &'static str,
    pub red_flags: &'static [&'static str],
    pub required_elements: &'static [&'static str],
}

static PLAYBOOK: &[PlaybookRule] = &[
    PlaybookRule {
        key: "confidentiality",
        preferred_language: "The Receiving Party shall maintain all Confidential Information in strict confidence.",
        red_flags: &["perpetual", "no return obligation"],
        required_elements: &["definition", "exclusions", "return clause"],
    },
    PlaybookRule {
        key: "liability_cap",
        preferred_language: "Total liability shall not exceed fees paid in the 12 months preceding the claim.",
        red_flags: &["unlimited liability", "no cap"],
        required_elements: &["cap amount", "exceptions"],
    },
    PlaybookRule {
        key: "termination",
        preferred_language: "Either party may terminate with 30 days written notice.",
        red_flags: &["no notice period", "no cure rights"],
        required_elements: &["notice period", "cure period", "survival"],
    },
];

/// All playbook rules.
pub fn rules() -> &'static [PlaybookRule] {
    PLAYBOOK
}

pub fn rule(key: &str) -> Option<&'static PlaybookRule> {
    PLAYBOOK.iter().find(|r| r.key == key)
}

/// Compares clause text against the playbook.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    scoring: ScoringConfig,
}

impl Comparator {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    /// Evaluate `text` against the rule for `key`.
    ///
    /// Without a rule the result is `no_playbook` with the neutral score.
    pub fn compare(&self, text: &str, key: &str) -> ComparisonResult {
        let s = &self.scoring;

        let Some(rule) = rule(key) else {
            return ComparisonResult {
                status: ComparisonStatus::NoPlaybook,
                score: s.no_playbook_score,
                red_flags_found: Vec::new(),
                missing_elements: Vec::new(),
                preferred_language: None,
            };
        };

        let text_lower = text.to_lowercase();
        let contains = |phrase: &str| text_lower.contains(&phrase.to_lowercase());

        let red_flags_found: Vec<String> = rule
            .red_flags
            .iter()
            .filter(|&&flag| contains(flag))
            .map(|flag| flag.to_string())
            .collect();

        let missing_elements: Vec<String> = rule
            .required_elements
            .iter()
            .filter(|&&element| !contains(element))
            .map(|element| element.to_string())
            .collect();

        let raw = 1.0
            - s.red_flag_penalty * red_flags_found.len() as f64
            - s.missing_element_penalty * missing_elements.len() as f64;
        let score = round2(raw.clamp(0.0, 1.0));

        let status = if score >= s.compliance_threshold {
            ComparisonStatus::Compliant
        } else {
            ComparisonStatus::NeedsReview
        };

        ComparisonResult {
            status,
            score,
            red_flags_found,
            missing_elements,
            preferred_language: Some(rule.preferred_language.to_string()),
        }
    }
}

/// [`Comparator::compare`] with default weights.
pub fn compare(text: &str, key: &str) -> ComparisonResult {
    Comparator::default().compare(text, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    #[test]
    fn every_rule_names_a_known_clause_type() {
        for r in rules() {
            assert!(patterns::lookup(r.key).is_some(), "unknown key {}", r.key);
        }
    }

    #[test]
    fn no_playbook_for_ungoverned_type() {
        let result = compare("Fees are payable within 30 days.", "payment_terms");
        assert_eq!(result.status, ComparisonStatus::NoPlaybook);
        assert_eq!(result.score, 0.5);
        assert!(result.red_flags_found.is_empty());
        assert!(result.missing_elements.is_empty());
        assert!(result.preferred_language.is_none());
    }

    #[test]
    fn fully_compliant_termination() {
        let text = "Either party may terminate with a notice period of 30 days. \
                    A cure period of 10 days applies. Survival: sections 5 and 6.";
        let result = compare(text, "termination");
        assert_eq!(result.status, ComparisonStatus::Compliant);
        assert_eq!(result.score, 1.0);
        assert!(result.red_flags_found.is_empty());
        assert!(result.missing_elements.is_empty());
        assert_eq!(
            result.preferred_language.as_deref(),
            Some("Either party may terminate with 30 days written notice.")
        );
    }

    #[test]
    fn one_red_flag_one_missing_needs_review() {
        let text = "The definition and exclusions apply. Obligations are perpetual.";
        let result = compare(text, "confidentiality");
        assert_eq!(result.red_flags_found, vec!["perpetual"]);
        assert_eq!(result.missing_elements, vec!["return clause"]);
        assert_eq!(result.score, 0.65);
        assert_eq!(result.status, ComparisonStatus::NeedsReview);
    }

    #[test]
    fn single_red_flag_stays_compliant() {
        let text = "Definition, exclusions and a return clause. Duration: perpetual.";
        let result = compare(text, "confidentiality");
        assert_eq!(result.score, 0.8);
        assert_eq!(result.status, ComparisonStatus::Compliant);
    }

    #[test]
    fn two_missing_elements_lands_on_threshold() {
        let text = "The cap amount is set out in Schedule 2.";
        let result = compare(text, "liability_cap");
        assert_eq!(result.missing_elements, vec!["exceptions"]);
        assert_eq!(result.score, 0.85);

        // 1.0 - 2 * 0.15 = 0.70, which is compliant.
        let result = compare("Notice period is 30 days.", "termination");
        assert_eq!(result.missing_elements, vec!["cure period", "survival"]);
        assert_eq!(result.score, 0.7);
        assert_eq!(result.status, ComparisonStatus::Compliant);
    }

    #[test]
    fn matching_ignores_case() {
        let result = compare("UNLIMITED LIABILITY. NO CAP.", "liability_cap");
        assert_eq!(result.red_flags_found, vec!["unlimited liability", "no cap"]);
    }

    #[test]
    fn score_clamped_at_zero() {
        // 2 red flags, 2 missing ("notice period" is inside a red flag): 1.0 - 0.4 - 0.3
        let result = compare("no notice period and no cure rights", "termination");
        assert_eq!(result.missing_elements, vec!["cure period", "survival"]);
        assert_eq!(result.score, 0.3);

        let harsh = Comparator::new(ScoringConfig {
            red_flag_penalty: 0.6,
            ..ScoringConfig::default()
        });
        let result = harsh.compare("no notice period and no cure rights", "termination");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.status, ComparisonStatus::NeedsReview);
    }

    #[test]
    fn status_agrees_with_score() {
        let samples = [
            "",
            "perpetual",
            "definition exclusions return clause",
            "no cap unlimited liability cap amount exceptions",
            "notice period cure period",
        ];
        for text in samples {
            for r in rules() {
                let result = compare(text, r.key);
                assert!((0.0..=1.0).contains(&result.score));
                assert_eq!(
                    result.status == ComparisonStatus::Compliant,
                    result.score >= 0.7,
                    "{} on {:?}",
                    r.key,
                    text
                );
            }
        }
    }

    #[test]
    fn comparison_is_deterministic() {
        let text = "Confidential Information includes a definition; perpetual term.";
        assert_eq!(compare(text, "confidentiality"), compare(text, "confidentiality"));
    }
}
