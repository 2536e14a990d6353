//! Vertical card display for analysis reports.
//!
//! Renders a report header, the summary statistics, and one card per clause
//! with risk findings grouped under the clause.

use std::fmt::{self, Write};

use clausecheck_classify::{patterns, playbook};
use clausecheck_core::{Clause, ComparisonStatus};

use crate::report::{FailedReport, Outcome, Report};

const MAX_LIST_ITEMS: usize = 10;
const EXCERPT_PREVIEW_CHARS: usize = 160;

// ── Public API ──

/// Render a report as grouped, human-readable cards.
pub fn render_report(report: &Report) -> String {
    ReportCard(report).to_string()
}

/// Render a report card, or a short error card for a failed document.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Analyzed(report) => render_report(report),
        Outcome::Failed(failed) => FailureCard(failed).to_string(),
    }
}

/// Render the pattern library with playbook coverage.
pub fn render_patterns() -> String {
    PatternTable.to_string()
}

struct ReportCard<'a>(&'a Report);

impl fmt::Display for ReportCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let s = &report.statistics;

        writeln!(f, "=== {} ===", report.filename)?;
        writeln!(
            f,
            "{} characters analyzed at {}",
            report.extracted_text_length, report.analyzed_at
        )?;
        writeln!(f)?;

        writeln!(f, "Summary")?;
        field(f, "clauses found", s.total)?;
        field(f, "red flags", s.high_risk)?;
        field(
            f,
            "avg confidence",
            format_args!("{:.0}%", s.avg_confidence * 100.0),
        )?;
        field(f, "clause types", s.clause_types)?;
        writeln!(f)?;

        if report.clauses.is_empty() {
            return writeln!(f, "No clauses detected.");
        }

        for clause in &report.clauses {
            render_clause(f, clause)?;
        }
        Ok(())
    }
}

struct FailureCard<'a>(&'a FailedReport);

impl fmt::Display for FailureCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.0.filename)?;
        field(f, "failed", self.0.kind)?;
        field(f, "error", &self.0.error)?;
        writeln!(f)
    }
}

struct PatternTable;

impl fmt::Display for PatternTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18} {:<10} pattern", "clause type", "playbook")?;
        for ct in patterns::clause_types() {
            let governed = if playbook::rule(ct.key).is_some() {
                "yes"
            } else {
                "-"
            };
            writeln!(f, "{:<18} {:<10} {}", ct.key, governed, ct.pattern)?;
        }
        Ok(())
    }
}

// ── Clause cards ──

fn render_clause(f: &mut fmt::Formatter<'_>, clause: &Clause) -> fmt::Result {
    let cmp = &clause.comparison;

    writeln!(f, "[{}] {}", clause.id, clause.display_type)?;
    field(f, "section", clause.section_index)?;
    field(
        f,
        "confidence",
        format_args!(
            "{:.2} ({})",
            clause.confidence,
            clause.confidence_band().as_str()
        ),
    )?;
    field(f, "status", status_badge(cmp.status))?;
    if cmp.status != ComparisonStatus::NoPlaybook {
        field(f, "score", format_args!("{:.2}", cmp.score))?;
    }
    list(f, "red flags", &cmp.red_flags_found)?;
    list(f, "missing elements", &cmp.missing_elements)?;
    if let Some(preferred) = &cmp.preferred_language {
        field(f, "preferred", preferred)?;
    }
    field(f, "excerpt", preview(&clause.excerpt))?;
    field(f, "review", format!("{:?}", clause.review_status).to_lowercase())?;
    writeln!(f)
}

fn status_badge(status: ComparisonStatus) -> &'static str {
    match status {
        ComparisonStatus::Compliant => "Compliant",
        ComparisonStatus::NeedsReview => "Needs Review",
        ComparisonStatus::NoPlaybook => "No Playbook",
    }
}

// ── Helpers ──

fn field(f: &mut fmt::Formatter<'_>, name: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {:<20} {}", name, value)
}

fn list(f: &mut fmt::Formatter<'_>, name: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    let shown: Vec<&str> = items
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(String::as_str)
        .collect();
    let mut value = shown.join(", ");
    if items.len() > MAX_LIST_ITEMS {
        write!(value, " ... and {} more", items.len() - MAX_LIST_ITEMS)?;
    }
    field(f, name, value)
}

/// Single-line preview of an excerpt.
fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(EXCERPT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}
