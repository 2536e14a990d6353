//! Section segmentation for contract text.
//!
//! Splits extracted document text into contiguous runs of non-blank lines,
//! starting a new run at every heading-like line.
//!
//! # Heading heuristics
//!
//! A line opens a new section when either holds:
//!
//! - Numbered heading: ASCII digits, a period, whitespace, then an uppercase
//!   ASCII letter (`"12. Termination"`, `"3.  GOVERNING LAW"`).
//! - Shouted heading: the line contains at least one cased letter, none of
//!   them lowercase, and is longer than 3 characters (`"CONFIDENTIALITY"`).
//!
//! The heading line becomes the first line of the section it introduces.
//! Blank lines are dropped but never close a section on their own.
//! Line endings are stripped before either test, so `"ABC\r\n"` is three
//! characters long and is not a heading under either ending style.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum length (exclusive, in characters) for an all-caps line to count as
/// a heading.
const SHOUTED_HEADING_MIN_CHARS: usize = 3;

/// A contiguous run of non-blank lines, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 1-based position in the document.
    pub index: usize,
    /// Section lines joined with `\n`.
    pub text: String,
}

/// Split `text` into ordered sections.
///
/// Text before the first heading forms its own section. Text with no
/// headings is a single section. Text with no non-blank lines yields no
/// sections.
pub fn segment(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if is_section_boundary(line) && !current.is_empty() {
            push_section(&mut sections, &mut current);
        }
        if !line.trim().is_empty() {
            current.push(line);
        }
    }

    if !current.is_empty() {
        push_section(&mut sections, &mut current);
    }

    debug!(sections = sections.len(), "segmented document");
    sections
}

fn push_section(sections: &mut Vec<Section>, lines: &mut Vec<&str>) {
    sections.push(Section {
        index: sections.len() + 1,
        text: lines.join("\n"),
    });
    lines.clear();
}

/// Whether `line` marks the start of a new section.
pub fn is_section_boundary(line: &str) -> bool {
    is_numbered_heading(line) || is_shouted_heading(line)
}

/// `^\d+\.\s+[A-Z]`
fn is_numbered_heading(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }

    let Some(rest) = line[digits..].strip_prefix('.') else {
        return false;
    };

    let after_space = rest.trim_start();
    if after_space.len() == rest.len() {
        return false;
    }

    after_space
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
}

fn is_shouted_heading(line: &str) -> bool {
    let has_upper = line.chars().any(char::is_uppercase);
    let has_lower = line.chars().any(char::is_lowercase);
    has_upper && !has_lower && line.chars().count() > SHOUTED_HEADING_MIN_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_blank_lines(text: &str) -> Vec<&str> {
        text.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    /// Every non-blank input line appears exactly once, in order.
    fn assert_coverage(input: &str) {
        let sections = segment(input);
        let out: Vec<&str> = sections.iter().flat_map(|s| s.text.lines()).collect();
        assert_eq!(out, non_blank_lines(input));
    }

    #[test]
    fn numbered_headings() {
        assert!(is_section_boundary("1. Definitions"));
        assert!(is_section_boundary("12.  Governing Law"));
        assert!(is_section_boundary("3.\tTERMINATION"));
        assert!(!is_section_boundary("1.definitions"));
        assert!(!is_section_boundary("1. the parties agree"));
        assert!(!is_section_boundary("1.2 Scope"));
        assert!(!is_section_boundary(". Heading"));
        assert!(!is_section_boundary("  1. Indented"));
    }

    #[test]
    fn shouted_headings() {
        assert!(is_section_boundary("CONFIDENTIALITY"));
        assert!(is_section_boundary("ARTICLE 7 - FEES"));
        assert!(!is_section_boundary("ABC"));
        assert!(!is_section_boundary("1234"));
        assert!(!is_section_boundary("Confidentiality"));
        assert!(!is_section_boundary("----"));
    }

    #[test]
    fn no_headings_is_single_section() {
        let text = "The parties agree as follows.\nPayment is due monthly.";
        let sections = segment(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].index, 1);
        assert_eq!(sections[0].text, text);
    }

    #[test]
    fn heading_starts_new_section() {
        let text = "\
1. Confidentiality
The receiving party keeps information secret.
2. Termination
Either party may terminate.";
        let sections = segment(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(
            sections[0].text,
            "1. Confidentiality\nThe receiving party keeps information secret."
        );
        assert_eq!(sections[1].text, "2. Termination\nEither party may terminate.");
    }

    #[test]
    fn leading_text_forms_own_section() {
        let text = "This Agreement is made today.\n\nCONFIDENTIALITY\nKeep it secret.";
        let sections = segment(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text, "This Agreement is made today.");
        assert_eq!(sections[1].text, "CONFIDENTIALITY\nKeep it secret.");
    }

    #[test]
    fn blank_lines_dropped_but_do_not_split() {
        let text = "GENERAL\n\nFirst paragraph.\n\n   \nSecond paragraph.";
        let sections = segment(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].text, "GENERAL\nFirst paragraph.\nSecond paragraph.");
    }

    #[test]
    fn consecutive_headings_each_own_section() {
        let text = "MASTER SERVICES AGREEMENT\n1. Definitions\nTerms used herein.";
        let sections = segment(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text, "MASTER SERVICES AGREEMENT");
        assert_eq!(sections[1].text, "1. Definitions\nTerms used herein.");
    }

    #[test]
    fn indices_are_contiguous_and_one_based() {
        let text = "PREAMBLE\na\nRECITALS\nb\n1. Scope\nc\n2. Fees\nd";
        let sections = segment(text);
        let indices: Vec<usize> = sections.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn blank_input_has_no_sections() {
        assert!(segment("").is_empty());
        assert!(segment("\n   \n\t\n").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let sections = segment("1. Scope\r\nServices.\r\n2. Fees\r\nMonthly.\r\n");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text, "1. Scope\nServices.");
    }

    #[test]
    fn short_shouted_line_is_not_a_heading_under_crlf() {
        let lf = segment("Preamble text.\nABC\nMore text.\n");
        let crlf = segment("Preamble text.\r\nABC\r\nMore text.\r\n");
        assert_eq!(lf.len(), 1);
        assert_eq!(crlf, lf);

        let crlf = segment("Preamble text.\r\nABCD\r\nMore text.\r\n");
        assert_eq!(crlf.len(), 2);
        assert_eq!(crlf[1].text, "ABCD\nMore text.");
    }

    #[test]
    fn coverage_preserved() {
        assert_coverage("");
        assert_coverage("single line");
        assert_coverage("HEADING\n\nbody\n1. Next\n\n\nmore body\nLAST ONE\n");
        assert_coverage("lead\n\nLEAD TWO\nx\n2. Y z\n3. Z\n");
    }
}
