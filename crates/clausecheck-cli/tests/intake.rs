use std::fs;
use std::path::Path;

use clausecheck_classify::Pipeline;
use clausecheck_cli::{
    DocumentError, DocumentKind, Intake, IntakeError, Source, TextExtractor, analyze_source,
};
use clausecheck_core::ComparisonStatus;

const CONTRACT: &str = "\
SERVICES AGREEMENT

1. Confidentiality
The definition of Confidential Information and its exclusions are set out in Schedule 3.
The return clause in Schedule 4 applies on expiry.

2. Limitation of Liability
Neither party has unlimited liability. The cap amount is twice the annual fees.
";

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn plain_text_document_is_analyzed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "services.txt", CONTRACT);

    let report = analyze_source(
        &Intake::new(50),
        &Pipeline::default(),
        &Source::File(path),
    )
    .unwrap();

    assert_eq!(report.filename, "services.txt");
    assert_eq!(report.extracted_text_length, CONTRACT.chars().count());

    let keys: Vec<&str> = report.clauses.iter().map(|c| c.type_key.as_str()).collect();
    assert_eq!(keys, vec!["confidentiality", "liability_cap", "payment_terms"]);

    let confidentiality = &report.clauses[0];
    assert_eq!(confidentiality.section_index, 2);
    assert_eq!(confidentiality.comparison.status, ComparisonStatus::Compliant);
    assert_eq!(confidentiality.comparison.score, 1.0);

    let cap = &report.clauses[1];
    assert_eq!(cap.comparison.red_flags_found, vec!["unlimited liability"]);
    assert_eq!(cap.comparison.missing_elements, vec!["exceptions"]);
    assert_eq!(cap.comparison.score, 0.65);
    assert_eq!(cap.comparison.status, ComparisonStatus::NeedsReview);

    assert_eq!(report.statistics.total, 3);
    assert_eq!(report.statistics.high_risk, 1);
    assert_eq!(report.statistics.clause_types, 3);
}

#[test]
fn short_document_rejected_before_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "blank.txt", "   \n  Page 1  \n\n");

    let err = analyze_source(&Intake::new(50), &Pipeline::default(), &Source::File(path))
        .unwrap_err();

    assert!(matches!(
        err,
        DocumentError::Intake(IntakeError::InsufficientText {
            found: 6,
            required: 50
        })
    ));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn disallowed_type_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "contract.docx", CONTRACT);

    let err = analyze_source(&Intake::new(50), &Pipeline::default(), &Source::File(path))
        .unwrap_err();
    assert!(matches!(
        err,
        DocumentError::Intake(IntakeError::FileTypeNotAllowed(_))
    ));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = analyze_source(
        &Intake::new(50),
        &Pipeline::default(),
        &Source::File(dir.path().join("absent.txt")),
    )
    .unwrap_err();
    assert!(matches!(err, DocumentError::Intake(IntakeError::Io { .. })));
    assert_eq!(err.exit_code(), 1);
}

/// Stands in for an OCR engine: returns fixed text for any image.
struct FixedOcr(&'static str);

impl TextExtractor for FixedOcr {
    fn supports(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::Image
    }

    fn extract(&self, _path: &Path) -> Result<String, IntakeError> {
        Ok(self.0.to_string())
    }
}

#[test]
fn registered_extractor_handles_images() {
    let intake = Intake::new(50).with_extractor(Box::new(FixedOcr(CONTRACT)));
    let report = analyze_source(
        &intake,
        &Pipeline::default(),
        &Source::File("scan.png".into()),
    )
    .unwrap();
    assert_eq!(report.filename, "scan.png");
    assert_eq!(report.total_clauses, 3);

    let err = intake.load(&Source::File("scan.pdf".into())).unwrap_err();
    assert!(matches!(
        err,
        IntakeError::ExtractionUnavailable(DocumentKind::Pdf)
    ));
}
