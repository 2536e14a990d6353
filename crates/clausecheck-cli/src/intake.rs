//! Document intake: turn a file (or stdin) into plain text ready for analysis.
//!
//! Text extraction proper (PDF text layers, OCR for scans) lives behind
//! [`TextExtractor`]. Only plain-text sources are handled in-tree; other kinds
//! need an extractor registered with [`Intake::with_extractor`].

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("no file provided")]
    NoFile,

    #[error("stdin (`-`) can only be read once per run")]
    StdinRepeated,

    #[error("file type not allowed: {0:?} (use PDF, PNG, JPG, or plain text)")]
    FileTypeNotAllowed(String),

    #[error("no text extractor available for {0} documents")]
    ExtractionUnavailable(DocumentKind),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not extract text from document: {found} non-blank characters, need {required}")]
    InsufficientText { found: usize, required: usize },
}

impl IntakeError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NoFile | Self::StdinRepeated | Self::FileTypeNotAllowed(_) => 2,
            Self::InsufficientText { .. } => 3,
            Self::ExtractionUnavailable(_) | Self::Io { .. } => 1,
        }
    }

    /// Stable machine-readable failure kind, as reported in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoFile => "no_file",
            Self::StdinRepeated => "invalid_arguments",
            Self::FileTypeNotAllowed(_) => "disallowed_type",
            Self::InsufficientText { .. } => "insufficient_text",
            Self::ExtractionUnavailable(_) | Self::Io { .. } => "internal",
        }
    }
}

/// Kind of source document, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image,
    Text,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Result<Self, IntakeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "png" | "jpg" | "jpeg" => Ok(Self::Image),
            "txt" | "text" | "md" => Ok(Self::Text),
            _ => Err(IntakeError::FileTypeNotAllowed(ext)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces best-effort plain text from a source document.
pub trait TextExtractor: Send + Sync {
    fn supports(&self, kind: DocumentKind) -> bool;

    fn extract(&self, path: &Path) -> Result<String, IntakeError>;
}

/// Reads UTF-8 text files as-is.
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn supports(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::Text
    }

    fn extract(&self, path: &Path) -> Result<String, IntakeError> {
        std::fs::read_to_string(path).map_err(|source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Where document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Display name used in reports.
    pub fn filename(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// Resolve command-line arguments to sources, in argument order.
///
/// Fails with [`IntakeError::NoFile`] when nothing was given and with
/// [`IntakeError::StdinRepeated`] when `-` appears more than once.
pub fn sources_from_args<P: AsRef<Path>>(args: &[P]) -> Result<Vec<Source>, IntakeError> {
    if args.is_empty() {
        return Err(IntakeError::NoFile);
    }
    let sources: Vec<Source> = args.iter().map(|a| Source::from_arg(a.as_ref())).collect();
    if sources.iter().filter(|s| **s == Source::Stdin).count() > 1 {
        return Err(IntakeError::StdinRepeated);
    }
    Ok(sources)
}

/// Extracted document text, validated and ready for the pipeline.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub text: String,
}

/// Resolves sources to text through registered extractors and rejects
/// documents whose text is too short to analyze.
pub struct Intake {
    extractors: Vec<Box<dyn TextExtractor>>,
    min_text_chars: usize,
}

impl Intake {
    /// Intake with the plain-text extractor registered.
    pub fn new(min_text_chars: usize) -> Self {
        Self {
            extractors: vec![Box::new(PlainTextExtractor)],
            min_text_chars,
        }
    }

    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn load(&self, source: &Source) -> Result<Document, IntakeError> {
        let text = match source {
            Source::Stdin => read_stdin()?,
            Source::File(path) => self.extract_file(path)?,
        };
        let filename = source.filename();
        self.validate(&filename, &text)?;
        Ok(Document { filename, text })
    }

    fn extract_file(&self, path: &Path) -> Result<String, IntakeError> {
        let kind = DocumentKind::from_path(path)?;
        let extractor = self
            .extractors
            .iter()
            .find(|e| e.supports(kind))
            .ok_or(IntakeError::ExtractionUnavailable(kind))?;

        debug!(path = %path.display(), kind = %kind, "extracting text");
        extractor.extract(path)
    }

    fn validate(&self, filename: &str, text: &str) -> Result<(), IntakeError> {
        let found = text.trim().chars().count();
        if found < self.min_text_chars {
            warn!(
                filename,
                found,
                required = self.min_text_chars,
                "rejecting document with insufficient text"
            );
            return Err(IntakeError::InsufficientText {
                found,
                required: self.min_text_chars,
            });
        }
        Ok(())
    }
}

fn read_stdin() -> Result<String, IntakeError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| IntakeError::Io {
            path: PathBuf::from("-"),
            source,
        })?;
    Ok(text)
}
