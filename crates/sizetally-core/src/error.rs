//! Error types for the sizetally-core library.

use thiserror::Error;

/// Main error type for the sizetally library.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Document source error.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TallyError {
    /// Whether the error came from a document that could not be read as text.
    pub fn is_source(&self) -> bool {
        matches!(self, TallyError::Source(_))
    }
}

/// Errors raised while turning a source document into text lines.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The document was readable but produced no text at all.
    #[error("no text could be extracted from the document")]
    NoText,

    /// A source was asked for text before anything was loaded.
    #[error("no document loaded")]
    NotLoaded,
}

/// Result type for the sizetally library.
pub type Result<T> = std::result::Result<T, TallyError>;
