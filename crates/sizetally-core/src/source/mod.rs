//! Document sources that produce plain text for the label parser.

mod pdf;
mod text;

pub use pdf::PdfSource;
pub use text::PlainTextSource;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SourceError;

/// Kind of source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// PDF order export.
    Pdf,
    /// Plain text file.
    Text,
}

impl SourceKind {
    /// Decide the kind from a file extension. Anything but `.pdf` is text.
    pub fn from_path(path: &Path) -> Self {
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

        if is_pdf { SourceKind::Pdf } else { SourceKind::Text }
    }
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Trait for text source implementations.
pub trait TextSource {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Extract the document text.
    fn extract_text(&self) -> Result<String>;
}

/// A loaded document's text.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: SourceKind,
    pub text: String,
}

/// Read a document from disk, dispatching on its extension.
pub fn read_document(path: &Path) -> crate::Result<Document> {
    let kind = SourceKind::from_path(path);
    let data = std::fs::read(path)?;

    let text = match kind {
        SourceKind::Pdf => {
            let mut source = PdfSource::new();
            source.load(&data)?;
            source.extract_text()?
        }
        SourceKind::Text => {
            let mut source = PlainTextSource::new();
            source.load(&data)?;
            source.extract_text()?
        }
    };

    debug!("Read {:?} document {} ({} bytes of text)", kind, path.display(), text.len());
    Ok(Document { kind, text })
}
