//! Plain text order exports.

use super::{Result, TextSource};
use crate::error::SourceError;

/// Reads a text file as UTF-8, replacing invalid sequences.
#[derive(Debug, Default)]
pub struct PlainTextSource {
    text: Option<String>,
}

impl PlainTextSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextSource for PlainTextSource {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let text = String::from_utf8_lossy(data);
        // A leading byte order mark would hide a label on the first line
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        self.text = Some(text.to_string());
        Ok(())
    }

    fn extract_text(&self) -> Result<String> {
        self.text.clone().ok_or(SourceError::NotLoaded)
    }
}
