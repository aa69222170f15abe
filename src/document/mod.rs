//! Plain-text document storage.
//!
//! A [`Document`] holds the contents of the viewed file in a rope so
//! line access stays cheap for large files. It knows nothing about
//! cursors or viewports — it only answers "how many lines" and "what is
//! line N".

use std::path::{Path, PathBuf};

use ropey::Rope;
use thiserror::Error;

/// Failure to load a document from disk.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The viewed file's text, line-addressable.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create a document from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Create an empty document.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Read a document from disk. Invalid UTF-8 is replaced rather than
    /// rejected — this is a viewer, not a validator.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    /// Number of content lines.
    ///
    /// A trailing newline does not count as an extra empty line, and an
    /// empty document has zero lines.
    pub fn line_count(&self) -> usize {
        if self.rope.len_chars() == 0 {
            return 0;
        }
        let lines = self.rope.len_lines();
        if self.rope.char(self.rope.len_chars() - 1) == '\n' {
            lines - 1
        } else {
            lines
        }
    }

    /// Whether the document has no content at all.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get the content of a line without its trailing newline.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.line_count() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(
            line.trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string(),
        )
    }

    /// The full text content.
    pub fn source(&self) -> String {
        self.rope.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_zero_lines() {
        let doc = Document::empty();
        assert_eq!(doc.line_count(), 0);
        assert!(doc.is_empty());
        assert!(doc.line_at(0).is_none());
    }

    #[test]
    fn test_line_count_without_trailing_newline() {
        let doc = Document::from_text("one\ntwo\nthree");
        assert_eq!(doc.line_count(), 3);
    }

    #[test]
    fn test_trailing_newline_is_not_an_extra_line() {
        let doc = Document::from_text("one\ntwo\nthree\n");
        assert_eq!(doc.line_count(), 3);
        assert!(doc.line_at(3).is_none());
    }

    #[test]
    fn test_line_at_strips_line_endings() {
        let doc = Document::from_text("one\r\ntwo\r\n");
        assert_eq!(doc.line_at(0).as_deref(), Some("one"));
        assert_eq!(doc.line_at(1).as_deref(), Some("two"));
    }

    #[test]
    fn test_line_at_out_of_range_is_none() {
        let doc = Document::from_text("only");
        assert_eq!(doc.line_at(0).as_deref(), Some("only"));
        assert!(doc.line_at(1).is_none());
    }

    #[test]
    fn test_load_reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "alpha\nbeta\n").unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_at(1).as_deref(), Some("beta"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Document::load(Path::new("/nonexistent/nowhere.txt")).unwrap_err();
        assert!(err.to_string().contains("nowhere.txt"));
    }

    #[test]
    fn test_load_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.bin");
        std::fs::write(&path, b"ok\n\xFF\xFEbad\n").unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.line_count(), 2);
        assert!(doc.line_at(1).unwrap().contains('\u{FFFD}'));
    }

    #[test]
    fn test_source_round_trips() {
        let text = "a\nb\nc\n";
        assert_eq!(Document::from_text(text).source(), text);
    }
}
