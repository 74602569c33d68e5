//! Platform clipboard access behind a seam the bridge can be tested
//! against.
//!
//! Windows goes through `clipboard-win`, other platforms through
//! `arboard`. The interchange format is plain text only; handles are
//! opened fresh per interaction and never cached.

use thiserror::Error;

/// Clipboard failure kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No text payload is available on the clipboard.
    #[error("no text available on the clipboard")]
    Empty,
    /// The platform denied or failed the clipboard operation.
    #[error("clipboard access failed: {0}")]
    Access(String),
}

/// Plain-text clipboard access.
pub trait Clipboard {
    /// Reads the clipboard's plain-text payload.
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    /// Replaces the clipboard's payload with plain text.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        (**self).get_text()
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

/// The system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
        clipboard.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            other => ClipboardError::Access(other.to_string()),
        })
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

#[cfg(windows)]
impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        clipboard_win::get_clipboard_string().map_err(|e| ClipboardError::Access(e.to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        clipboard_win::set_clipboard_string(text)
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

/// In-memory clipboard for tests and demos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.text.clone().ok_or(ClipboardError::Empty)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_owned());
        Ok(())
    }
}
