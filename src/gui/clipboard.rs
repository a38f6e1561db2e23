//! Clipboard functionality

use crate::download::Navigator;
use crate::utils::error::AppError;
use arboard::Clipboard;
use url::Url;

/// Get clipboard content
pub fn get_clipboard_content() -> Result<String, AppError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map_err(|e| AppError::Clipboard(format!("Failed to read clipboard: {}", e)))
}

/// Set clipboard content
pub fn set_clipboard_content(text: &str) -> Result<(), AppError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| AppError::Clipboard(format!("Failed to write clipboard: {}", e)))
}

/// Copies download links to the clipboard instead of opening a browser
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardNavigator;

impl Navigator for ClipboardNavigator {
    fn open(&self, url: &Url) -> Result<(), AppError> {
        set_clipboard_content(url.as_str())
    }
}
