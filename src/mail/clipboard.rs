use crate::mail::cf_html::ClipboardContent;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Write(#[from] arboard::Error),
}

/// Destination for a clipboard write. The production implementation is
/// the system clipboard; tests substitute their own.
pub trait ClipboardSink {
    fn write(&mut self, content: &ClipboardContent) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard, writing the rich and plain
/// representations together.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, content: &ClipboardContent) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_html(content.html.as_str(), Some(content.text.as_str()))?;
        Ok(())
    }
}
