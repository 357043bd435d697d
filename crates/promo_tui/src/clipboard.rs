//! Clipboard access for copying the promo code.

use crossterm::{clipboard::CopyToClipboard, execute};
use std::io;

/// Somewhere the promo code can be copied to.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// System clipboard reached through the terminal's OSC 52 sequence.
///
/// Success only means the sequence was written; terminals without OSC 52
/// support drop it silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        execute!(io::stdout(), CopyToClipboard::to_clipboard_from(text))
    }
}
