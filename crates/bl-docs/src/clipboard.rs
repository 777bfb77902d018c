//! Terminal clipboard via the OSC 52 escape sequence.
//!
//! Terminals that support OSC 52 place the payload on the system clipboard,
//! which also works over SSH. Terminals without support ignore it.

use std::io::Write;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use bl_renderer::{Clipboard, ClipboardError};

/// Clipboard that writes OSC 52 sequences to `out`.
pub(crate) struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// OSC 52 "set clipboard" sequence for `text`.
fn osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64_STANDARD.encode(text))
}
