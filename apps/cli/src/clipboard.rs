//! Terminal clipboard via the OSC 52 escape sequence.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use otsav::features::brochure::{BrochureError, Clipboard};
use std::io::{IsTerminal, Write};

#[derive(Debug, Default)]
pub(crate) struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn write_text(&self, text: &str) -> Result<(), BrochureError> {
        let mut stdout = std::io::stdout().lock();
        if !stdout.is_terminal() {
            return Err(BrochureError::Clipboard {
                message: "stdout is not a terminal".into(),
                context: None,
            });
        }

        write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))
            .and_then(|()| stdout.flush())
            .map_err(|e| BrochureError::Clipboard {
                message: e.to_string().into(),
                context: Some("Writing OSC 52 sequence".into()),
            })
    }
}
