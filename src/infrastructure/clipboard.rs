use crate::domain::{error::ExpansionError, expansions::ClipboardSink};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;
use std::sync::Mutex;

/// Copies through the terminal using the OSC 52 escape sequence, so it works
/// over SSH and without a system clipboard daemon.
pub struct Osc52Clipboard<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write + Send> ClipboardSink for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> Result<(), ExpansionError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ExpansionError::Clipboard("terminal writer poisoned".to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| ExpansionError::Clipboard(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeniedWriter;

    impl Write for DeniedWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_osc52_sequence() {
        let clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.write_text("left-pad\nright-pad").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        let encoded = STANDARD.encode("left-pad\nright-pad");
        assert_eq!(written, format!("\x1b]52;c;{encoded}\x07"));
    }

    #[test]
    fn test_write_failure_is_clipboard_error() {
        let clipboard = Osc52Clipboard::new(DeniedWriter);
        let err = clipboard.write_text("npm").unwrap_err();
        assert!(matches!(err, ExpansionError::Clipboard(_)));
    }
}
