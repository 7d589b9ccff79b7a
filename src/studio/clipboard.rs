use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> io::Result<()>;
}

/// Sets the system clipboard through the terminal emulator using the OSC 52 escape sequence.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_base64_payload() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.set_text("hello").unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;aGVsbG8=\x07");
    }
}
