//! Filename list escaper

use crate::stream::{self, ByteSource, Status};
use std::io::{self, Read, Write};

/// Fixed table mapping bytes 0x07..=0x0D to their C-style escape letters.
const ABTNVFR: [u8; 7] = *b"abtnvfr";

/// Escaping verbosity level, fixed for the duration of one invocation.
///
/// Every mode turns NUL into a literal LF (the record separator) and doubles
/// backslashes; the modes differ only in how control characters inside a
/// filename are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Escape LF and backslash only
    #[default]
    Minimum,
    /// Escape all C0 control chars and DEL, using `\a\b\t\n\v\f\r` where
    /// a named letter exists and octal otherwise
    CStyle,
    /// Escape all C0 control chars and DEL in octal, including literal LF
    /// as `\012` so it can never be mistaken for a record separator
    Octal,
}

/// Transforms raw NUL-separated filename lists into escaped LF-separated text.
pub struct Escaper {
    mode: Mode,
}

impl Escaper {
    /// Create an escaper running under the given mode
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Escape `source` onto `sink`, reporting faults to stderr.
    pub fn escape<R: Read, W: Write>(&self, source: R, sink: W) -> Status {
        self.escape_with_diag(source, sink, &mut io::stderr())
    }

    /// Escape `source` onto `sink`, reporting faults to `diag`.
    ///
    /// The loop aborts on the first fault; a partially written escape is
    /// acceptable then because the sink is already unusable downstream.
    /// Both streams are checked independently afterwards, with a write
    /// fault taking precedence in the returned status.
    pub fn escape_with_diag<R: Read, W: Write>(
        &self,
        source: R,
        mut sink: W,
        diag: &mut dyn Write,
    ) -> Status {
        let mut src = ByteSource::new(source);
        let mut read_fault = false;
        let mut write_fault = false;

        loop {
            let byte = match src.next_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => break,
                Err(e) => {
                    stream::report_read_error(diag, &e);
                    read_fault = true;
                    break;
                }
            };
            if let Err(e) = self.emit(byte, &mut sink) {
                stream::report_write_error(diag, &e);
                write_fault = true;
                break;
            }
        }

        stream::finish(&mut sink, diag, read_fault, write_fault)
    }

    /// Write the escaped form of one raw byte.
    ///
    /// Rules are checked in priority order; the first match wins.
    fn emit<W: Write>(&self, byte: u8, sink: &mut W) -> io::Result<()> {
        match byte {
            0x00 => sink.write_all(b"\n"),
            b'\\' => sink.write_all(b"\\\\"),
            b'\n' if self.mode != Mode::Octal => sink.write_all(b"\\n"),
            0x07..=0x0D if self.mode == Mode::CStyle => {
                sink.write_all(&[b'\\', ABTNVFR[usize::from(byte - 0x07)]])
            }
            0x01..=0x1F | 0x7F if self.mode != Mode::Minimum => {
                sink.write_all(&octal_escape(byte))
            }
            _ => sink.write_all(&[byte]),
        }
    }
}

impl Default for Escaper {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

/// Backslash followed by exactly three octal digits, zero padded.
fn octal_escape(byte: u8) -> [u8; 4] {
    [
        b'\\',
        b'0' + (byte >> 6),
        b'0' + ((byte >> 3) & 0o7),
        b'0' + (byte & 0o7),
    ]
}
