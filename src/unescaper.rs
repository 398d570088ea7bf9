//! Filename list unescaper

use crate::stream::{self, ByteSource, Fault, Status};
use std::io::{self, Read, Write};

/// What the main loop should do after an escape sequence was handled.
enum Step {
    Continue,
    /// Trailing backslash at end of input: the stream is exhausted
    Halt,
}

/// Transforms escaped LF-separated text back into raw NUL-separated
/// filename lists.
///
/// The unescaper takes no mode parameter. Its grammar is a superset of
/// everything any [`Escaper`](crate::Escaper) mode emits, plus the C-style
/// graphic escapes (`\?` `\'` `\"`) and the `ls -b` style aliases
/// (`\ ` `\=` `\>` `\@` `\|`) as accepted input.
pub struct Unescaper {
    // Stateless; the octal sub-automaton lives entirely on the stack
}

impl Unescaper {
    /// Create a new unescaper
    pub fn new() -> Self {
        Self {}
    }

    /// Unescape `source` onto `sink`, reporting diagnostics to stderr.
    pub fn unescape<R: Read, W: Write>(&self, source: R, sink: W) -> Status {
        self.unescape_with_diag(source, sink, &mut io::stderr())
    }

    /// Unescape `source` onto `sink`, reporting diagnostics to `diag`.
    ///
    /// Malformed escape sequences produce a warning on `diag` and a
    /// best-effort literal interpretation; they never abort the stream and
    /// never change the terminal status. The one exception is a backslash
    /// as the very last byte of input, which necessarily halts processing
    /// after emitting a literal backslash.
    pub fn unescape_with_diag<R: Read, W: Write>(
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
            let step = match byte {
                b'\n' => sink.write_all(b"\0").map(|_| Step::Continue).map_err(Fault::Write),
                b'\\' => self.decode_escape(&mut src, &mut sink, diag),
                _ => sink.write_all(&[byte]).map(|_| Step::Continue).map_err(Fault::Write),
            };
            match step {
                Ok(Step::Continue) => {}
                Ok(Step::Halt) => break,
                Err(Fault::Read(e)) => {
                    stream::report_read_error(diag, &e);
                    read_fault = true;
                    break;
                }
                Err(Fault::Write(e)) => {
                    stream::report_write_error(diag, &e);
                    write_fault = true;
                    break;
                }
            }
        }

        stream::finish(&mut sink, diag, read_fault, write_fault)
    }

    /// Handle the byte after a backslash.
    fn decode_escape<R: Read, W: Write>(
        &self,
        src: &mut ByteSource<R>,
        sink: &mut W,
        diag: &mut dyn Write,
    ) -> Result<Step, Fault> {
        let selector = match src.next_byte().map_err(Fault::Read)? {
            Some(byte) => byte,
            None => {
                warn_invalid_escape(diag);
                sink.write_all(b"\\").map_err(Fault::Write)?;
                return Ok(Step::Halt);
            }
        };
        let decoded = match selector {
            b'\\' => b'\\',
            // C style, control characters
            b'n' => b'\n',
            b't' => b'\t',
            b'v' => 0x0B,
            b'b' => 0x08,
            b'r' => b'\r',
            b'f' => 0x0C,
            b'a' => 0x07,
            // C style, graphic characters
            b'?' | b'\'' | b'"' => selector,
            // From GNU coreutils ls -b
            b' ' | b'=' | b'>' | b'@' | b'|' => selector,
            b'0'..=b'9' => return self.decode_octal(selector, src, sink, diag),
            other => {
                warn_invalid_escape(diag);
                sink.write_all(&[b'\\', other]).map_err(Fault::Write)?;
                return Ok(Step::Continue);
            }
        };
        sink.write_all(&[decoded]).map_err(Fault::Write)?;
        Ok(Step::Continue)
    }

    /// Accumulate an octal run of up to three digits starting with `first`.
    ///
    /// The run stops early at end of stream, at a non-digit (pushed back
    /// onto the source), or when the running value would exceed 255 (the
    /// overflowing digit is rolled back and pushed back, with a warning).
    fn decode_octal<R: Read, W: Write>(
        &self,
        first: u8,
        src: &mut ByteSource<R>,
        sink: &mut W,
        diag: &mut dyn Write,
    ) -> Result<Step, Fault> {
        let mut value = u32::from(first - b'0');
        for _ in 1..3 {
            match src.next_byte().map_err(Fault::Read)? {
                None => break,
                Some(digit @ b'0'..=b'9') => {
                    value = value * 8 + u32::from(digit - b'0');
                    if value > 0xFF {
                        warn_invalid_escape(diag);
                        value /= 8;
                        src.unread(digit);
                        break;
                    }
                }
                Some(other) => {
                    src.unread(other);
                    break;
                }
            }
        }
        sink.write_all(&[value as u8]).map_err(Fault::Write)?;
        Ok(Step::Continue)
    }
}

impl Default for Unescaper {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_invalid_escape(diag: &mut dyn Write) {
    let _ = writeln!(diag, "Warning: invalid escape sequence");
}
