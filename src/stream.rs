//! Byte stream plumbing shared by the escaper and unescaper

use std::io::{self, BufReader, Read, Write};

/// Terminal status of one source-to-sink transduction.
///
/// A write fault takes precedence over a read fault when both occur in the
/// same invocation, matching the priority the CLI uses to pick an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Source read to exhaustion, all output written and flushed
    Ok,
    /// The source became unreadable mid-stream
    ReadFault,
    /// The sink became unwritable mid-stream
    WriteFault,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

/// A fault raised inside the copy loop, tagged with the stream it came from.
pub(crate) enum Fault {
    Read(io::Error),
    Write(io::Error),
}

/// Buffered byte reader with a one-byte pushback slot.
///
/// Pushback is needed in exactly one place: when an octal escape run ends on
/// a non-digit, that byte must be returned to the source so it is seen again
/// as the next ordinary input byte.
pub struct ByteSource<R: Read> {
    inner: BufReader<R>,
    pushback: Option<u8>,
}

impl<R: Read> ByteSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            pushback: None,
        }
    }

    /// Read the next byte, draining the pushback slot first.
    ///
    /// Returns `Ok(None)` at end of stream. Interrupted reads are retried.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Return one unconsumed byte to the source.
    ///
    /// Only a single byte of pushback is supported; the slot must be empty.
    pub fn unread(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none());
        self.pushback = Some(byte);
    }
}

/// Flush the sink after the copy loop and fold the per-stream fault flags
/// into a terminal status. Both streams are checked independently; a write
/// fault wins when both are set.
pub(crate) fn finish<W: Write>(
    sink: &mut W,
    diag: &mut dyn Write,
    read_fault: bool,
    mut write_fault: bool,
) -> Status {
    if let Err(e) = sink.flush() {
        if !write_fault {
            report_write_error(diag, &e);
        }
        write_fault = true;
    }
    if write_fault {
        Status::WriteFault
    } else if read_fault {
        Status::ReadFault
    } else {
        Status::Ok
    }
}

pub(crate) fn report_read_error(diag: &mut dyn Write, e: &io::Error) {
    let _ = writeln!(diag, "Error: read error: {e}");
}

pub(crate) fn report_write_error(diag: &mut dyn Write, e: &io::Error) {
    let _ = writeln!(diag, "Error: write error: {e}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_byte_reads_in_order() {
        let mut src = ByteSource::new(&b"abc"[..]);
        assert_eq!(src.next_byte().unwrap(), Some(b'a'));
        assert_eq!(src.next_byte().unwrap(), Some(b'b'));
        assert_eq!(src.next_byte().unwrap(), Some(b'c'));
        assert_eq!(src.next_byte().unwrap(), None);
    }

    #[test]
    fn test_unread_is_seen_before_the_stream() {
        let mut src = ByteSource::new(&b"bc"[..]);
        assert_eq!(src.next_byte().unwrap(), Some(b'b'));
        src.unread(b'b');
        assert_eq!(src.next_byte().unwrap(), Some(b'b'));
        assert_eq!(src.next_byte().unwrap(), Some(b'c'));
        assert_eq!(src.next_byte().unwrap(), None);
    }

    #[test]
    fn test_next_byte_at_eof_stays_at_eof() {
        let mut src = ByteSource::new(&b""[..]);
        assert_eq!(src.next_byte().unwrap(), None);
        assert_eq!(src.next_byte().unwrap(), None);
    }
}
