//! Byte-stream cursor with one-byte pushback.
//!
//! The parser's whole input state lives here: the next unread offset and at
//! most one pushed-back byte of lookahead. The reader is also where error
//! context is captured, since it can seek the underlying stream back to the
//! bytes surrounding a failure.

use std::io::{self, Read, Seek, SeekFrom};

use crate::error::ErrorContext;

/// A seekable byte stream read one byte at a time.
///
/// Reads block on the underlying stream; wrap files in
/// [`std::io::BufReader`] to avoid a syscall per byte.
#[derive(Debug)]
pub struct ByteReader<R> {
    inner: R,
    peeked: Option<u8>,
    offset: u64,
}

impl<R: Read + Seek> ByteReader<R> {
    /// Wraps a stream, starting at its current position.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
            offset: 0,
        }
    }

    /// Offset of the next byte [`next_byte`](Self::next_byte) will return.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Reads one byte, or `None` at end of stream.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.peeked.take() {
            self.offset += 1;
            return Ok(Some(byte));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Pushes the last read byte back; the next read returns it again.
    ///
    /// Only one byte of pushback is held at a time.
    pub fn push_back(&mut self, byte: u8) {
        debug_assert!(self.peeked.is_none(), "single-byte lookahead exceeded");
        self.peeked = Some(byte);
        self.offset -= 1;
    }

    /// Captures the bytes surrounding `at`: half of `len` before, half
    /// after, clamped at the stream boundaries. The stream position is
    /// restored afterwards.
    pub(crate) fn context(&mut self, at: u64, len: usize) -> io::Result<ErrorContext> {
        let start = at.saturating_sub(len as u64 / 2);
        let saved = self.inner.stream_position()?;
        // Offsets are relative to where this reader started; recover that
        // base from how far the underlying stream has advanced.
        let delivered = self.offset + u64::from(self.peeked.is_some());
        let base = saved.saturating_sub(delivered);
        self.inner.seek(SeekFrom::Start(base + start))?;
        let mut window = Vec::with_capacity(len);
        (&mut self.inner).take(len as u64).read_to_end(&mut window)?;
        self.inner.seek(SeekFrom::Start(saved))?;
        let caret = usize::try_from(at - start).unwrap_or(usize::MAX);
        Ok(ErrorContext::new(window, caret))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_and_pushback() {
        let mut reader = ByteReader::new(Cursor::new(b"ab"));
        assert_eq!(reader.next_byte().unwrap(), Some(b'a'));
        assert_eq!(reader.offset(), 1);
        reader.push_back(b'a');
        assert_eq!(reader.offset(), 0);
        assert_eq!(reader.next_byte().unwrap(), Some(b'a'));
        assert_eq!(reader.next_byte().unwrap(), Some(b'b'));
        assert_eq!(reader.next_byte().unwrap(), None);
        assert_eq!(reader.offset(), 2);
    }

    #[test]
    fn context_window_clamps_at_start() {
        let mut reader = ByteReader::new(Cursor::new(b"0123456789"));
        let ctx = reader.context(2, 8).unwrap();
        assert_eq!(ctx.window(), b"01234567");
        assert_eq!(ctx.caret(), 2);
    }

    #[test]
    fn context_window_clamps_at_end() {
        let mut reader = ByteReader::new(Cursor::new(b"0123456789"));
        let ctx = reader.context(9, 6).unwrap();
        assert_eq!(ctx.window(), b"6789");
        assert_eq!(ctx.caret(), 3);
    }

    #[test]
    fn context_restores_position() {
        let mut reader = ByteReader::new(Cursor::new(b"abcdef"));
        assert_eq!(reader.next_byte().unwrap(), Some(b'a'));
        let _ = reader.context(1, 4).unwrap();
        assert_eq!(reader.next_byte().unwrap(), Some(b'b'));
    }
}
