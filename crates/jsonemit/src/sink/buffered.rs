use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use bstr::BStr;

use crate::{error::WriteError, sink::ByteSink};

/// Accumulating sink: bytes land in a growable buffer and reach the
/// underlying writer only on a bulk [`write`](Self::write) or an explicit
/// flush.
///
/// With no writer bound the buffer is the sole destination ("capture
/// mode") and is never drained implicitly; the caller takes the result
/// through [`buffer`](Self::buffer).
pub(crate) struct BufferedOutput {
    out: Option<Box<dyn ByteSink>>,
    buf: Vec<u8>,
}

impl BufferedOutput {
    pub(crate) fn new(out: Option<Box<dyn ByteSink>>, capacity: usize) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Rebinds the writer and empties the buffer, keeping its capacity.
    pub(crate) fn reset(&mut self, out: Option<Box<dyn ByteSink>>) {
        self.out = out;
        self.buf.clear();
    }

    pub(crate) fn available(&self) -> usize {
        self.buf.capacity() - self.buf.len()
    }

    pub(crate) fn buffered(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn buffer(&self) -> &[u8] {
        &self.buf
    }

    pub(crate) fn set_buffer(&mut self, buf: Vec<u8>) {
        self.buf = buf;
    }

    /// Appends `p`, then offers the whole buffer to a bound writer.
    ///
    /// Returns the count the writer consumed — not the count appended; any
    /// unwritten suffix stays buffered for a later attempt. In capture
    /// mode every byte is retained and reported as written.
    pub(crate) fn write(&mut self, p: &[u8]) -> Result<usize, WriteError> {
        self.buf.extend_from_slice(p);
        let Some(out) = self.out.as_mut() else {
            return Ok(p.len());
        };
        let n = out.write(&self.buf)?;
        self.buf.drain(..n);
        Ok(n)
    }

    /// Drains the entire buffer into the bound writer, if any.
    ///
    /// Unbound, this is a no-op success. A writer that stalls at zero
    /// consumed bytes yields [`WriteError::ShortWrite`] rather than
    /// looping forever.
    pub(crate) fn flush(&mut self) -> Result<(), WriteError> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        let mut written = 0;
        while written < self.buf.len() {
            match out.write(&self.buf[written..]) {
                Ok(0) => {
                    let err = WriteError::ShortWrite {
                        written,
                        len: self.buf.len(),
                    };
                    self.buf.drain(..written);
                    return Err(err);
                }
                Ok(n) => written += n,
                Err(err) => {
                    self.buf.drain(..written);
                    return Err(err);
                }
            }
        }
        self.buf.clear();
        Ok(())
    }

    pub(crate) fn write_raw(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    pub(crate) fn write_byte(&mut self, c: u8) {
        self.buf.push(c);
    }

    pub(crate) fn write_two_bytes(&mut self, c1: u8, c2: u8) {
        self.buf.extend_from_slice(&[c1, c2]);
    }

    pub(crate) fn write_three_bytes(&mut self, c1: u8, c2: u8, c3: u8) {
        self.buf.extend_from_slice(&[c1, c2, c3]);
    }

    pub(crate) fn write_four_bytes(&mut self, c1: u8, c2: u8, c3: u8, c4: u8) {
        self.buf.extend_from_slice(&[c1, c2, c3, c4]);
    }

    pub(crate) fn write_five_bytes(&mut self, c1: u8, c2: u8, c3: u8, c4: u8, c5: u8) {
        self.buf.extend_from_slice(&[c1, c2, c3, c4, c5]);
    }
}

impl fmt::Debug for BufferedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedOutput")
            .field("bound", &self.out.is_some())
            .field("buf", &BStr::new(&self.buf))
            .finish()
    }
}
