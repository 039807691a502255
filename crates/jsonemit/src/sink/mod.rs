//! Output sinks: where finished JSON bytes go.
//!
//! One capability set, two strategies. The accumulating variant batches
//! bytes in a growable buffer and amortizes I/O across many small token
//! writes; the direct variant keeps no buffer and turns every write into
//! an immediate transfer, trading per-call overhead for a flat memory
//! footprint. The facade dispatches over the closed [`Output`] set so the
//! contracts stay identical even where behavior deliberately diverges
//! (most notably what happens when no writer is bound).

mod buffered;
mod direct;

use alloc::{boxed::Box, vec::Vec};

pub(crate) use buffered::BufferedOutput;
pub(crate) use direct::DirectOutput;

use crate::error::WriteError;

/// Destination contract for finished bytes: the underlying writer a sink
/// forwards to.
///
/// `write` reports how many bytes the destination consumed; consuming
/// fewer than offered is legal and the caller retries or retains the
/// tail. `flush` exists for destinations that buffer internally and
/// defaults to a no-op success, so plain writers satisfy the contract
/// without ceremony.
pub trait ByteSink {
    /// Writes `buf`, returning the number of bytes consumed.
    fn write(&mut self, buf: &[u8]) -> Result<usize, WriteError>;

    /// Pushes any internally held bytes onward.
    fn flush(&mut self) -> Result<(), WriteError> {
        Ok(())
    }
}

impl ByteSink for Vec<u8> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, WriteError> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Adapter exposing any [`std::io::Write`] as a [`ByteSink`].
///
/// Flush forwards to the inner writer; errors are carried over as
/// [`WriteError::Sink`] with the source's message.
#[cfg(feature = "std")]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, WriteError> {
        use alloc::string::ToString;
        self.0
            .write(buf)
            .map_err(|err| WriteError::Sink(err.to_string()))
    }

    fn flush(&mut self) -> Result<(), WriteError> {
        use alloc::string::ToString;
        self.0
            .flush()
            .map_err(|err| WriteError::Sink(err.to_string()))
    }
}

/// The two output strategies behind one capability set.
#[derive(Debug)]
pub(crate) enum Output {
    /// Growable buffer, drained on bulk writes and explicit flushes.
    Buffered(BufferedOutput),
    /// No retained bytes; every write is an independent transfer.
    Direct(DirectOutput),
}

impl Output {
    /// Rebinds the sink to a new destination for reuse.
    pub(crate) fn reset(&mut self, out: Option<Box<dyn ByteSink>>) {
        match self {
            Self::Buffered(sink) => sink.reset(out),
            Self::Direct(sink) => sink.reset(out),
        }
    }

    /// Remaining free capacity in the internal buffer; 0 for direct.
    pub(crate) fn available(&self) -> usize {
        match self {
            Self::Buffered(sink) => sink.available(),
            Self::Direct(_) => 0,
        }
    }

    /// Bytes currently held unflushed; 0 for direct.
    pub(crate) fn buffered(&self) -> usize {
        match self {
            Self::Buffered(sink) => sink.buffered(),
            Self::Direct(_) => 0,
        }
    }

    /// Raw held bytes. The direct variant never holds any; it returns the
    /// empty slice.
    pub(crate) fn buffer(&self) -> &[u8] {
        match self {
            Self::Buffered(sink) => sink.buffer(),
            Self::Direct(_) => &[],
        }
    }

    /// Replaces the held buffer wholesale; no-op for direct.
    pub(crate) fn set_buffer(&mut self, buf: Vec<u8>) {
        match self {
            Self::Buffered(sink) => sink.set_buffer(buf),
            Self::Direct(_) => {}
        }
    }

    pub(crate) fn write(&mut self, p: &[u8]) -> Result<usize, WriteError> {
        match self {
            Self::Buffered(sink) => sink.write(p),
            Self::Direct(sink) => sink.write(p),
        }
    }

    pub(crate) fn flush(&mut self) -> Result<(), WriteError> {
        match self {
            Self::Buffered(sink) => sink.flush(),
            Self::Direct(sink) => sink.flush(),
        }
    }

    /// Writes the bytes of a pre-escaped string verbatim.
    pub(crate) fn write_raw(&mut self, s: &str) {
        match self {
            Self::Buffered(sink) => sink.write_raw(s),
            Self::Direct(sink) => sink.write_raw(s),
        }
    }

    pub(crate) fn write_byte(&mut self, c: u8) {
        match self {
            Self::Buffered(sink) => sink.write_byte(c),
            Self::Direct(sink) => sink.write_byte(c),
        }
    }

    pub(crate) fn write_two_bytes(&mut self, c1: u8, c2: u8) {
        match self {
            Self::Buffered(sink) => sink.write_two_bytes(c1, c2),
            Self::Direct(sink) => sink.write_two_bytes(c1, c2),
        }
    }

    pub(crate) fn write_three_bytes(&mut self, c1: u8, c2: u8, c3: u8) {
        match self {
            Self::Buffered(sink) => sink.write_three_bytes(c1, c2, c3),
            Self::Direct(sink) => sink.write_three_bytes(c1, c2, c3),
        }
    }

    pub(crate) fn write_four_bytes(&mut self, c1: u8, c2: u8, c3: u8, c4: u8) {
        match self {
            Self::Buffered(sink) => sink.write_four_bytes(c1, c2, c3, c4),
            Self::Direct(sink) => sink.write_four_bytes(c1, c2, c3, c4),
        }
    }

    pub(crate) fn write_five_bytes(&mut self, c1: u8, c2: u8, c3: u8, c4: u8, c5: u8) {
        match self {
            Self::Buffered(sink) => sink.write_five_bytes(c1, c2, c3, c4, c5),
            Self::Direct(sink) => sink.write_five_bytes(c1, c2, c3, c4, c5),
        }
    }
}
