use alloc::boxed::Box;
use core::fmt;

use crate::{error::WriteError, sink::ByteSink};

/// Write-through sink: no retained buffer, every call is a complete,
/// independent transfer attempt.
///
/// Small fixed-size writes stage their bytes in a stack-local array and go
/// out as a single transfer, so each token write costs one call into the
/// underlying writer. That is the tradeoff this variant exists for: flat
/// memory and immediate visibility, sensible when the destination already
/// buffers.
///
/// With no writer bound every write silently discards its bytes and
/// reports zero written. This is deliberate data loss — a no-op mode, not
/// an error, and not the capture mode of the accumulating variant.
pub(crate) struct DirectOutput {
    out: Option<Box<dyn ByteSink>>,
}

impl DirectOutput {
    pub(crate) fn new(out: Option<Box<dyn ByteSink>>) -> Self {
        Self { out }
    }

    pub(crate) fn reset(&mut self, out: Option<Box<dyn ByteSink>>) {
        self.out = out;
    }

    pub(crate) fn write(&mut self, p: &[u8]) -> Result<usize, WriteError> {
        match self.out.as_mut() {
            Some(out) => out.write(p),
            None => Ok(0),
        }
    }

    /// Forwards to the writer's flush capability; unbound is a no-op
    /// success.
    pub(crate) fn flush(&mut self) -> Result<(), WriteError> {
        match self.out.as_mut() {
            Some(out) => out.flush(),
            None => Ok(()),
        }
    }

    pub(crate) fn write_raw(&mut self, s: &str) {
        let _ = self.write(s.as_bytes());
    }

    pub(crate) fn write_byte(&mut self, c: u8) {
        let _ = self.write(&[c]);
    }

    pub(crate) fn write_two_bytes(&mut self, c1: u8, c2: u8) {
        let _ = self.write(&[c1, c2]);
    }

    pub(crate) fn write_three_bytes(&mut self, c1: u8, c2: u8, c3: u8) {
        let _ = self.write(&[c1, c2, c3]);
    }

    pub(crate) fn write_four_bytes(&mut self, c1: u8, c2: u8, c3: u8, c4: u8) {
        let _ = self.write(&[c1, c2, c3, c4]);
    }

    pub(crate) fn write_five_bytes(&mut self, c1: u8, c2: u8, c3: u8, c4: u8, c5: u8) {
        let _ = self.write(&[c1, c2, c3, c4, c5]);
    }
}

impl fmt::Debug for DirectOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectOutput")
            .field("bound", &self.out.is_some())
            .finish()
    }
}
