//! Stream facade: token-level JSON grammar emission over an output sink.
//!
//! The facade keeps no state machine beyond the indentation depth counter;
//! callers are responsible for well-formed nesting (every start matched by
//! an end). Depth grows by the configured step on each object/array open
//! and shrinks by the same step on the matching close, so closing tokens
//! land one level shallower than their contents.

mod int;

use alloc::{boxed::Box, vec::Vec};
use core::{any::Any, fmt};

use crate::{
    error::WriteError,
    factory::Config,
    sink::{BufferedOutput, ByteSink, DirectOutput, Output},
};

/// JSON token writer.
///
/// A `Stream` is owned by one encoding operation at a time; reuse happens
/// only through [`reset`](Self::reset), typically driven by a
/// [`StreamPool`](crate::StreamPool). Per-call I/O failures come back on
/// the calls that transfer bytes ([`write`](Self::write),
/// [`flush`](Self::flush)); the sticky latch is a separate channel set
/// only by external callers via [`set_error`](Self::set_error).
pub struct Stream {
    config: Config,
    out: Output,
    error: Option<WriteError>,
    indention: usize,
    /// Open slot for a customized encoder driving this stream.
    pub attachment: Option<Box<dyn Any>>,
}

impl Stream {
    /// Creates a stream over an accumulating sink.
    ///
    /// `out` may be `None` to capture output into the internal buffer.
    #[must_use]
    pub fn new_buffered(config: Config, out: Option<Box<dyn ByteSink>>, capacity: usize) -> Self {
        Self {
            config,
            out: Output::Buffered(BufferedOutput::new(out, capacity)),
            error: None,
            indention: 0,
            attachment: None,
        }
    }

    /// Creates a stream that writes through without internal buffering.
    #[must_use]
    pub fn direct(config: Config, out: Option<Box<dyn ByteSink>>) -> Self {
        Self {
            config,
            out: Output::Direct(DirectOutput::new(out)),
            error: None,
            indention: 0,
            attachment: None,
        }
    }

    /// Configuration this stream was created from.
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Rebinds the stream to a new writer for reuse.
    ///
    /// The held buffer is emptied (capacity retained), the error latch and
    /// indentation depth are cleared. The attachment stays; it belongs to
    /// whoever drives the stream.
    pub fn reset(&mut self, out: Option<Box<dyn ByteSink>>) {
        self.out.reset(out);
        self.error = None;
        self.indention = 0;
    }

    /// Sticky error latched onto this stream, if any.
    #[must_use]
    pub fn error(&self) -> Option<&WriteError> {
        self.error.as_ref()
    }

    /// Latches `err`. [`flush`](Self::flush) short-circuits while a latched
    /// error is present; per-call write results are never latched
    /// automatically.
    pub fn set_error(&mut self, err: WriteError) {
        self.error = Some(err);
    }

    /// Clears and returns the latched error.
    pub fn take_error(&mut self) -> Option<WriteError> {
        self.error.take()
    }

    /// Remaining free capacity in the internal buffer; always 0 for a
    /// direct stream.
    #[must_use]
    pub fn available(&self) -> usize {
        self.out.available()
    }

    /// Number of bytes currently held unflushed; always 0 for a direct
    /// stream.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.out.buffered()
    }

    /// Raw held bytes — the way to take the result out of a capture-mode
    /// stream. A direct stream holds nothing and returns the empty slice.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        self.out.buffer()
    }

    /// Replaces the held buffer wholesale, to resume writing into a
    /// caller-supplied region. No-op for a direct stream.
    pub fn set_buffer(&mut self, buf: Vec<u8>) {
        self.out.set_buffer(buf);
    }

    /// Bulk write.
    ///
    /// On an accumulating stream this appends `p` and, if a writer is
    /// bound, immediately offers the whole buffer, reporting the count the
    /// writer consumed. On a direct stream the slice is forwarded verbatim
    /// (unbound: `Ok(0)`, bytes dropped).
    pub fn write(&mut self, p: &[u8]) -> Result<usize, WriteError> {
        self.out.write(p)
    }

    /// Writes a pre-escaped string's bytes verbatim, exactly like
    /// [`write`](Self::write) but without a result; transfer failures on a
    /// direct stream are dropped like those of any small token write.
    pub fn write_raw(&mut self, s: &str) {
        self.out.write_raw(s);
    }

    /// Flushes buffered bytes to the underlying writer.
    ///
    /// A latched error short-circuits: it is returned without touching the
    /// sink at all.
    pub fn flush(&mut self) -> Result<(), WriteError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.out.flush()
    }

    /// Writes `null`.
    pub fn write_null(&mut self) {
        self.out.write_four_bytes(b'n', b'u', b'l', b'l');
    }

    /// Writes `true`.
    pub fn write_true(&mut self) {
        self.out.write_four_bytes(b't', b'r', b'u', b'e');
    }

    /// Writes `false`.
    pub fn write_false(&mut self) {
        self.out.write_five_bytes(b'f', b'a', b'l', b's', b'e');
    }

    /// Writes `true` or `false`.
    pub fn write_bool(&mut self, val: bool) {
        if val {
            self.write_true();
        } else {
            self.write_false();
        }
    }

    /// Writes `{`, deepening the indentation by one step.
    pub fn write_object_start(&mut self) {
        self.indention += self.config.indent_step();
        self.out.write_byte(b'{');
        self.write_indention(0);
    }

    /// Writes a field name and its colon: `"name": ` when pretty-printing,
    /// `"name":` when compact.
    ///
    /// `name` must already be escaped for a JSON string literal; escaping
    /// is the caller's concern.
    pub fn write_object_field(&mut self, name: &str) {
        self.out.write_byte(b'"');
        self.out.write_raw(name);
        self.out.write_byte(b'"');
        if self.indention > 0 {
            self.out.write_two_bytes(b':', b' ');
        } else {
            self.out.write_byte(b':');
        }
    }

    /// Writes `}`, shallowing the indentation by one step.
    pub fn write_object_end(&mut self) {
        let step = self.config.indent_step();
        self.write_indention(step);
        self.indention = self.indention.saturating_sub(step);
        self.out.write_byte(b'}');
    }

    /// Writes `{}` directly; an empty container is never indented
    /// internally.
    pub fn write_empty_object(&mut self) {
        self.out.write_two_bytes(b'{', b'}');
    }

    /// Writes the `,` between elements, followed by the current-depth
    /// indentation.
    pub fn write_more(&mut self) {
        self.out.write_byte(b',');
        self.write_indention(0);
    }

    /// Writes `[`, deepening the indentation by one step.
    pub fn write_array_start(&mut self) {
        self.indention += self.config.indent_step();
        self.out.write_byte(b'[');
        self.write_indention(0);
    }

    /// Writes `]`, shallowing the indentation by one step.
    pub fn write_array_end(&mut self) {
        let step = self.config.indent_step();
        self.write_indention(step);
        self.indention = self.indention.saturating_sub(step);
        self.out.write_byte(b']');
    }

    /// Writes `[]` directly, bypassing the indentation logic.
    pub fn write_empty_array(&mut self) {
        self.out.write_two_bytes(b'[', b']');
    }

    /// Newline plus `indention - delta` spaces; nothing in compact mode.
    fn write_indention(&mut self, delta: usize) {
        if self.indention == 0 {
            return;
        }
        self.out.write_byte(b'\n');
        for _ in 0..self.indention.saturating_sub(delta) {
            self.out.write_byte(b' ');
        }
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("out", &self.out)
            .field("error", &self.error)
            .field("indention", &self.indention)
            .field("attachment", &self.attachment.is_some())
            .finish()
    }
}
