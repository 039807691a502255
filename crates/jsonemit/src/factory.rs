use alloc::{boxed::Box, vec::Vec};

use crate::{options::StreamOptions, sink::ByteSink, stream::Stream};

/// Frozen stream configuration; the factory for [`Stream`] instances.
///
/// A `Config` is cheap to copy and every stream created from it carries a
/// copy, so a stream can always get back to its configuration (and from
/// there to a pool) without extra plumbing.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    options: StreamOptions,
}

impl Config {
    /// Freezes `options` into a configuration.
    #[must_use]
    pub fn new(options: StreamOptions) -> Self {
        Self { options }
    }

    pub(crate) fn indent_step(&self) -> usize {
        self.options.indent_step
    }

    /// Creates a stream over an accumulating sink.
    ///
    /// Pass `None` for `out` to capture output in the stream's internal
    /// buffer instead of performing I/O; read it back with
    /// [`Stream::buffer`].
    #[must_use]
    pub fn stream(&self, out: Option<Box<dyn ByteSink>>) -> Stream {
        Stream::new_buffered(*self, out, self.options.buffer_capacity)
    }

    /// Creates a stream that writes through without internal buffering.
    ///
    /// Every write becomes a separate transfer to `out`. With `None` all
    /// writes silently discard their bytes — a deliberate no-op mode, not
    /// an error (and not the capture mode of [`Config::stream`]).
    #[must_use]
    pub fn direct_stream(&self, out: Option<Box<dyn ByteSink>>) -> Stream {
        Stream::direct(*self, out)
    }

    /// Creates an empty pool of reusable streams sharing this
    /// configuration.
    #[must_use]
    pub fn pool(&self) -> StreamPool {
        StreamPool {
            config: *self,
            free: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(StreamOptions::default())
    }
}

/// Single-threaded LIFO pool of accumulating streams.
///
/// Streams keep their buffer allocation across reuse, so borrowing from a
/// warm pool avoids reallocating for every encoding operation. The pool
/// performs no synchronization; it is owned by whoever drives encoding.
pub struct StreamPool {
    config: Config,
    free: Vec<Stream>,
}

impl StreamPool {
    /// Takes a clean stream bound to `out`, reusing a released one when
    /// available.
    pub fn borrow_stream(&mut self, out: Option<Box<dyn ByteSink>>) -> Stream {
        match self.free.pop() {
            Some(mut stream) => {
                stream.reset(out);
                stream
            }
            None => self.config.stream(out),
        }
    }

    /// Releases `stream` back for reuse.
    ///
    /// The stream is unbound from its writer and scrubbed: buffer, error
    /// latch, indentation depth, and attachment are all cleared.
    pub fn return_stream(&mut self, mut stream: Stream) {
        stream.reset(None);
        stream.attachment = None;
        self.free.push(stream);
    }

    /// Number of released streams currently held.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.free.len()
    }
}
