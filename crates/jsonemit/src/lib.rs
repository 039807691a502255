//! Low-level output engine for streaming JSON serialization: token-level
//! write calls in, exact JSON bytes out, optionally pretty-printed.
//!
//! The crate has three layers. [`Stream`] is the facade that knows the JSON
//! token grammar (literals, delimiters, numbers) and the indentation rules.
//! Below it sits a pluggable output sink with two strategies: an
//! *accumulating* sink that batches bytes in a growable buffer, and a
//! *direct* sink that pushes every write straight through to the underlying
//! writer. Integer formatting is table-driven: one lookup per 3-digit group
//! instead of one division per digit.
//!
//! ```
//! use jsonemit::{Config, StreamOptions};
//!
//! let config = Config::new(StreamOptions {
//!     indent_step: 2,
//!     ..StreamOptions::default()
//! });
//! let mut stream = config.stream(None);
//! stream.write_object_start();
//! stream.write_object_field("a");
//! stream.write_i32(1);
//! stream.write_object_end();
//! assert_eq!(stream.buffer(), b"{\n  \"a\": 1\n}");
//! ```
//!
//! With no underlying writer bound, an accumulating stream captures all
//! output in its buffer (as above). Bind a writer — anything implementing
//! [`ByteSink`] — to deliver bytes on [`Stream::flush`] instead.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod digits;
mod error;
mod factory;
mod options;
mod sink;
mod stream;

#[cfg(test)]
mod tests;

pub use error::WriteError;
pub use factory::{Config, StreamPool};
pub use options::StreamOptions;
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::ByteSink;
pub use stream::Stream;
