use alloc::string::String;

use thiserror::Error;

/// Failure reported by a sink transfer, or latched onto a stream.
///
/// Errors travel on two independent channels: every sink `write`/`flush`
/// call returns its own result, and a stream additionally carries a sticky
/// latch set by external callers (see [`Stream::set_error`]). The facade
/// never copies a per-call failure into the latch on its own.
///
/// [`Stream::set_error`]: crate::Stream::set_error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The underlying writer failed outright.
    #[error("sink error: {0}")]
    Sink(String),

    /// The underlying writer consumed fewer bytes than offered without
    /// reporting an error of its own.
    #[error("short write: {written} of {len} bytes reached the sink")]
    ShortWrite {
        /// Bytes the writer accepted before stalling.
        written: usize,
        /// Bytes that were offered in total.
        len: usize,
    },

    /// Externally supplied condition, typically latched by a higher-level
    /// encoder that detected a marshaling failure.
    #[error("{0}")]
    Msg(String),
}
