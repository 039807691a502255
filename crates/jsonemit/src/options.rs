/// Configuration options for JSON output streams.
///
/// Options are frozen into a [`Config`](crate::Config), which then acts as
/// the factory for [`Stream`](crate::Stream) instances sharing them.
///
/// # Examples
///
/// ```rust
/// use jsonemit::{Config, StreamOptions};
///
/// let config = Config::new(StreamOptions {
///     indent_step: 4,
///     ..StreamOptions::default()
/// });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StreamOptions {
    /// Number of space characters added per nesting level when
    /// pretty-printing.
    ///
    /// `0` disables pretty-printing entirely: no newlines, no spaces after
    /// colons, compact output.
    ///
    /// # Default
    ///
    /// `0`
    pub indent_step: usize,

    /// Initial capacity in bytes of an accumulating stream's buffer.
    ///
    /// The buffer grows without bound as needed; this only sizes the first
    /// allocation. Direct streams hold no buffer and ignore this.
    ///
    /// # Default
    ///
    /// `512`
    pub buffer_capacity: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            indent_step: 0,
            buffer_capacity: 512,
        }
    }
}
