mod property_int;

use alloc::string::String;

use crate::{Config, Stream, StreamOptions};

pub(crate) fn compact_stream() -> Stream {
    Config::new(StreamOptions::default()).stream(None)
}

pub(crate) fn pretty_stream(indent_step: usize) -> Stream {
    Config::new(StreamOptions {
        indent_step,
        ..StreamOptions::default()
    })
    .stream(None)
}

/// Runs `f` against a capture-mode stream and returns the emitted bytes as
/// a string.
pub(crate) fn captured(f: impl FnOnce(&mut Stream)) -> String {
    let mut stream = compact_stream();
    f(&mut stream);
    String::from_utf8(stream.buffer().to_vec()).unwrap()
}
