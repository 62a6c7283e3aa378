//! Audio side of the lighters scene.
//!
//! Sound playback sits behind the [`AudioSink`] trait. [`StreamBank`] is the
//! in-process implementation: it tracks which sample files are loaded and
//! which streams are playing, and leaves decoding and mixing to the output
//! backend.

mod bank;
mod error;

pub use bank::{StreamBank, StreamStatus};
pub use error::{AudioError, AudioResult};

/// Identifier of one audio stream. Streams map 1:1 to lighters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(pub usize);

/// Receiver of start/stop commands.
///
/// Commands are fire-and-forget: a sink that cannot honor one (for example
/// because the sample is still loading) drops it.
pub trait AudioSink {
    /// Start a stream from the beginning.
    fn start_stream(&mut self, id: StreamId);

    /// Stop a stream. Stopping a silent stream does nothing.
    fn stop_stream(&mut self, id: StreamId);
}
