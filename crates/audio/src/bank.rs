//! Stream bookkeeping.

use std::path::{Path, PathBuf};

use crate::error::{AudioError, AudioResult};
use crate::{AudioSink, StreamId};

/// Load state of a stream's sample data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamStatus {
    /// Registered, not loaded yet
    Pending,
    /// Samples are in memory
    Ready,
    /// Loading failed; commands for this stream are dropped
    Unavailable(String),
}

#[derive(Debug)]
struct Stream {
    source: PathBuf,
    status: StreamStatus,
    samples: Vec<u8>,
    playing: bool,
    starts: u32,
}

/// Every stream in the application with its load and playback state.
///
/// Start and stop commands only take effect on [`StreamStatus::Ready`]
/// streams; anything else is logged and ignored, never queued.
#[derive(Debug, Default)]
pub struct StreamBank {
    streams: Vec<Stream>,
}

impl StreamBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stream backed by the sample file at `source`.
    pub fn register(&mut self, source: impl Into<PathBuf>) -> StreamId {
        let id = StreamId(self.streams.len());
        self.streams.push(Stream {
            source: source.into(),
            status: StreamStatus::Pending,
            samples: Vec::new(),
            playing: false,
            starts: 0,
        });
        id
    }

    /// Number of registered streams.
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Sample file a stream was registered with.
    pub fn source(&self, id: StreamId) -> Option<&Path> {
        self.streams.get(id.0).map(|s| s.source.as_path())
    }

    pub fn status(&self, id: StreamId) -> Option<&StreamStatus> {
        self.streams.get(id.0).map(|s| &s.status)
    }

    /// Encoded sample data of a ready stream.
    pub fn samples(&self, id: StreamId) -> Option<&[u8]> {
        self.streams
            .get(id.0)
            .filter(|s| s.status == StreamStatus::Ready)
            .map(|s| s.samples.as_slice())
    }

    pub fn is_playing(&self, id: StreamId) -> bool {
        self.streams.get(id.0).is_some_and(|s| s.playing)
    }

    /// Streams currently playing, in id order.
    pub fn playing(&self) -> Vec<StreamId> {
        self.streams
            .iter()
            .enumerate()
            .filter(|(_, s)| s.playing)
            .map(|(i, _)| StreamId(i))
            .collect()
    }

    /// How many times a stream has been started.
    pub fn start_count(&self, id: StreamId) -> u32 {
        self.streams.get(id.0).map_or(0, |s| s.starts)
    }

    /// Provide sample data directly, marking the stream ready.
    pub fn insert_samples(&mut self, id: StreamId, samples: Vec<u8>) -> AudioResult<()> {
        let stream = self
            .streams
            .get_mut(id.0)
            .ok_or(AudioError::UnknownStream(id))?;
        if samples.is_empty() {
            let error = AudioError::Empty(stream.source.clone());
            stream.status = StreamStatus::Unavailable(error.to_string());
            return Err(error);
        }
        stream.samples = samples;
        stream.status = StreamStatus::Ready;
        Ok(())
    }

    /// Read a stream's sample file from disk.
    ///
    /// On failure the stream becomes [`StreamStatus::Unavailable`].
    pub fn load(&mut self, id: StreamId) -> AudioResult<()> {
        let stream = self
            .streams
            .get_mut(id.0)
            .ok_or(AudioError::UnknownStream(id))?;
        match std::fs::read(&stream.source) {
            Ok(bytes) => self.insert_samples(id, bytes),
            Err(source) => {
                let error = AudioError::Read {
                    path: stream.source.clone(),
                    source,
                };
                stream.status = StreamStatus::Unavailable(error.to_string());
                Err(error)
            }
        }
    }

    /// Load every pending stream, returning how many became ready.
    pub fn load_pending(&mut self) -> usize {
        let pending: Vec<StreamId> = (0..self.streams.len())
            .map(StreamId)
            .filter(|&id| self.status(id) == Some(&StreamStatus::Pending))
            .collect();

        let mut ready = 0;
        for id in pending {
            match self.load(id) {
                Ok(()) => {
                    tracing::debug!("Audio stream {:?} loaded", id);
                    ready += 1;
                }
                Err(e) => tracing::warn!("Audio stream {:?} unavailable: {}", id, e),
            }
        }
        ready
    }
}

impl AudioSink for StreamBank {
    fn start_stream(&mut self, id: StreamId) {
        let Some(stream) = self.streams.get_mut(id.0) else {
            tracing::warn!("Start for unknown audio stream {:?}", id);
            return;
        };
        if stream.status != StreamStatus::Ready {
            tracing::debug!("Start for {:?} ignored, stream is {:?}", id, stream.status);
            return;
        }
        stream.playing = true;
        stream.starts += 1;
        tracing::info!("Audio stream {:?} started", id);
    }

    fn stop_stream(&mut self, id: StreamId) {
        let Some(stream) = self.streams.get_mut(id.0) else {
            tracing::warn!("Stop for unknown audio stream {:?}", id);
            return;
        };
        if stream.playing {
            stream.playing = false;
            tracing::info!("Audio stream {:?} stopped", id);
        }
    }
}
