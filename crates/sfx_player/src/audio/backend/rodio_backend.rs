//! Rodio audio backend implementation
//!
//! Uses the Rodio library for cross-platform audio playback.
//! Rodio is pure Rust and supports WAV, OGG Vorbis, MP3, and FLAC formats.
//!
//! Every clip owns its own [`Sink`], which plays as an independent voice on
//! the shared output stream. The sink keeps the clip's bytes so it can be
//! rewound by decoding them again from the start.
//!
//! # Example
//!
//! ```no_run
//! use sfx_player::audio::{play_from_bytes, RodioBackend};
//!
//! let backend = RodioBackend::try_default().unwrap();
//! let bytes = std::fs::read("resources/sfx/laser.wav").unwrap();
//! let clip = play_from_bytes(&backend, bytes.into()).unwrap();
//!
//! if clip.is_running() {
//!     println!("Laser is playing!");
//! }
//! ```

use super::{AudioBackend, Clip, ClipHandle};
use crate::audio::{AudioError, AudioFormat};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;
use std::sync::Arc;

type BytesDecoder = Decoder<Cursor<Arc<[u8]>>>;

/// Rodio-based audio backend
pub struct RodioBackend {
    /// Audio output stream (must be kept alive)
    _output_stream: Option<OutputStream>,
    /// Output stream handle for creating sinks
    stream_handle: Option<OutputStreamHandle>,
    /// Initialization state
    initialized: bool,
}

impl RodioBackend {
    /// Create a new, uninitialized Rodio backend
    pub fn new() -> Self {
        Self {
            _output_stream: None,
            stream_handle: None,
            initialized: false,
        }
    }

    /// Create a backend on the default output device
    pub fn try_default() -> Result<Self, AudioError> {
        let mut backend = Self::new();
        backend.initialize()?;
        Ok(backend)
    }

    /// Open the default output device
    ///
    /// # Errors
    /// - `DeviceUnavailable` if no output device can be opened
    pub fn initialize(&mut self) -> Result<(), AudioError> {
        if self.initialized {
            return Ok(());
        }

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::DeviceUnavailable(format!("Failed to create audio output: {}", e)))?;

        self._output_stream = Some(stream);
        self.stream_handle = Some(stream_handle);
        self.initialized = true;

        log::info!("Rodio audio backend initialized");
        Ok(())
    }

    /// Close the output device
    ///
    /// Clips opened earlier fall silent; they can no longer be restarted.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }

        self.stream_handle = None;
        self._output_stream = None;
        self.initialized = false;

        log::info!("Rodio audio backend shutdown");
    }
}

impl AudioBackend for RodioBackend {
    fn open_clip(&self, bytes: Arc<[u8]>) -> Result<ClipHandle, AudioError> {
        let stream_handle = self.stream_handle.as_ref()
            .ok_or(AudioError::BackendNotInitialized)?;

        let source = decode(&bytes)?;

        let sink = Sink::try_new(stream_handle)
            .map_err(|e| AudioError::DeviceUnavailable(format!("Failed to create sink: {}", e)))?;

        // Queue the source paused so the clip starts only when asked to
        sink.pause();
        sink.append(source);

        Ok(ClipHandle::new(RodioClip { sink, bytes }))
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for RodioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Clip playing through its own rodio sink
struct RodioClip {
    sink: Sink,
    bytes: Arc<[u8]>,
}

impl Clip for RodioClip {
    fn start(&self) {
        self.sink.play();
    }

    fn rewind(&self) -> Result<(), AudioError> {
        let source = decode(&self.bytes)?;

        if !self.sink.empty() {
            self.sink.stop();
        }
        self.sink.pause();
        self.sink.append(source);
        Ok(())
    }

    fn is_running(&self) -> bool {
        !self.sink.is_paused() && !self.sink.empty()
    }

    fn stop(&self) {
        self.sink.stop();
    }
}

/// Decode raw bytes into a rodio source
fn decode(bytes: &Arc<[u8]>) -> Result<BytesDecoder, AudioError> {
    let format = AudioFormat::detect(bytes);
    if !format.is_known() {
        return Err(AudioError::UnsupportedFormat(
            "Unrecognized audio container".to_string(),
        ));
    }

    Decoder::new(Cursor::new(Arc::clone(bytes)))
        .map_err(|e| AudioError::UnsupportedFormat(format!("Failed to decode {} audio: {}", format, e)))
}
