//! Audio backend implementations
//!
//! Platform-independent abstraction over audio playback libraries.

pub mod rodio_backend;

use crate::audio::AudioError;
use std::fmt;
use std::sync::Arc;

/// Audio backend trait for platform abstraction
///
/// # Threading
/// Not required to be `Send + Sync`: the rodio backend owns an output
/// stream that must stay on the thread that opened it. A player built on a
/// thread-safe backend is itself thread-safe.
pub trait AudioBackend {
    /// Decode `bytes` and open a playback device with the decoded stream
    ///
    /// The returned clip is positioned at the start and not yet running.
    fn open_clip(&self, bytes: Arc<[u8]>) -> Result<ClipHandle, AudioError>;

    /// Check if backend is initialized
    fn is_initialized(&self) -> bool {
        true
    }
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn open_clip(&self, bytes: Arc<[u8]>) -> Result<ClipHandle, AudioError> {
        (**self).open_clip(bytes)
    }

    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }
}

/// One loaded, playable instance of an audio resource
pub trait Clip: Send + Sync {
    /// Start (or resume) playback from the current position
    fn start(&self);

    /// Move the playback position back to the beginning
    ///
    /// Leaves the clip stopped; call [`start`](Self::start) afterwards.
    fn rewind(&self) -> Result<(), AudioError>;

    /// Whether the clip is currently producing sound
    fn is_running(&self) -> bool;

    /// Stop playback
    fn stop(&self);
}

/// Shared handle to a clip
///
/// Clip pools keep their own handle to every clip they create; the handle
/// given to callers is a second reference to the same clip.
#[derive(Clone)]
pub struct ClipHandle(Arc<dyn Clip>);

impl ClipHandle {
    /// Wrap a clip in a new handle
    pub fn new(clip: impl Clip + 'static) -> Self {
        Self(Arc::new(clip))
    }

    /// Wrap an already shared clip
    pub fn from_arc(clip: Arc<dyn Clip>) -> Self {
        Self(clip)
    }

    /// Whether the clip is currently producing sound
    pub fn is_running(&self) -> bool {
        self.0.is_running()
    }

    /// Stop playback
    pub fn stop(&self) {
        self.0.stop();
    }

    /// Whether both handles refer to the same clip instance
    pub fn same_clip(&self, other: &Self) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0).cast::<()>(),
            Arc::as_ptr(&other.0).cast::<()>(),
        )
    }

    pub(crate) fn start(&self) {
        self.0.start();
    }

    pub(crate) fn rewind(&self) -> Result<(), AudioError> {
        self.0.rewind()
    }
}

impl fmt::Debug for ClipHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipHandle")
            .field("clip", &Arc::as_ptr(&self.0).cast::<()>())
            .field("running", &self.is_running())
            .finish()
    }
}

/// Decode `bytes`, open a device with them and start playback immediately
///
/// Returns as soon as playback has started.
pub fn play_from_bytes<B: AudioBackend + ?Sized>(
    backend: &B,
    bytes: Arc<[u8]>,
) -> Result<ClipHandle, AudioError> {
    let clip = backend.open_clip(bytes)?;
    clip.start();
    Ok(clip)
}
