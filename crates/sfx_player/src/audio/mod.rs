//! Sound effect playback
//!
//! The pipeline is: [`SoundPlayer::play`] picks the effect's [`ClipPool`],
//! the pool finds an empty or idle slot, an empty slot pulls the effect's
//! bytes through the [`SoundCache`] and asks the [`AudioBackend`] for a new
//! clip, an idle slot rewinds and restarts the clip it already holds.

pub mod backend;
pub mod clip_pool;
pub mod effects;
pub mod format;
pub mod player;
pub mod sound_cache;

#[cfg(test)]
mod tests;

pub use backend::rodio_backend::RodioBackend;
pub use backend::{play_from_bytes, AudioBackend, Clip, ClipHandle};
pub use clip_pool::ClipPool;
pub use effects::{ParseSoundEffectError, SoundEffect};
pub use format::AudioFormat;
pub use player::SoundPlayer;
pub use sound_cache::SoundCache;

use crate::assets::AssetError;
use thiserror::Error;

/// Audio errors
///
/// None of these are fatal: the public `play` entry points log them and
/// hand back `None`.
#[derive(Error, Debug)]
pub enum AudioError {
    /// The resource store has nothing at this path
    #[error("Sound resource not found: {0}")]
    ResourceNotFound(String),

    /// The resource exists but could not be read
    #[error("Failed to read sound resource {path}: {source}")]
    Io {
        /// Resource path being read
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not in a format the decoder understands
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// No playback device could be acquired
    #[error("Audio device unavailable: {0}")]
    DeviceUnavailable(String),

    /// Backend used before its output stream was opened
    #[error("Audio backend not initialized")]
    BackendNotInitialized,
}

impl AudioError {
    /// Convert a resource store error for `path`
    pub fn from_asset(path: &str, error: AssetError) -> Self {
        match error {
            AssetError::NotFound(_) => Self::ResourceNotFound(path.to_string()),
            AssetError::IoError(source) => Self::Io {
                path: path.to_string(),
                source,
            },
        }
    }
}
