//! # SFX Player
//!
//! Plays short sound effects in response to game events.
//!
//! ## Features
//!
//! - **Clip Pools**: a fixed number of reusable clips per effect, so the same
//!   sound can overlap itself without unbounded resource growth
//! - **Sound Cache**: raw audio bytes are read from the resource store once
//!   and shared for every later clip
//! - **Pluggable Backends**: rodio by default, any [`audio::AudioBackend`] otherwise
//! - **Resource Stores**: filesystem search paths or bundled in-memory assets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sfx_player::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = RodioBackend::try_default()?;
//!     let config = SoundConfig::default();
//!     let store = FileResourceStore::new(config.search_paths.clone());
//!     let player = SoundPlayer::new(backend, store, &config);
//!
//!     if let Some(clip) = player.play(SoundEffect::Lazer) {
//!         log::debug!("laser running: {}", clip.is_running());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod audio;
pub mod config;
pub mod foundation;

#[cfg(test)]
pub(crate) mod test_support;

/// Common imports for player users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, FileResourceStore, MemoryResourceStore, ResourceStore},
        audio::{
            AudioBackend, AudioError, Clip, ClipHandle, RodioBackend, SoundCache, SoundEffect,
            SoundPlayer,
        },
        config::{Config, ConfigError, SoundConfig},
    };
}
