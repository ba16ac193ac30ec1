//! Sound player
//!
//! Owns the backend, the sound cache and one clip pool per sound effect.
//! This is the context object game code keeps for the life of the process.

use crate::assets::ResourceStore;
use crate::audio::backend::rodio_backend::RodioBackend;
use crate::audio::backend::{AudioBackend, ClipHandle};
use crate::audio::{ClipPool, SoundCache, SoundEffect};
use crate::config::SoundConfig;

/// Plays sound effects through per-effect clip pools
///
/// Field order matters: pools (and their clips) drop before the backend
/// that owns the output stream.
pub struct SoundPlayer<B: AudioBackend = RodioBackend> {
    pools: [ClipPool; SoundEffect::COUNT],
    cache: SoundCache,
    backend: B,
}

impl<B: AudioBackend> SoundPlayer<B> {
    /// Create a player with one pool per effect
    ///
    /// Preloads every effect into the cache when `config.preload` is set.
    pub fn new(backend: B, store: impl ResourceStore + 'static, config: &SoundConfig) -> Self {
        let clips_per_effect = config.effective_clips_per_effect();
        let pools = std::array::from_fn(|i| ClipPool::new(SoundEffect::ALL[i], clips_per_effect));

        let player = Self {
            pools,
            cache: SoundCache::new(store),
            backend,
        };

        log::info!(
            "Sound player ready: {} effects, {} clips each",
            SoundEffect::COUNT,
            clips_per_effect
        );

        if config.preload {
            player.preload();
        }
        player
    }

    /// Play `effect`
    ///
    /// Returns a handle to the started clip, or `None` when the effect's
    /// pool is saturated or the clip could not be started (logged).
    pub fn play(&self, effect: SoundEffect) -> Option<ClipHandle> {
        self.pool(effect).play(&self.cache, &self.backend)
    }

    /// Load every effect's bytes into the cache
    ///
    /// Failures are logged and skipped. Returns the number of effects
    /// whose bytes are cached afterwards.
    pub fn preload(&self) -> usize {
        let mut loaded = 0;
        for effect in SoundEffect::ALL {
            match self.cache.load(effect.resource_path()) {
                Ok(_) => loaded += 1,
                Err(e) => log::warn!("{}: preload failed: {}", effect, e),
            }
        }

        log::info!("Preloaded {}/{} sound effects", loaded, SoundEffect::COUNT);
        loaded
    }

    /// Pool serving `effect`
    pub fn pool(&self, effect: SoundEffect) -> &ClipPool {
        &self.pools[effect.index()]
    }

    /// Shared sound cache
    pub const fn cache(&self) -> &SoundCache {
        &self.cache
    }

    /// Audio backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Release idle clips in every pool; returns how many were released
    pub fn release_idle(&self) -> usize {
        self.pools.iter().map(ClipPool::release_idle).sum()
    }

    /// Whether any clip of any effect is still playing
    pub fn is_any_running(&self) -> bool {
        self.pools.iter().any(|pool| pool.running() > 0)
    }

    /// Stop every clip of every effect
    pub fn shutdown(&self) {
        for pool in &self.pools {
            pool.stop_all();
        }
        log::info!("Sound player shutdown");
    }
}

impl<B: AudioBackend> Drop for SoundPlayer<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<B: AudioBackend> std::fmt::Debug for SoundPlayer<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundPlayer")
            .field("cache", &self.cache)
            .field("pools", &self.pools)
            .finish_non_exhaustive()
    }
}
