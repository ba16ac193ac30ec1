//! Clip pool for a single sound effect
//!
//! A pool owns a fixed number of slots. Each slot is empty until its first
//! use, then holds one clip for the rest of the pool's life (unless
//! [`ClipPool::release_idle`] gives it back). Slots are scanned in order and
//! the first empty or idle one wins; when every slot is running the request
//! is dropped, which is what bounds concurrent plays of one effect.

use crate::audio::backend::{play_from_bytes, AudioBackend, ClipHandle};
use crate::audio::{AudioError, SoundCache, SoundEffect};
use parking_lot::Mutex;

/// Fixed-size pool of reusable clips for one sound effect
pub struct ClipPool {
    effect: SoundEffect,
    slots: Mutex<Box<[Option<ClipHandle>]>>,
}

impl ClipPool {
    /// Create a pool with `capacity` empty slots (at least one)
    pub fn new(effect: SoundEffect, capacity: usize) -> Self {
        let slots = vec![None; capacity.max(1)].into_boxed_slice();
        Self {
            effect,
            slots: Mutex::new(slots),
        }
    }

    /// Effect this pool plays
    pub const fn effect(&self) -> SoundEffect {
        self.effect
    }

    /// Play the effect in the first empty or idle slot
    ///
    /// Returns `None` when every slot is busy or when the clip could not be
    /// loaded, decoded or started; failures are logged.
    pub fn play<B: AudioBackend + ?Sized>(&self, cache: &SoundCache, backend: &B) -> Option<ClipHandle> {
        match self.try_play(cache, backend) {
            Ok(Some(clip)) => Some(clip),
            Ok(None) => {
                log::debug!("{}: all {} clips busy, dropping request", self.effect, self.capacity());
                None
            }
            Err(e) => {
                log::error!("{}: failed to play sound: {}", self.effect, e);
                None
            }
        }
    }

    /// Like [`play`](Self::play), but reports why nothing started
    ///
    /// `Ok(None)` means the pool is saturated.
    pub fn try_play<B: AudioBackend + ?Sized>(
        &self,
        cache: &SoundCache,
        backend: &B,
    ) -> Result<Option<ClipHandle>, AudioError> {
        let mut slots = self.slots.lock();

        for (index, slot) in slots.iter_mut().enumerate() {
            if let Some(clip) = slot.as_ref() {
                if clip.is_running() {
                    continue;
                }

                clip.rewind()?;
                clip.start();
                log::debug!("{}: restarted clip in slot {}", self.effect, index);
                return Ok(Some(clip.clone()));
            }

            // The slot stays empty if anything below fails
            let bytes = cache.load(self.effect.resource_path())?;
            let clip = play_from_bytes(backend, bytes)?;
            *slot = Some(clip.clone());
            log::debug!("{}: new clip in slot {}", self.effect, index);
            return Ok(Some(clip));
        }

        Ok(None)
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.lock().len()
    }

    /// Number of slots holding a clip
    pub fn occupied(&self) -> usize {
        self.slots.lock().iter().flatten().count()
    }

    /// Number of clips currently playing
    pub fn running(&self) -> usize {
        self.slots
            .lock()
            .iter()
            .flatten()
            .filter(|clip| clip.is_running())
            .count()
    }

    /// Clip held by slot `index`, if any
    pub fn slot(&self, index: usize) -> Option<ClipHandle> {
        self.slots.lock().get(index).cloned().flatten()
    }

    /// Drop every idle clip, returning its slot to empty
    ///
    /// The pool's reference is released here; the device itself is freed
    /// once callers drop their handles too. Returns the number released.
    pub fn release_idle(&self) -> usize {
        let mut released = 0;
        for slot in self.slots.lock().iter_mut() {
            if slot.as_ref().is_some_and(|clip| !clip.is_running()) {
                *slot = None;
                released += 1;
            }
        }

        if released > 0 {
            log::debug!("{}: released {} idle clips", self.effect, released);
        }
        released
    }

    /// Stop every clip in the pool
    pub fn stop_all(&self) {
        for clip in self.slots.lock().iter().flatten() {
            clip.stop();
        }
    }
}

impl std::fmt::Debug for ClipPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipPool")
            .field("effect", &self.effect)
            .field("capacity", &self.capacity())
            .field("occupied", &self.occupied())
            .finish()
    }
}
