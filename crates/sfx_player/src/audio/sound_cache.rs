//! Sound byte cache
//!
//! Maps a resource path to the raw encoded bytes read from the resource
//! store. Entries are inserted once and never evicted or refreshed.

use crate::assets::ResourceStore;
use crate::audio::AudioError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

/// Lazily populated, never evicted cache of raw audio bytes
pub struct SoundCache {
    store: Box<dyn ResourceStore>,
    entries: Mutex<HashMap<String, Arc<[u8]>>>,
}

impl SoundCache {
    /// Create an empty cache reading from `store`
    pub fn new(store: impl ResourceStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get the bytes for `path`, reading them from the store on first use
    ///
    /// The lock is held across check, read and insert, so concurrent first
    /// requests for the same path read the store once. A failed read leaves
    /// no entry behind.
    pub fn load(&self, path: &str) -> Result<Arc<[u8]>, AudioError> {
        let mut entries = self.entries.lock();
        if let Some(bytes) = entries.get(path) {
            return Ok(Arc::clone(bytes));
        }

        log::debug!("Sound cache miss: {}", path);
        let bytes = self.read_resource(path)?;
        log::debug!("Cached {} ({} bytes)", path, bytes.len());

        entries.insert(path.to_string(), Arc::clone(&bytes));
        Ok(bytes)
    }

    /// Whether `path` has already been loaded
    pub fn contains(&self, path: &str) -> bool {
        self.entries.lock().contains_key(path)
    }

    /// Number of cached resources
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Total bytes held by the cache
    pub fn total_bytes(&self) -> usize {
        self.entries.lock().values().map(|bytes| bytes.len()).sum()
    }

    fn read_resource(&self, path: &str) -> Result<Arc<[u8]>, AudioError> {
        let mut reader = self
            .store
            .open(path)
            .map_err(|e| AudioError::from_asset(path, e))?;

        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(|source| AudioError::Io {
                path: path.to_string(),
                source,
            })?;

        Ok(Arc::from(buffer))
    }
}

impl std::fmt::Debug for SoundCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundCache")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}
