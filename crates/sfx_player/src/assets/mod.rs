//! Resource stores for bundled audio assets
//!
//! Sound effects are addressed by classpath-like resource paths such as
//! `/sfx/laser.wav`. A [`ResourceStore`] turns such a path into a readable
//! byte stream; it never caches, that is the job of the sound cache.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Read-only, path-addressed provider of raw resource bytes
pub trait ResourceStore: Send + Sync {
    /// Open the resource at `path` for reading
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, AssetError>;
}

impl<S: ResourceStore + ?Sized> ResourceStore for Box<S> {
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        (**self).open(path)
    }
}

impl<S: ResourceStore + ?Sized> ResourceStore for Arc<S> {
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        (**self).open(path)
    }
}

/// Resource store backed by the filesystem
///
/// Resource paths are resolved against each search path in order, with the
/// leading `/` stripped, so `/sfx/laser.wav` under the search path
/// `resources` becomes `resources/sfx/laser.wav`.
#[derive(Debug, Clone)]
pub struct FileResourceStore {
    search_paths: Vec<PathBuf>,
}

impl FileResourceStore {
    /// Create a store over the given search paths (searched in order)
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Search paths in resolution order
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Resolve a resource path to the first existing file
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }

        self.search_paths
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
    }
}

impl ResourceStore for FileResourceStore {
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        let file_path = self
            .resolve(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;

        let file = File::open(&file_path)?;
        log::trace!("Opened resource {} at {}", path, file_path.display());
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Resource store holding assets in memory
///
/// Suited to `include_bytes!` bundles and to tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceStore {
    resources: HashMap<String, Arc<[u8]>>,
}

impl MemoryResourceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous content at `path`
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.resources.insert(path.into(), bytes.into());
    }

    /// Builder-style variant of [`insert`](Self::insert)
    #[must_use]
    pub fn with_resource(mut self, path: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.insert(path, bytes);
        self
    }

    /// Number of stored resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the store holds no resources
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceStore for MemoryResourceStore {
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        let bytes = self
            .resources
            .get(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;
        Ok(Box::new(Cursor::new(bytes.as_ref())))
    }
}

/// Resource store errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// IO error while opening or reading a resource
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sfx_player_assets_{}_{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(dir.join("sfx")).unwrap();
        dir
    }

    fn read_all(store: &dyn ResourceStore, path: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        store.open(path).unwrap().read_to_end(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_memory_store_open() {
        let store = MemoryResourceStore::new().with_resource("/sfx/laser.wav", vec![1u8, 2, 3]);

        assert_eq!(store.len(), 1);
        assert_eq!(read_all(&store, "/sfx/laser.wav"), vec![1, 2, 3]);
    }

    #[test]
    fn test_memory_store_missing() {
        let store = MemoryResourceStore::new();
        assert!(store.is_empty());
        assert!(matches!(store.open("/sfx/nope.wav"), Err(AssetError::NotFound(p)) if p == "/sfx/nope.wav"));
    }

    #[test]
    fn test_file_store_strips_leading_slash() {
        let root = scratch_dir();
        std::fs::write(root.join("sfx/laser.wav"), b"RIFFdata").unwrap();

        let store = FileResourceStore::new([root.clone()]);
        assert_eq!(store.resolve("/sfx/laser.wav"), Some(root.join("sfx/laser.wav")));
        assert_eq!(read_all(&store, "/sfx/laser.wav"), b"RIFFdata".to_vec());

        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_file_store_search_order() {
        let first = scratch_dir();
        let second = scratch_dir();
        std::fs::write(second.join("sfx/quiet.wav"), b"second").unwrap();

        let store = FileResourceStore::new([first.clone(), second.clone()]);
        assert_eq!(read_all(&store, "/sfx/quiet.wav"), b"second".to_vec());

        std::fs::write(first.join("sfx/quiet.wav"), b"first").unwrap();
        assert_eq!(read_all(&store, "/sfx/quiet.wav"), b"first".to_vec());

        std::fs::remove_dir_all(first).ok();
        std::fs::remove_dir_all(second).ok();
    }

    #[test]
    fn test_file_store_missing() {
        let root = scratch_dir();
        let store = FileResourceStore::new([root.clone()]);

        assert!(matches!(store.open("/sfx/missing.wav"), Err(AssetError::NotFound(_))));
        // Directories are not resources
        assert!(store.resolve("/sfx").is_none());
        assert!(store.resolve("/").is_none());

        std::fs::remove_dir_all(root).ok();
    }
}
