//! Test doubles for the resource store and the audio backend

use crate::assets::{AssetError, MemoryResourceStore, ResourceStore};
use crate::audio::{AudioBackend, AudioError, AudioFormat, Clip, ClipHandle, SoundEffect};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Minimal WAV-tagged payload; `tag` makes each resource distinct
pub fn wav_bytes(tag: u8) -> Vec<u8> {
    let mut bytes = b"RIFF\x24\x00\x00\x00WAVE".to_vec();
    bytes.extend_from_slice(&[tag; 16]);
    bytes
}

/// Memory store holding a distinct payload for every sound effect
pub fn all_effects_store() -> MemoryResourceStore {
    SoundEffect::ALL
        .iter()
        .zip(1u8..)
        .fold(MemoryResourceStore::new(), |store, (effect, tag)| {
            store.with_resource(effect.resource_path(), wav_bytes(tag))
        })
}

/// Resource store that counts how often each path is opened
pub struct CountingStore<S> {
    inner: S,
    opens: Mutex<HashMap<String, usize>>,
}

impl<S: ResourceStore> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            opens: Mutex::new(HashMap::new()),
        }
    }

    pub fn opens_of(&self, path: &str) -> usize {
        self.opens.lock().get(path).copied().unwrap_or(0)
    }

    pub fn total_opens(&self) -> usize {
        self.opens.lock().values().sum()
    }
}

impl<S: ResourceStore> ResourceStore for CountingStore<S> {
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        *self.opens.lock().entry(path.to_string()).or_insert(0) += 1;
        self.inner.open(path)
    }
}

/// Resource store whose streams fail halfway through reading
pub struct FailingReadStore;

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "resource truncated"))
    }
}

impl ResourceStore for FailingReadStore {
    fn open(&self, _path: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        Ok(Box::new(FailingReader))
    }
}

/// Clip whose running state is controlled by the test
#[derive(Default)]
pub struct MockClip {
    running: AtomicBool,
    starts: AtomicUsize,
    rewinds: AtomicUsize,
}

impl MockClip {
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn rewinds(&self) -> usize {
        self.rewinds.load(Ordering::SeqCst)
    }

    /// Simulate the clip finishing (`false`) or still playing (`true`)
    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
    }
}

impl Clip for MockClip {
    fn start(&self) {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.running.store(true, Ordering::SeqCst);
    }

    fn rewind(&self) -> Result<(), AudioError> {
        self.rewinds.fetch_add(1, Ordering::SeqCst);
        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Backend that hands out [`MockClip`]s and records them
pub struct MockBackend {
    clips: Mutex<Vec<Arc<MockClip>>>,
    device_available: AtomicBool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            clips: Mutex::new(Vec::new()),
            device_available: AtomicBool::new(true),
        }
    }

    /// Number of clips opened so far
    pub fn opened(&self) -> usize {
        self.clips.lock().len()
    }

    /// The `index`-th clip opened
    pub fn clip(&self, index: usize) -> Arc<MockClip> {
        Arc::clone(&self.clips.lock()[index])
    }

    pub fn set_device_available(&self, available: bool) {
        self.device_available.store(available, Ordering::SeqCst);
    }

    /// Mark every clip opened so far as finished
    pub fn finish_all(&self) {
        for clip in self.clips.lock().iter() {
            clip.set_running(false);
        }
    }
}

impl AudioBackend for MockBackend {
    fn open_clip(&self, bytes: Arc<[u8]>) -> Result<ClipHandle, AudioError> {
        if !AudioFormat::detect(&bytes).is_known() {
            return Err(AudioError::UnsupportedFormat("mock decoder".to_string()));
        }
        if !self.device_available.load(Ordering::SeqCst) {
            return Err(AudioError::DeviceUnavailable("mock device busy".to_string()));
        }

        let clip = Arc::new(MockClip::default());
        self.clips.lock().push(Arc::clone(&clip));
        Ok(ClipHandle::from_arc(clip))
    }
}
