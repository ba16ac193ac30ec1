//! Configuration system

pub use serde::{Deserialize, Serialize};

/// Default number of concurrently playable clips per sound effect
pub const DEFAULT_CLIPS_PER_EFFECT: usize = 10;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Sound player configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Number of clip slots in each effect's pool
    pub clips_per_effect: usize,
    /// Filesystem roots searched for resource paths, in order
    pub search_paths: Vec<String>,
    /// Load every effect into the cache when the player is created
    pub preload: bool,
}

impl SoundConfig {
    /// Set the pool size per effect
    #[must_use]
    pub fn with_clips_per_effect(mut self, clips: usize) -> Self {
        self.clips_per_effect = clips;
        self
    }

    /// Replace the search paths
    #[must_use]
    pub fn with_search_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable cache preloading
    #[must_use]
    pub const fn with_preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    /// Pool size actually used (a pool always has at least one slot)
    pub fn effective_clips_per_effect(&self) -> usize {
        self.clips_per_effect.max(1)
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            clips_per_effect: DEFAULT_CLIPS_PER_EFFECT,
            search_paths: vec![
                "resources".to_string(),
                "assets".to_string(),
                ".".to_string(),
            ],
            preload: false,
        }
    }
}

impl Config for SoundConfig {}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
