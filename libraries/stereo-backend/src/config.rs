//! Backend configuration

use crate::error::{BackendError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stereo_selection::{CollectionSubMode, SelectionConfig};

/// Settings for the controller and the providers it creates
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Name of the controller thread
    #[serde(default = "default_thread_name")]
    pub thread_name: String,

    /// Shuffle sub-mode used when the controller starts. Later fallbacks to shuffle
    /// always use full shuffle.
    #[serde(default)]
    pub startup_sub_mode: CollectionSubMode,

    /// Refuse to load songs whose file does not exist
    #[serde(default)]
    pub verify_song_files: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            selection: SelectionConfig::default(),
            thread_name: default_thread_name(),
            startup_sub_mode: CollectionSubMode::default(),
            verify_song_files: false,
        }
    }
}

impl BackendConfig {
    /// Load configuration from an optional TOML file, then the environment
    ///
    /// Environment variables use the `STEREO_` prefix and `__` between nested keys,
    /// e.g. `STEREO_SELECTION__SHUFFLE_BATCH_SIZE=20`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(true));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("STEREO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| BackendError::Config(e.to_string()))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("selection.shuffle_batch_size", self.selection.shuffle_batch_size),
            ("selection.era_batch_size", self.selection.era_batch_size),
            ("selection.block_party_size", self.selection.block_party_size),
        ];
        for (key, size) in sizes {
            if size == 0 {
                return Err(BackendError::Config(format!("{key} must be at least 1")));
            }
        }

        if self.thread_name.trim().is_empty() {
            return Err(BackendError::Config("thread_name must not be empty".to_string()));
        }

        Ok(())
    }
}

fn default_thread_name() -> String {
    "music-controller".to_string()
}
