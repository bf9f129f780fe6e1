/// Keepsake configuration
use keepsake_core::{catalog, AssetResolver, DevMode, KeepsakeError, Result};
use keepsake_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "keepsake.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeepsakeConfig {
    #[serde(default)]
    pub dev_mode: bool,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_assets")]
    pub assets: AssetSettings,

    #[serde(default = "default_audio")]
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AudioSettings {
    #[serde(default = "default_background_track")]
    pub background_track: String,

    #[serde(default = "default_background_volume")]
    pub background_volume: f32,

    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

impl KeepsakeConfig {
    /// Load configuration from file and environment
    ///
    /// `path` overrides the default `keepsake.toml`; a missing default file is
    /// not an error, a missing explicit file is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (KEEPSAKE_DEV_MODE, KEEPSAKE_AUDIO__AUTOPLAY)
        settings = settings.add_source(
            config::Environment::with_prefix("KEEPSAKE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| KeepsakeError::config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| KeepsakeError::config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.audio.background_volume) {
            return Err(KeepsakeError::config(format!(
                "audio.background_volume must be between 0 and 1, got {}",
                self.audio.background_volume
            )));
        }

        if self.audio.background_track.trim().is_empty() {
            return Err(KeepsakeError::config(
                "audio.background_track must not be empty",
            ));
        }

        Ok(())
    }

    pub fn dev_mode(&self) -> DevMode {
        DevMode::from(self.dev_mode)
    }

    pub fn asset_resolver(&self) -> AssetResolver {
        AssetResolver::new(self.assets.base_url.clone())
    }

    /// URL of the background track, resolved like every other bundled asset
    pub fn background_source(&self) -> String {
        self.asset_resolver().resolve(&self.audio.background_track)
    }

    /// URL of the greeting played from the welcome screen
    pub fn welcome_source(&self) -> String {
        self.asset_resolver().resolve(catalog::WELCOME_GREETING)
    }

    pub fn playback(&self) -> PlaybackConfig {
        PlaybackConfig {
            background_volume: (self.audio.background_volume.clamp(0.0, 1.0) * 100.0).round()
                as u8,
            autoplay: self.audio.autoplay,
        }
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        path: default_storage_path(),
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/keepsake.json")
}

fn default_assets() -> AssetSettings {
    AssetSettings {
        base_url: default_base_url(),
    }
}

fn default_base_url() -> String {
    keepsake_core::assets::DEFAULT_ASSET_BASE.to_string()
}

fn default_audio() -> AudioSettings {
    AudioSettings {
        background_track: default_background_track(),
        background_volume: default_background_volume(),
        autoplay: default_autoplay(),
    }
}

fn default_background_track() -> String {
    keepsake_core::assets::BACKGROUND_TRACK.to_string()
}

fn default_background_volume() -> f32 {
    0.7
}

fn default_autoplay() -> bool {
    true
}

impl Default for KeepsakeConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            storage: default_storage(),
            assets: default_assets(),
            audio: default_audio(),
        }
    }
}
