//! Bundled asset resolution
//!
//! Every bundled resource (built-in songs, photos, the poem illustration and
//! the background track) is addressed by file name and resolved against one
//! configured base. Absolute URLs, `data:` and `blob:` URIs pass through
//! unchanged so user-added items keep whatever reference they were saved with.

use url::Url;

/// Default base path for bundled assets
pub const DEFAULT_ASSET_BASE: &str = "/assets";

/// File name of the looping background track
pub const BACKGROUND_TRACK: &str = "background-music.m4a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    base: String,
}

impl AssetResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve an asset name to the URL the audio/image facility should load
    pub fn resolve(&self, name: &str) -> String {
        if Url::parse(name).is_ok() {
            return name.to_string();
        }
        format!("{}/{}", self.base, name.trim_start_matches('/'))
    }

    pub fn background_track(&self) -> String {
        self.resolve(BACKGROUND_TRACK)
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_names() {
        let assets = AssetResolver::new("/assets/");
        assert_eq!(assets.resolve("1.mp3"), "/assets/1.mp3");
        assert_eq!(assets.resolve("/songs/2.mp3"), "/assets/songs/2.mp3");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let assets = AssetResolver::default();
        assert_eq!(
            assets.resolve("https://example.com/a.mp3"),
            "https://example.com/a.mp3"
        );
        assert_eq!(
            assets.resolve("data:audio/mpeg;base64,AAAA"),
            "data:audio/mpeg;base64,AAAA"
        );
    }

    #[test]
    fn background_track_uses_bundled_asset() {
        let assets = AssetResolver::new("https://cdn.example.com/keepsake");
        assert_eq!(
            assets.background_track(),
            "https://cdn.example.com/keepsake/background-music.m4a"
        );
    }
}
