//! Core types for playback coordination

use keepsake_core::ItemId;
use serde::{Deserialize, Serialize};

/// State of one foreground slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotState {
    /// Nothing playing
    #[default]
    Idle,

    /// One item playing
    Playing(ItemId),
}

impl SlotState {
    pub fn playing(self) -> Option<ItemId> {
        match self {
            SlotState::Idle => None,
            SlotState::Playing(id) => Some(id),
        }
    }

    pub fn is_playing(self, id: ItemId) -> bool {
        self == SlotState::Playing(id)
    }
}

/// State of the background track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundState {
    /// Audibly looping (subject to volume and mute)
    Playing,

    /// Not playing; a start may be pending
    Paused,

    /// The resource failed to load; terminal for the session
    Errored,
}

/// Why a background start was requested
///
/// Decides what a rejected start means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartReason {
    /// Automatic start on mount; rejection waits for the first user interaction
    Autoplay,

    /// Retry after autoplay was blocked
    Interaction,

    /// Foreground playback stopped; rejection leaves the track paused
    Resume,

    /// The play control; rejection marks the track errored
    User,
}

/// Configuration for the playback coordinator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial background volume (0-100, default: 70)
    pub background_volume: u8,

    /// Start the background track on mount (default: true)
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            background_volume: 70,
            autoplay: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.background_volume, 70);
        assert!(config.autoplay);
    }

    #[test]
    fn slot_state_accessors() {
        let id = ItemId::new(2).unwrap();
        assert_eq!(SlotState::Idle.playing(), None);
        assert_eq!(SlotState::Playing(id).playing(), Some(id));
        assert!(SlotState::Playing(id).is_playing(id));
        assert!(!SlotState::Idle.is_playing(id));
    }
}
