//! Playback Events
//!
//! Event-based communication for UI synchronization. Events are queued at
//! every state change and drained by the shell after it feeds a callback in:
//! - Foreground slot changes (idle/playing)
//! - Items becoming unavailable
//! - Background track state and volume changes

use crate::types::{BackgroundState, SlotState};
use keepsake_core::ItemId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback coordinator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A foreground slot changed state
    SlotChanged {
        /// Name of the slot
        slot: String,
        /// The new slot state
        state: SlotState,
    },

    /// An item failed to play and is disabled for the session
    ItemUnavailable {
        /// Name of the slot
        slot: String,
        /// ID of the disabled item
        id: ItemId,
    },

    /// Background track state changed
    BackgroundChanged {
        /// The new background state
        state: BackgroundState,
    },

    /// Background volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },
}

/// Ordered buffer of pending events
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    events: Vec<PlaybackEvent>,
}

impl EventQueue {
    pub(crate) fn push(&mut self, event: PlaybackEvent) {
        self.events.push(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }
}
