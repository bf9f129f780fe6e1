//! Error types for playback coordination
//!
//! Transitions themselves never fail; these errors only explain to a shell
//! why a request it made was ignored.

use keepsake_core::ItemId;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The item is not part of the slot's content
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    /// The item failed to play earlier this session
    #[error("Audio unavailable for item {0}")]
    ItemUnavailable(ItemId),

    /// The background track failed to load
    #[error("Background track unavailable")]
    TrackErrored,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
