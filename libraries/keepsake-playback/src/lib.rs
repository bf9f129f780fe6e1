//! Keepsake - Playback Coordination
//!
//! Platform-agnostic coordination of user-started clips and the looping
//! background track.
//!
//! This crate provides:
//! - Foreground slots (at most one clip per slot, failed clips disabled)
//! - Background track (autoplay, pause/resume on signal, volume/mute)
//! - Ducking signals between the two, injected instead of broadcast globally
//! - Events for UI synchronization
//!
//! # Architecture
//!
//! `keepsake-playback` never touches audio itself. Platform code implements
//! [`ClipOutput`] / [`TrackOutput`] and feeds outcomes back through the
//! `on_*` callbacks. Everything runs on one thread; every transition is a
//! synchronous method call.
//!
//! # Example: Songs section ducking the background track
//!
//! ```rust
//! use keepsake_core::ItemId;
//! use keepsake_playback::{
//!     BackgroundState, ClipOutput, PlaybackConfig, PlaybackCoordinator, TrackOutput, Volume,
//! };
//!
//! struct Silent;
//!
//! impl ClipOutput for Silent {
//!     fn start(&mut self, _id: ItemId) {}
//!     fn stop(&mut self, _id: ItemId) {}
//! }
//!
//! impl TrackOutput for Silent {
//!     fn start(&mut self) {}
//!     fn stop(&mut self) {}
//!     fn apply_volume(&mut self, _volume: &Volume) {}
//! }
//!
//! let mut playback =
//!     PlaybackCoordinator::new(&PlaybackConfig::default(), "/assets/bg.m4a", Silent, Silent, Silent);
//! playback.start();
//! playback.background().borrow_mut().on_started();
//!
//! let song = ItemId::new(2).unwrap();
//! playback.songs_mut().request_play(song);
//! assert_eq!(playback.background().borrow().state(), BackgroundState::Paused);
//!
//! playback.songs_mut().on_ended(song);
//! playback.background().borrow_mut().on_started();
//! assert_eq!(playback.background().borrow().state(), BackgroundState::Playing);
//! ```

mod background;
mod coordinator;
mod error;
mod events;
mod foreground;
mod output;
mod signals;
pub mod types;
mod volume;

// Public exports
pub use background::{BackgroundHandle, BackgroundTrack};
pub use coordinator::{PlaybackCoordinator, SONGS_SLOT, WELCOME_SLOT};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use foreground::ForegroundSlot;
pub use output::{ClipOutput, TrackOutput};
pub use signals::{BackgroundSignal, BackgroundSignals, NoSignals, SignalLog};
pub use types::{BackgroundState, PlaybackConfig, SlotState, StartReason};
pub use volume::Volume;
