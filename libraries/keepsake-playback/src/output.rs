//! Platform-agnostic audio output traits
//!
//! Abstracts the audio facility (an `<audio>` element per resource in a
//! browser, a decoder elsewhere). Starting is asynchronous: implementors only
//! issue the request, and the platform reports the outcome later through the
//! coordinator's `on_*` callbacks.

use crate::volume::Volume;
use keepsake_core::ItemId;

/// Audio facility for the clips of one foreground slot
pub trait ClipOutput {
    /// Request playback of the clip for `id`
    fn start(&mut self, id: ItemId);

    /// Stop the clip for `id`; assumed immediate and reliable
    fn stop(&mut self, id: ItemId);
}

/// Audio facility for the looping background track
pub trait TrackOutput {
    /// Request (re)start of the loop
    fn start(&mut self);

    /// Stop the loop; assumed immediate and reliable
    fn stop(&mut self);

    /// Apply a new volume or mute setting
    fn apply_volume(&mut self, volume: &Volume);
}
