//! Background track volume
//!
//! Level is kept as a percentage (0-100) so slider steps of 0.01 map to whole
//! numbers. The audio facility receives a linear fraction.

/// Volume and mute setting of the background track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume setting
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, clamped)
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Set volume from a slider fraction (0.0-1.0, rounded to 0.01)
    pub fn set_fraction(&mut self, fraction: f32) {
        let fraction = if fraction.is_finite() { fraction } else { 0.0 };
        self.set_level((fraction.clamp(0.0, 1.0) * 100.0).round() as u8);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Level as a fraction (0.0-1.0), ignoring mute
    pub fn fraction(&self) -> f32 {
        f32::from(self.level) / 100.0
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Linear gain handed to the audio facility
    ///
    /// Returns 0.0 if muted, otherwise the level fraction
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.fraction()
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(70) // Default to 70%
    }
}
