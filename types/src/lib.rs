//! Shared configuration types for doombonk
//!
//! This crate contains the serializable settings persisted by the config
//! store and consumed by the detector core and the CLI.

use serde::{Deserialize, Serialize};

/// Lowest accepted gain, in decibels.
pub const GAIN_DB_MIN: i32 = -60;
/// Highest accepted gain, in decibels.
pub const GAIN_DB_MAX: i32 = 12;

/// Default for enabled fields
fn default_true() -> bool {
    true
}

/// User settings for the interrupt detector.
///
/// `gain_db` is an offset from normal playback volume: 0 = normal,
/// negative is quieter, positive is louder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Master toggle for interrupt detection and playback
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Playback gain in decibels, clamped to [-60, 12]
    #[serde(default)]
    pub gain_db: i32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gain_db: 0,
        }
    }
}

impl DetectorConfig {
    /// Return a copy with `gain_db` forced into the supported range.
    /// Applied on every load and update so consumers never see an
    /// out-of-range value, regardless of what was persisted.
    pub fn clamped(mut self) -> Self {
        self.gain_db = self.gain_db.clamp(GAIN_DB_MIN, GAIN_DB_MAX);
        self
    }
}
