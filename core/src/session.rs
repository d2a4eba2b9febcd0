//! Session lifecycle.
//!
//! Owns the detector state, the loaded settings, and the audio handle.
//! The host calls `start` when the plugin session begins, `tick` once per
//! simulation tick, and `stop` when it ends. Detector state never
//! survives across sessions.

use std::path::{Path, PathBuf};

use tracing::warn;

use doombonk_types::DetectorConfig;

use crate::audio::InterruptSound;
use crate::detector::{InterruptDetector, PlaySound};
use crate::settings;
use crate::world::WorldSnapshot;

pub struct Session {
    config: DetectorConfig,
    detector: InterruptDetector,
    sound: Option<InterruptSound>,
    bundled_sounds_dir: PathBuf,
}

impl Session {
    pub fn new(bundled_sounds_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: DetectorConfig::default(),
            detector: InterruptDetector::new(),
            sound: None,
            bundled_sounds_dir: bundled_sounds_dir.into(),
        }
    }

    /// Begin a session: reset detector state, restore persisted settings,
    /// load the audio cue. A missing or unreadable cue degrades to a
    /// silent session, never a failure.
    pub fn start(&mut self) {
        self.detector.reset();
        self.config = match settings::load_config() {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "could not load settings, using defaults");
                DetectorConfig::default()
            }
        };
        self.sound = InterruptSound::load(&self.bundled_sounds_dir);
    }

    /// End a session: reset detector state and release the audio handle.
    pub fn stop(&mut self) {
        self.detector.reset();
        self.sound = None;
    }

    /// Process one tick. Dispatches fire-and-forget playback when an
    /// interrupt is inferred and returns the command for observability.
    pub fn tick(&mut self, snapshot: &WorldSnapshot) -> Option<PlaySound> {
        let command = self.detector.on_tick(snapshot, &self.config);
        if let Some(command) = command
            && let Some(sound) = &self.sound
        {
            sound.play(command.gain_db);
        }
        command
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Replace the active settings, e.g. after the user edits them
    /// mid-session. Detector state is deliberately left alone.
    pub fn set_config(&mut self, config: DetectorConfig) {
        self.config = config.clamped();
    }

    pub fn bundled_sounds_dir(&self) -> &Path {
        &self.bundled_sounds_dir
    }
}
