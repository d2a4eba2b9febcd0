//! Interrupt cue playback.
//!
//! Fire-and-forget: each play request decodes the loaded bytes on a
//! spawned thread and lets the sink drain there. The detector never waits
//! for playback and playback failures never reach tick processing; they
//! are logged and dropped.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use doombonk_types::{GAIN_DB_MAX, GAIN_DB_MIN};

/// File name of the interrupt cue, looked up in the sounds directories.
pub const SOUND_FILE: &str = "interrupt.wav";

/// The interrupt cue, loaded once per session.
pub struct InterruptSound {
    data: Arc<[u8]>,
}

impl InterruptSound {
    /// Load the cue file. A file of the same name in the user sounds
    /// directory (`<data_dir>/doombonk/sounds/`) overrides the bundled
    /// asset. Returns None when neither exists or the file is unreadable;
    /// the session then runs silently.
    pub fn load(bundled_dir: &Path) -> Option<Self> {
        let path = resolve_sound_path(bundled_dir)?;
        match std::fs::read(&path) {
            Ok(data) => Some(Self { data: data.into() }),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read interrupt cue");
                None
            }
        }
    }

    /// Build from in-memory bytes, bypassing the filesystem lookup.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }

    /// Play the cue at the given gain. Returns immediately; decoding and
    /// output happen on a detached thread. Already-running playback is
    /// not stopped, a new sink simply starts from zero.
    pub fn play(&self, gain_db: i32) {
        let data = Arc::clone(&self.data);
        let volume = db_to_amplitude(gain_db.clamp(GAIN_DB_MIN, GAIN_DB_MAX));

        std::thread::spawn(move || {
            use rodio::{Decoder, OutputStream, Sink};

            let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
                debug!("no audio output device available");
                return;
            };
            let Ok(source) = Decoder::new(Cursor::new(data)) else {
                debug!("failed to decode interrupt cue");
                return;
            };
            let Ok(sink) = Sink::try_new(&stream_handle) else {
                debug!("failed to open audio sink");
                return;
            };

            sink.set_volume(volume);
            sink.append(source);
            sink.sleep_until_end();
        });
    }
}

/// User override first, bundled asset second.
fn resolve_sound_path(bundled_dir: &Path) -> Option<PathBuf> {
    let user_path = dirs::data_dir().map(|dir| dir.join("doombonk").join("sounds").join(SOUND_FILE));
    if let Some(path) = user_path
        && path.exists()
    {
        return Some(path);
    }

    let bundled = bundled_dir.join(SOUND_FILE);
    if bundled.exists() {
        return Some(bundled);
    }

    warn!(
        dir = %bundled_dir.display(),
        "interrupt cue {SOUND_FILE} not found; session will run silently"
    );
    None
}

/// Decibel offset to linear amplitude (0 dB = 1.0).
fn db_to_amplitude(gain_db: i32) -> f32 {
    10f32.powf(gain_db as f32 / 20.0)
}
