use std::path::Path;
use std::time::Duration;

use doombonk_core::audio::InterruptSound;
use doombonk_core::{replay, settings};

/// Bundled sound assets, relative to the working directory.
const BUNDLED_SOUNDS_DIR: &str = "assets/sounds";

pub fn replay(path: &str, play: bool) -> Result<(), String> {
    let config = settings::load_config().map_err(|e| e.to_string())?;
    let report = replay::run_file(Path::new(path), &config).map_err(|e| e.to_string())?;

    println!("processed {} ticks", report.ticks);
    if report.interrupts.is_empty() {
        println!("no interrupts detected");
        return Ok(());
    }

    for tick in &report.interrupts {
        println!("interrupt at tick {tick}");
    }

    if play {
        match InterruptSound::load(Path::new(BUNDLED_SOUNDS_DIR)) {
            Some(sound) => {
                sound.play(config.gain_db);
                // playback runs on a detached thread; keep the process
                // alive long enough for it to drain
                std::thread::sleep(Duration::from_millis(1500));
            }
            None => println!("no interrupt cue found, skipping playback"),
        }
    }

    Ok(())
}

pub fn show_config() -> Result<(), String> {
    let config = settings::load_config().map_err(|e| e.to_string())?;
    println!("enabled: {}", config.enabled);
    println!("gain_db: {}", config.gain_db);
    Ok(())
}

pub fn set_config(enabled: Option<bool>, gain_db: Option<i32>) -> Result<(), String> {
    let mut config = settings::load_config().map_err(|e| e.to_string())?;

    if let Some(enabled) = enabled {
        config.enabled = enabled;
    }
    if let Some(gain_db) = gain_db {
        config.gain_db = gain_db;
    }

    let config = config.clamped();
    settings::store_config(config).map_err(|e| e.to_string())?;

    println!("enabled: {}", config.enabled);
    println!("gain_db: {}", config.gain_db);
    Ok(())
}
