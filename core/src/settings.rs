//! Settings persistence.
//!
//! Two user preferences survive across sessions: the enabled flag and the
//! playback gain. Stored through confy in the platform config directory;
//! the gain is clamped on every load so a hand-edited file cannot push an
//! out-of-range value into the detector.

use doombonk_types::DetectorConfig;
use thiserror::Error;

const APP_NAME: &str = "doombonk";
const CONFIG_NAME: &str = "config";

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

/// Load settings from the config store, clamped to supported ranges.
pub fn load_config() -> Result<DetectorConfig, ConfigError> {
    let config: DetectorConfig = confy::load(APP_NAME, CONFIG_NAME)?;
    Ok(config.clamped())
}

/// Persist settings to the config store.
pub fn store_config(config: DetectorConfig) -> Result<(), ConfigError> {
    confy::store(APP_NAME, CONFIG_NAME, config.clamped()).map_err(ConfigError::Save)
}
