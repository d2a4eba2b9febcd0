pub mod audio;
pub mod detector;
pub mod game_data;
pub mod replay;
pub mod session;
pub mod settings;
pub mod world;

// Re-exports for convenience
pub use audio::InterruptSound;
pub use detector::{InterruptDetector, PlaySound, is_melee};
pub use game_data::{CHARGE_ANIMATION, IDLE_ANIMATION, INTERRUPT_WINDOW_TICKS, is_doom_npc};
pub use replay::{ReplayError, ReplayReport};
pub use session::Session;
pub use settings::{ConfigError, load_config, store_config};
pub use world::{EquippedWeapon, InteractTarget, LocalActor, NpcDescriptor, WorldArea, WorldSnapshot};

pub use doombonk_types::{DetectorConfig, GAIN_DB_MAX, GAIN_DB_MIN};
