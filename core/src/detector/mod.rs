pub mod interrupt;
pub mod weapon;


pub use interrupt::{InterruptDetector, PlaySound};
pub use weapon::is_melee;
