//! Fixed identifiers for the Doom of Mokhaiotl encounter.
//!
//! Ids sourced from the live game cache; one entry per delve-depth
//! variant of the boss.

use phf::phf_set;

/// NPC ids for Doom of Mokhaiotl, one per variant
static DOOM_NPC_IDS: phf::Set<i32> = phf_set! {
    14707i32,
    14708i32,
    14709i32,
};

/// Animation played while the boss charges its slam
pub const CHARGE_ANIMATION: i32 = 12409;

/// Animation id reported when an actor is doing nothing
pub const IDLE_ANIMATION: i32 = -1;

/// Maximum distance (in tiles) at which a swing can connect
pub const MELEE_RANGE_TILES: i32 = 2;

/// Ticks after the last swing during which a charge end is credited to it.
/// Charge-end animation and hit registration are not simultaneous in the
/// simulation; this trailing tolerance absorbs the skew.
pub const INTERRUPT_WINDOW_TICKS: i32 = 4;

/// Check if an NPC id is one of the Doom variants
pub fn is_doom_npc(npc_id: i32) -> bool {
    DOOM_NPC_IDS.contains(&npc_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_doom_variants_match() {
        assert!(is_doom_npc(14707));
        assert!(is_doom_npc(14708));
        assert!(is_doom_npc(14709));
        assert!(!is_doom_npc(14706));
        assert!(!is_doom_npc(0));
    }
}
