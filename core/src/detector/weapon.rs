//! Melee classification for the equipped weapon.
//!
//! Substring heuristic over the item's display name: anything that does
//! not look ranged or magic is assumed melee. Not an authoritative
//! weapon-category lookup; weapons whose names carry none of the listed
//! tokens will misclassify. Kept behind this function so it can be
//! swapped for a real category table without touching the state machine.

use crate::world::EquippedWeapon;

/// Name fragments that mark a ranged weapon
const RANGED_TOKENS: &[&str] = &[
    "bow",
    "crossbow",
    "blowpipe",
    "ballista",
    "chinchompa",
    "dart",
    "knife",
    "javelin",
    "thrown",
    "throwing",
    "toktz-xil-ul",
];

/// Name fragments that mark a magic weapon
const MAGIC_TOKENS: &[&str] = &["staff", "wand", "trident", "sceptre", "scepter", "tome", "kodai"];

/// Classify the equipped weapon as melee.
///
/// Pure function of the weapon slot contents. No weapon, an empty slot
/// (`item_id <= 0`), or an unresolved name all classify as not melee.
pub fn is_melee(weapon: Option<&EquippedWeapon>) -> bool {
    let Some(weapon) = weapon else {
        return false;
    };
    if weapon.item_id <= 0 {
        return false;
    }
    let Some(name) = weapon.name.as_deref() else {
        return false;
    };

    let name = name.to_lowercase();
    let hit = |tokens: &[&str]| tokens.iter().any(|token| name.contains(token));

    !hit(RANGED_TOKENS) && !hit(MAGIC_TOKENS)
}
