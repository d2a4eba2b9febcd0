//! Per-tick world snapshot model.
//!
//! One `WorldSnapshot` is delivered per simulation tick. The detector
//! treats it as read-only; all fields are plain data so captures can be
//! serialized to disk and replayed offline.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of tiles occupied by an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldArea {
    pub x: i32,
    pub y: i32,
    #[serde(default = "one")]
    pub width: i32,
    #[serde(default = "one")]
    pub height: i32,
}

fn one() -> i32 {
    1
}

impl WorldArea {
    /// A single-tile area.
    pub fn tile(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: 1,
            height: 1,
        }
    }

    /// Chebyshev distance between the nearest tiles of two areas.
    /// Overlapping areas are at distance 0, adjacent tiles at distance 1.
    pub fn distance_to(&self, other: &WorldArea) -> i32 {
        let dx = axis_distance(self.x, self.width, other.x, other.width);
        let dy = axis_distance(self.y, self.height, other.y, other.height);
        dx.max(dy)
    }
}

fn axis_distance(start_a: i32, len_a: i32, start_b: i32, len_b: i32) -> i32 {
    let end_a = start_a + len_a - 1;
    let end_b = start_b + len_b - 1;
    if start_b > end_a {
        start_b - end_a
    } else if start_a > end_b {
        start_a - end_b
    } else {
        0
    }
}

/// A visible NPC: template id plus the animation it is playing this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcDescriptor {
    pub npc_id: i32,
    pub animation: i32,
}

/// The item in the local actor's weapon slot.
///
/// `name` is the display name used by the melee heuristic; it can be
/// absent when the item composition has not been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedWeapon {
    pub item_id: i32,
    #[serde(default)]
    pub name: Option<String>,
}

/// What the local actor is currently interacting with.
///
/// Tagged variant instead of a downcastable entity reference: the
/// detector only ever needs to know whether the target is an NPC and,
/// if so, which one and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractTarget {
    Npc { npc_id: i32, area: WorldArea },
    /// Player, object, or anything else the detector does not care about
    Other,
}

impl InteractTarget {
    /// Capability query: the target as an NPC, if it is one.
    pub fn as_npc(&self) -> Option<(i32, &WorldArea)> {
        match self {
            InteractTarget::Npc { npc_id, area } => Some((*npc_id, area)),
            InteractTarget::Other => None,
        }
    }
}

/// The local participant's state for this tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalActor {
    pub area: WorldArea,
    pub animation: i32,
    #[serde(default)]
    pub weapon: Option<EquippedWeapon>,
    #[serde(default)]
    pub interacting: Option<InteractTarget>,
}

/// Everything the detector sees on one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Monotonic tick counter supplied by the host
    pub tick: i32,
    /// Absent while the local actor is not in the world (loading screens)
    #[serde(default)]
    pub local: Option<LocalActor>,
    #[serde(default)]
    pub npcs: Vec<NpcDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_tiles_are_distance_one() {
        let a = WorldArea::tile(10, 10);
        assert_eq!(a.distance_to(&WorldArea::tile(11, 10)), 1);
        assert_eq!(a.distance_to(&WorldArea::tile(11, 11)), 1);
        assert_eq!(a.distance_to(&WorldArea::tile(10, 10)), 0);
        assert_eq!(a.distance_to(&WorldArea::tile(13, 10)), 3);
    }

    #[test]
    fn multi_tile_areas_measure_from_nearest_edge() {
        // 3x3 boss footprint next to a single-tile player
        let boss = WorldArea {
            x: 10,
            y: 10,
            width: 3,
            height: 3,
        };
        let player = WorldArea::tile(14, 11);
        assert_eq!(boss.distance_to(&player), 2);
        assert_eq!(player.distance_to(&boss), 2);

        // standing inside the footprint
        assert_eq!(boss.distance_to(&WorldArea::tile(11, 11)), 0);
    }

    #[test]
    fn as_npc_only_matches_npc_targets() {
        let target = InteractTarget::Npc {
            npc_id: 14707,
            area: WorldArea::tile(0, 0),
        };
        assert_eq!(target.as_npc().map(|(id, _)| id), Some(14707));
        assert!(InteractTarget::Other.as_npc().is_none());
    }
}
