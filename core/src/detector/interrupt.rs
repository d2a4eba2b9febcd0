//! Interrupt-detection state machine.
//!
//! Watches the boss's charge animation across ticks and, on the tick the
//! charge ends, decides whether the local actor's melee activity caused
//! it. The decision is a recency heuristic: the charge end is credited to
//! the last qualifying swing if it landed within the trailing window.
//!
//! One instance lives for the duration of a session; the host calls
//! `on_tick` exactly once per simulation tick and resets the detector on
//! session start and stop.

use doombonk_types::DetectorConfig;

use crate::game_data::{
    CHARGE_ANIMATION, IDLE_ANIMATION, INTERRUPT_WINDOW_TICKS, MELEE_RANGE_TILES, is_doom_npc,
};
use crate::world::{LocalActor, WorldSnapshot};

use super::weapon;

/// Request to play the interrupt cue at the configured gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySound {
    pub gain_db: i32,
}

/// Persistent cross-tick state of the detector.
///
/// `last_swing_tick`/`last_interrupt_tick` use `None` for "never".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterruptDetector {
    /// Whether any Doom instance was charging on the previous tick
    was_charging: bool,
    /// Most recent qualifying swing within the current charge window
    last_swing_tick: Option<i32>,
    /// Tick of the last emitted interrupt, guards against double emission
    last_interrupt_tick: Option<i32>,
}

impl InterruptDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all cross-tick state, as on session start/stop.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Evaluate one tick. Emits a command only on the exact tick where an
    /// interrupt is inferred. Never fails: partial snapshots degrade to
    /// "no detection this tick".
    pub fn on_tick(
        &mut self,
        snapshot: &WorldSnapshot,
        config: &DetectorConfig,
    ) -> Option<PlaySound> {
        if !config.enabled {
            // State is left untouched so a mid-session toggle does not
            // corrupt the window tracking; re-enabling resumes cleanly
            // on the next charge cycle.
            return None;
        }
        let local = snapshot.local.as_ref()?;
        let now = snapshot.tick;

        // 1) Is any Doom instance charging right now? Presence is all
        // that matters; simultaneous instances are one global signal.
        let charging_now = snapshot
            .npcs
            .iter()
            .any(|npc| is_doom_npc(npc.npc_id) && npc.animation == CHARGE_ANIMATION);

        // 2) While the charge is up, record qualifying swings. A later
        // swing overwrites an earlier one within the same window.
        if charging_now && is_qualifying_swing(local) {
            self.last_swing_tick = Some(now);
        }

        // 3) Transition handling
        if charging_now {
            if !self.was_charging {
                // new charge window; forget anything swung before it
                self.last_swing_tick = None;
            }
            self.was_charging = true;
            return None;
        }

        if !self.was_charging {
            return None;
        }

        // charge just ended this tick
        self.was_charging = false;

        let swing_tick = self.last_swing_tick?;
        let delta = now - swing_tick;
        if self.last_interrupt_tick == Some(now) {
            return None;
        }
        if !(0..=INTERRUPT_WINDOW_TICKS).contains(&delta) {
            return None;
        }

        self.last_interrupt_tick = Some(now);
        Some(PlaySound {
            gain_db: config.gain_db,
        })
    }
}

/// A swing qualifies when the local actor is attacking a Doom instance in
/// melee range with a melee-classified weapon and a non-idle animation.
fn is_qualifying_swing(local: &LocalActor) -> bool {
    let Some((npc_id, target_area)) = local.interacting.as_ref().and_then(|t| t.as_npc()) else {
        return false;
    };

    is_doom_npc(npc_id)
        && weapon::is_melee(local.weapon.as_ref())
        && local.area.distance_to(target_area) <= MELEE_RANGE_TILES
        && local.animation != IDLE_ANIMATION
}
