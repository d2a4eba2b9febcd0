//! Offline capture replay.
//!
//! A capture is JSON Lines: one serialized `WorldSnapshot` per line, in
//! tick order, as recorded from a live session. Replay feeds the capture
//! through a fresh detector and reports which ticks would have produced
//! the interrupt cue.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use doombonk_types::DetectorConfig;

use crate::detector::InterruptDetector;
use crate::world::WorldSnapshot;

/// Errors while reading a capture
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to open capture {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read capture input")]
    Read(#[source] std::io::Error),

    #[error("malformed snapshot on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of replaying a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Number of snapshots processed
    pub ticks: usize,
    /// Tick values on which an interrupt was inferred
    pub interrupts: Vec<i32>,
}

/// Replay snapshots from any line-oriented reader. Blank lines are
/// skipped; a malformed line aborts with its line number.
pub fn run_reader(reader: impl BufRead, config: &DetectorConfig) -> Result<ReplayReport, ReplayError> {
    let mut detector = InterruptDetector::new();
    let mut report = ReplayReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(ReplayError::Read)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let snapshot: WorldSnapshot = serde_json::from_str(line).map_err(|source| ReplayError::Parse {
            line: index + 1,
            source,
        })?;

        report.ticks += 1;
        if detector.on_tick(&snapshot, config).is_some() {
            debug!(tick = snapshot.tick, "interrupt detected");
            report.interrupts.push(snapshot.tick);
        }
    }

    Ok(report)
}

/// Replay a capture file.
pub fn run_file(path: &Path, config: &DetectorConfig) -> Result<ReplayReport, ReplayError> {
    let file = File::open(path).map_err(|source| ReplayError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    run_reader(BufReader::new(file), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::CHARGE_ANIMATION;
    use crate::world::{EquippedWeapon, InteractTarget, LocalActor, NpcDescriptor, WorldArea, WorldSnapshot};

    fn snapshot(tick: i32, charging: bool, swinging: bool) -> WorldSnapshot {
        WorldSnapshot {
            tick,
            local: Some(LocalActor {
                area: WorldArea::tile(0, 0),
                animation: if swinging { 390 } else { -1 },
                weapon: Some(EquippedWeapon {
                    item_id: 4151,
                    name: Some("Abyssal whip".to_string()),
                }),
                interacting: swinging.then(|| InteractTarget::Npc {
                    npc_id: 14707,
                    area: WorldArea::tile(1, 0),
                }),
            }),
            npcs: vec![NpcDescriptor {
                npc_id: 14707,
                animation: if charging { CHARGE_ANIMATION } else { 9335 },
            }],
        }
    }

    fn capture(snapshots: &[WorldSnapshot]) -> String {
        snapshots
            .iter()
            .map(|s| serde_json::to_string(s).expect("snapshot serializes"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn replay_reports_interrupt_ticks() {
        let lines = capture(&[
            snapshot(100, true, false),
            snapshot(101, true, true),
            snapshot(102, true, false),
            snapshot(103, true, false),
            snapshot(104, false, false),
        ]);

        let report = run_reader(lines.as_bytes(), &DetectorConfig::default()).expect("replay runs");
        assert_eq!(report.ticks, 5);
        assert_eq!(report.interrupts, vec![104]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lines = format!(
            "\n{}\n\n{}\n",
            serde_json::to_string(&snapshot(1, false, false)).unwrap(),
            serde_json::to_string(&snapshot(2, false, false)).unwrap(),
        );

        let report = run_reader(lines.as_bytes(), &DetectorConfig::default()).expect("replay runs");
        assert_eq!(report.ticks, 2);
        assert!(report.interrupts.is_empty());
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let lines = format!(
            "{}\nnot json\n",
            serde_json::to_string(&snapshot(1, false, false)).unwrap(),
        );

        let err = run_reader(lines.as_bytes(), &DetectorConfig::default()).unwrap_err();
        match err {
            ReplayError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn disabled_config_replays_to_nothing() {
        let lines = capture(&[
            snapshot(100, true, true),
            snapshot(101, true, false),
            snapshot(102, false, false),
        ]);
        let disabled = DetectorConfig {
            enabled: false,
            gain_db: 0,
        };

        let report = run_reader(lines.as_bytes(), &disabled).expect("replay runs");
        assert_eq!(report.ticks, 3);
        assert!(report.interrupts.is_empty());
    }

    #[test]
    fn open_error_carries_the_path() {
        let err = run_file(Path::new("/nonexistent/capture.jsonl"), &DetectorConfig::default())
            .unwrap_err();
        assert!(matches!(err, ReplayError::Open { .. }));
    }
}
