use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::TileId;

/// How long a mismatched pair stays face up before flipping back.
pub const MISMATCH_REVERT_DELAY: Duration = Duration::from_millis(1000);

/// Pause between the final match and the victory panel.
pub const VICTORY_PRESENTATION_DELAY: Duration = Duration::from_millis(500);

/// A one-shot callback the engine asks its host to hand back later.
///
/// Tasks are stamped with the session generation that created them; the
/// engine drops any task whose generation is no longer current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub generation: u64,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    RevertMismatch { pair: [TileId; 2] },
    PresentVictory { moves: u32, time: String },
}

impl ScheduledTask {
    pub fn revert_mismatch(generation: u64, pair: [TileId; 2]) -> Self {
        Self {
            generation,
            kind: TaskKind::RevertMismatch { pair },
        }
    }

    pub fn present_victory(generation: u64, moves: u32, time: String) -> Self {
        Self {
            generation,
            kind: TaskKind::PresentVictory { moves, time },
        }
    }

    pub fn delay(&self) -> Duration {
        match self.kind {
            TaskKind::RevertMismatch { .. } => MISMATCH_REVERT_DELAY,
            TaskKind::PresentVictory { .. } => VICTORY_PRESENTATION_DELAY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            TaskKind::RevertMismatch { .. } => "revert_mismatch",
            TaskKind::PresentVictory { .. } => "present_victory",
        }
    }
}
