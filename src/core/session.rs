use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Running,
    Won,
}

/// Revealed tiles still waiting for their turn to resolve. Never holds more
/// than two positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnBuffer {
    first: Option<TileId>,
    second: Option<TileId>,
}

impl TurnBuffer {
    /// Appends a position and returns the completed pair once two are held.
    /// Pushing into a full buffer is refused.
    pub fn push(&mut self, position: TileId) -> Option<[TileId; 2]> {
        match (self.first, self.second) {
            (None, _) => {
                self.first = Some(position);
                None
            }
            (Some(first), None) => {
                self.second = Some(position);
                Some([first, position])
            }
            (Some(_), Some(_)) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.first.iter().chain(self.second.iter()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn positions(&self) -> Vec<TileId> {
        self.first.iter().chain(self.second.iter()).copied().collect()
    }

    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}

/// Per-session counters. A new one replaces the old on every restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub id: Uuid,
    pub generation: u64,
    pub phase: SessionPhase,
    pub move_count: u32,
    pub matched_pair_count: usize,
    pub elapsed_seconds: u64,
    pub input_locked: bool,
    pub turn: TurnBuffer,
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    /// The placeholder session held before the first deal.
    pub fn idle() -> Self {
        Self {
            phase: SessionPhase::Idle,
            ..Self::running(0)
        }
    }

    pub fn running(generation: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            generation,
            phase: SessionPhase::Running,
            move_count: 0,
            matched_pair_count: 0,
            elapsed_seconds: 0,
            input_locked: false,
            turn: TurnBuffer::default(),
            started_at: Utc::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn elapsed_formatted(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}

/// `MM:SS`, zero padded. Minutes wrap after 99 so the text stays five
/// characters wide.
pub fn format_elapsed(seconds: u64) -> String {
    let minutes = (seconds / 60) % 100;
    let seconds = seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
