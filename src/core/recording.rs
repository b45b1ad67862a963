//! In-memory collaborators that record what the engine asked of them.
//!
//! Useful for driving the engine headless: tasks pile up in
//! [`QueuedScheduler`] until the caller decides they are due, and the clock
//! only ticks when told to.

use crate::core::{Clock, DisplayState, Renderer, ScheduledTask, Scheduler, TileId, TileView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Board(Vec<TileView>),
    Tile(TileId, DisplayState),
    MoveCount(u32),
    Timer(String),
    ShowVictory(u32, String),
    HideVictory,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    /// Most recent display state sent for `position`, from either a tile
    /// update or a full-board render.
    pub fn last_tile(&self, position: TileId) -> Option<DisplayState> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Tile(p, display) if *p == position => Some(display.clone()),
            RenderCall::Board(tiles) => tiles
                .iter()
                .find(|view| view.position == position)
                .map(|view| view.display.clone()),
            _ => None,
        })
    }

    pub fn victories(&self) -> Vec<(u32, String)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::ShowVictory(moves, time) => Some((*moves, time.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render_board(&mut self, tiles: &[TileView]) {
        self.calls.push(RenderCall::Board(tiles.to_vec()));
    }

    fn update_tile(&mut self, position: TileId, display: DisplayState) {
        self.calls.push(RenderCall::Tile(position, display));
    }

    fn update_move_count(&mut self, moves: u32) {
        self.calls.push(RenderCall::MoveCount(moves));
    }

    fn update_timer_display(&mut self, text: &str) {
        self.calls.push(RenderCall::Timer(text.to_string()));
    }

    fn show_victory(&mut self, final_moves: u32, final_time: &str) {
        self.calls
            .push(RenderCall::ShowVictory(final_moves, final_time.to_string()));
    }

    fn hide_victory(&mut self) {
        self.calls.push(RenderCall::HideVictory);
    }
}

#[derive(Debug, Default)]
pub struct ManualClock {
    running: bool,
    pub starts: u32,
    pub stops: u32,
}

impl ManualClock {
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Clock for ManualClock {
    fn start(&mut self) {
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }
}

#[derive(Debug, Default)]
pub struct QueuedScheduler {
    pub pending: Vec<ScheduledTask>,
}

impl QueuedScheduler {
    pub fn drain(&mut self) -> Vec<ScheduledTask> {
        std::mem::take(&mut self.pending)
    }
}

impl Scheduler for QueuedScheduler {
    fn schedule(&mut self, task: ScheduledTask) {
        self.pending.push(task);
    }
}
