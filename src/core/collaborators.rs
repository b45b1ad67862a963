//! Seams between the engine and whatever hosts it.
//!
//! The engine calls out through these traits and never touches a terminal,
//! timer or event loop itself. Implementations hold no authoritative state.

use crate::core::{DisplayState, ScheduledTask, TileId, TileView};

pub trait Renderer {
    fn render_board(&mut self, tiles: &[TileView]);
    fn update_tile(&mut self, position: TileId, display: DisplayState);
    fn update_move_count(&mut self, moves: u32);
    fn update_timer_display(&mut self, text: &str);
    fn show_victory(&mut self, final_moves: u32, final_time: &str);
    fn hide_victory(&mut self);
}

/// A 1 Hz tick source. Ticks are fed back through `GameEngine::tick`.
pub trait Clock {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Runs one-shot delayed work. When `task.delay()` has elapsed the host hands
/// the task back through `GameEngine::run_task`.
pub trait Scheduler {
    fn schedule(&mut self, task: ScheduledTask);
}
