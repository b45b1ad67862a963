pub mod board;
pub mod collaborators;
pub mod engine;
pub mod events;
pub mod recording;
pub mod rng;
pub mod session;
pub mod tasks;
pub mod tile;

pub use board::Board;
pub use collaborators::{Clock, Renderer, Scheduler};
pub use engine::{GameEngine, IllegalSelection, SelectionOutcome};
pub use events::{EventLogger, GameEvent, GameEventHandler, GameEventType};
pub use rng::GameRng;
pub use session::{format_elapsed, SessionPhase, SessionState, TurnBuffer};
pub use tasks::{ScheduledTask, TaskKind, MISMATCH_REVERT_DELAY, VICTORY_PRESENTATION_DELAY};
pub use tile::{DisplayState, Symbol, Tile, TileId, TileState, TileView};
