pub mod config;
pub mod core;
pub mod runtime;
pub mod ui;
pub mod utils;

pub use crate::config::{Config, SymbolSet, PAIR_COUNT};
pub use crate::core::{GameEngine, GameRng, SelectionOutcome, SessionPhase, Symbol, TileId};
pub use crate::ui::GameInterface;
pub use crate::utils::{GameError, GameResult};

// Re-export commonly used types
pub type Result<T> = anyhow::Result<T>;

// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
