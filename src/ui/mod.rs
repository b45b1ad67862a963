pub mod components;
pub mod input;
pub mod interface;
pub mod terminal;
pub mod theme;

pub use components::*;
pub use input::InputCommand;
pub use interface::{GameInterface, TerminalEngine};
pub use terminal::{Screen, TerminalRenderer};
pub use theme::{ColorConfig, Theme, ThemeManager};
