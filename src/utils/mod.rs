pub mod errors;
pub mod logging;

pub use errors::{GameError, GameResult};
pub use logging::init_logging;
