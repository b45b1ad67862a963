use thiserror::Error;

use crate::core::TileId;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid tile reference: position {position} on a board of {tile_count} tiles")]
    InvalidTileReference { position: TileId, tile_count: usize },

    #[error("Invalid deck: {message}")]
    InvalidDeck { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GameError {
    pub fn invalid_tile(position: TileId, tile_count: usize) -> Self {
        Self::InvalidTileReference {
            position,
            tile_count,
        }
    }

    pub fn invalid_deck<S: Into<String>>(message: S) -> Self {
        Self::InvalidDeck {
            message: message.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tile_error() {
        let error = GameError::invalid_tile(17, 16);
        assert!(matches!(error, GameError::InvalidTileReference { .. }));
        assert_eq!(
            error.to_string(),
            "Invalid tile reference: position 17 on a board of 16 tiles"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = GameError::configuration("bad columns");
        assert!(matches!(error, GameError::Configuration { .. }));
        assert_eq!(error.to_string(), "Configuration error: bad columns");
    }

    #[test]
    fn test_toml_error_conversion() {
        // A bare integer has no table to live in.
        let toml_error = toml::to_string(&7u32).unwrap_err();
        let error: GameError = toml_error.into();
        assert!(matches!(error, GameError::Toml(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: GameError = io.into();
        assert!(matches!(error, GameError::Io(_)));
    }
}
