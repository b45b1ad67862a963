use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::Symbol;
use crate::utils::{GameError, GameResult};

/// Number of symbol pairs on a playable board (16 tiles).
pub const PAIR_COUNT: usize = 8;

/// Prefix for environment overrides, e.g. `MEMORY_MATCH_GAME__SEED=7`.
pub const ENV_PREFIX: &str = "MEMORY_MATCH";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub symbol_set: SymbolSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: String,
    pub board_columns: usize,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSet {
    Space,
    Fruit,
    Animals,
}

impl SymbolSet {
    pub const ALL: [SymbolSet; 3] = [SymbolSet::Space, SymbolSet::Fruit, SymbolSet::Animals];

    pub fn faces(&self) -> [&'static str; PAIR_COUNT] {
        match self {
            SymbolSet::Space => ["🚀", "🪐", "👽", "⭐", "🌙", "☄️", "🛸", "🌌"],
            SymbolSet::Fruit => ["🍎", "🍌", "🍇", "🍒", "🍋", "🍉", "🍓", "🍑"],
            SymbolSet::Animals => ["🐶", "🐱", "🦊", "🐼", "🐸", "🦉", "🐙", "🦀"],
        }
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.faces().into_iter().map(Symbol::new).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            SymbolSet::Space => "space",
            SymbolSet::Fruit => "fruit",
            SymbolSet::Animals => "animals",
        }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolSet {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolSet::ALL
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                GameError::configuration(format!(
                    "Unknown symbol set '{}' (expected space, fruit or animals)",
                    s
                ))
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                symbol_set: SymbolSet::Space,
                seed: None,
            },
            ui: UiConfig {
                theme: "default".to_string(),
                board_columns: 4,
                clear_screen: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                log_file: None,
            },
        }
    }
}

impl Config {
    /// Layers built-in defaults, then the TOML file at `path` (if any), then
    /// `MEMORY_MATCH_*` environment variables.
    pub fn load(path: Option<&Path>) -> GameResult<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> GameResult<Self> {
        let mut builder =
            ::config::Config::builder().add_source(::config::Config::try_from(&Config::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(GameError::configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(
                ::config::File::from(path).format(::config::FileFormat::Toml),
            );
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    GameError::configuration(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let toml_content = toml::to_string_pretty(self)?;

        std::fs::write(path, toml_content)
            .map_err(|e| GameError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(GameError::configuration("Invalid logging level")),
        }

        if !(2..=16).contains(&self.ui.board_columns) {
            return Err(GameError::configuration(
                "Board columns must be between 2 and 16",
            ));
        }
        if self.ui.theme.trim().is_empty() {
            return Err(GameError::configuration("Theme name cannot be empty"));
        }

        Ok(())
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if let Some(log_level) = cli_config.log_level {
            self.logging.level = log_level;
        }
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
        if let Some(theme) = cli_config.theme {
            self.ui.theme = theme;
        }
        if let Some(seed) = cli_config.seed {
            self.game.seed = Some(seed);
        }
        if let Some(symbol_set) = cli_config.symbol_set {
            self.game.symbol_set = symbol_set;
        }
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub log_level: Option<String>,
    pub debug: bool,
    pub theme: Option<String>,
    pub seed: Option<u64>,
    pub symbol_set: Option<SymbolSet>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.game.symbol_set, SymbolSet::Space);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.ui.theme, "default");
        assert_eq!(config.ui.board_columns, 4);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.ui.board_columns = 1;
        assert!(config.validate().is_err());

        config = Config::default();
        config.ui.theme = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_symbol_sets_hold_distinct_pairs() {
        for set in SymbolSet::ALL {
            let symbols = set.symbols();
            assert_eq!(symbols.len(), PAIR_COUNT);
            assert!(crate::core::board::validate_symbols(&symbols).is_ok());
        }
    }

    #[test]
    fn test_symbol_set_parsing() {
        assert_eq!("fruit".parse::<SymbolSet>().unwrap(), SymbolSet::Fruit);
        assert_eq!("ANIMALS".parse::<SymbolSet>().unwrap(), SymbolSet::Animals);
        assert!("cards".parse::<SymbolSet>().is_err());
    }

    #[test]
    fn test_load_defaults_without_file() {
        let config = tokio_test::assert_ok!(Config::load_with_env_prefix(
            None,
            "MEMORY_MATCH_TEST_UNSET"
        ));
        assert_eq!(config.game.symbol_set, SymbolSet::Space);
        assert_eq!(config.ui.board_columns, 4);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("memory.toml");

        let mut original = Config::default();
        original.game.symbol_set = SymbolSet::Fruit;
        original.game.seed = Some(1234);
        original.ui.theme = "dark".to_string();
        original.save_to_file(&config_path).unwrap();

        let loaded =
            Config::load_with_env_prefix(Some(&config_path), "MEMORY_MATCH_TEST_UNSET").unwrap();

        assert_eq!(loaded.game.symbol_set, SymbolSet::Fruit);
        assert_eq!(loaded.game.seed, Some(1234));
        assert_eq!(loaded.ui.theme, "dark");
        assert_eq!(loaded.logging.level, original.logging.level);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        std::fs::write(&config_path, "[ui]\ntheme = \"light\"\n").unwrap();

        let loaded =
            Config::load_with_env_prefix(Some(&config_path), "MEMORY_MATCH_TEST_UNSET").unwrap();
        assert_eq!(loaded.ui.theme, "light");
        assert_eq!(loaded.ui.board_columns, 4);
        assert_eq!(loaded.game.symbol_set, SymbolSet::Space);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(matches!(
            Config::load_with_env_prefix(Some(&missing), "MEMORY_MATCH_TEST_UNSET"),
            Err(GameError::Configuration { .. })
        ));
    }

    #[test]
    fn test_environment_overrides() {
        std::env::set_var("MEMORY_MATCH_TEST_ENV_GAME__SEED", "77");
        std::env::set_var("MEMORY_MATCH_TEST_ENV_UI__THEME", "dark");

        let loaded = Config::load_with_env_prefix(None, "MEMORY_MATCH_TEST_ENV").unwrap();

        std::env::remove_var("MEMORY_MATCH_TEST_ENV_GAME__SEED");
        std::env::remove_var("MEMORY_MATCH_TEST_ENV_UI__THEME");

        assert_eq!(loaded.game.seed, Some(77));
        assert_eq!(loaded.ui.theme, "dark");
    }

    #[test]
    fn test_cli_config_merge() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            debug: true,
            theme: Some("dark".to_string()),
            seed: Some(9),
            symbol_set: Some(SymbolSet::Animals),
            ..Default::default()
        };

        config.merge_with_cli(cli_config);

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.game.seed, Some(9));
        assert_eq!(config.game.symbol_set, SymbolSet::Animals);
    }
}
