use anyhow::Result;
use clap::Parser;
use memory_match::config::CliConfig;
use memory_match::utils::init_logging;
use memory_match::{Config, GameInterface, SymbolSet, VERSION};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "memory-match")]
#[command(about = "Flip tiles two at a time and find every pair")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shuffle seed, for replaying a deal
    #[arg(short, long)]
    seed: Option<u64>,

    /// Colour theme (default, dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    /// Symbol set to deal (space, fruit, animals)
    #[arg(long)]
    symbols: Option<SymbolSet>,

    /// Write the session's event history as JSON on exit
    #[arg(long)]
    event_log: Option<PathBuf>,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    init_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(CliConfig {
        log_level: cli.log_level,
        debug: cli.debug,
        theme: cli.theme,
        seed: cli.seed,
        symbol_set: cli.symbols,
    });
    config.validate()?;

    if let Some(path) = cli.init_config {
        config.save_to_file(&path)?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    init_logging(&config.logging)?;
    info!("Starting Memory Match v{}", VERSION);

    let mut game_interface = GameInterface::new(&config)?;
    if let Err(e) = game_interface.run().await {
        error!("Game error: {}", e);
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }

    if let Some(path) = cli.event_log {
        game_interface.export_events(&path)?;
    }

    info!("Game session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["memory-match", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(cli.seed.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_cli_log_level_reaches_config() {
        let cli = Cli::try_parse_from(["memory-match", "--log-level", "trace"]).unwrap();
        let mut config = Config::default();
        config.merge_with_cli(CliConfig {
            log_level: cli.log_level,
            ..CliConfig::default()
        });

        assert_eq!(config.logging.level, "trace");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_game_options() {
        let cli = Cli::try_parse_from([
            "memory-match",
            "--seed",
            "42",
            "--symbols",
            "fruit",
            "--theme",
            "dark",
            "--event-log",
            "events.json",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.symbols, Some(SymbolSet::Fruit));
        assert_eq!(cli.theme.as_deref(), Some("dark"));
        assert_eq!(cli.event_log, Some(PathBuf::from("events.json")));
    }

    #[test]
    fn test_cli_rejects_unknown_symbol_set() {
        assert!(Cli::try_parse_from(["memory-match", "--symbols", "cards"]).is_err());
    }
}
