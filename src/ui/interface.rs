use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::core::{GameEngine, GameRng, SelectionOutcome};
use crate::runtime::{
    event_channel, spawn_stdin_reader, EventReceiver, EventSender, RuntimeEvent, TokioClock,
    TokioScheduler,
};
use crate::ui::{Display, InputCommand, TerminalRenderer, ThemeManager};
use crate::utils::GameResult;

pub type TerminalEngine = GameEngine<TerminalRenderer, TokioClock, TokioScheduler>;

/// Hosts the engine in the terminal: one channel, one loop, one event at a
/// time.
pub struct GameInterface {
    engine: TerminalEngine,
    sender: EventSender,
    receiver: EventReceiver,
    games_won: u32,
}

impl GameInterface {
    pub fn new(config: &Config) -> GameResult<Self> {
        info!("Initializing game interface");

        let mut display = Display::new(
            ThemeManager::new(),
            config.ui.board_columns,
            config.ui.clear_screen,
        );
        if !display.set_theme(&config.ui.theme) {
            let themes = display.get_available_themes().join(", ");
            warn!(
                "Unknown theme '{}', using default (available: {})",
                config.ui.theme, themes
            );
        }

        let (sender, receiver) = event_channel();
        let rng = GameRng::from_optional_seed(config.game.seed);
        info!(
            "Dealing {} symbols with seed {}",
            config.game.symbol_set,
            rng.seed()
        );

        let engine = GameEngine::new(
            TerminalRenderer::new(display),
            TokioClock::new(sender.clone()),
            TokioScheduler::new(sender.clone()),
            config.game.symbol_set.symbols(),
            rng,
        )?;

        Ok(Self {
            engine,
            sender,
            receiver,
            games_won: 0,
        })
    }

    /// Plays until the player quits or stdin closes.
    pub async fn run(&mut self) -> GameResult<()> {
        spawn_stdin_reader(self.sender.clone());
        self.run_loop().await
    }

    /// Deals the first board, then drains events until told to stop.
    pub async fn run_loop(&mut self) -> GameResult<()> {
        info!("Starting game interface");
        self.engine.restart()?;

        while let Some(event) = self.receiver.recv().await {
            if !self.handle_event(event)? {
                break;
            }
        }

        self.engine.scheduler_mut().cancel_all();
        info!("Game session ended ({} games won)", self.games_won);
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<RuntimeEvent> {
        self.receiver.recv().await
    }

    /// Feeds one event to the engine. Returns false when the loop should stop.
    pub fn handle_event(&mut self, event: RuntimeEvent) -> GameResult<bool> {
        match event {
            RuntimeEvent::Input(line) => return self.handle_input(&line),
            RuntimeEvent::InputClosed => {
                info!("Input closed");
                return Ok(false);
            }
            RuntimeEvent::Tick { epoch } => {
                if self.engine.clock().is_current(epoch) {
                    self.engine.tick();
                } else {
                    debug!("Dropping tick from clock epoch {}", epoch);
                }
            }
            RuntimeEvent::TaskDue(task) => {
                self.engine.run_task(task);
            }
        }

        Ok(true)
    }

    fn handle_input(&mut self, line: &str) -> GameResult<bool> {
        let command = InputCommand::parse(
            line,
            self.engine.board().len(),
            self.engine.renderer().columns(),
        );
        debug!("Input {:?} -> {:?}", line, command);

        match command {
            InputCommand::Select(position) => {
                self.engine.renderer_mut().set_status(None);
                match self.engine.handle_selection(position) {
                    Ok(SelectionOutcome::Matched { finished: true, .. }) => {
                        self.games_won += 1;
                    }
                    Ok(_) => {}
                    Err(e) => error!("Selection rejected by engine: {}", e),
                }
            }
            InputCommand::Restart | InputCommand::PlayAgain => self.engine.restart()?,
            InputCommand::Help => self.engine.renderer_mut().toggle_help(),
            InputCommand::Quit => return Ok(false),
            InputCommand::Empty => {}
            InputCommand::Unknown(text) => {
                let message = format!("'{}' is not a tile or command. Type 'h' for help.", text);
                self.engine.renderer_mut().show_error(&message);
            }
        }

        Ok(true)
    }

    pub fn export_events<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let json = self.engine.events().export_events()?;
        std::fs::write(path.as_ref(), json)?;
        info!("Event log written to {}", path.as_ref().display());
        Ok(())
    }

    pub fn engine(&self) -> &TerminalEngine {
        &self.engine
    }

    pub fn games_won(&self) -> u32 {
        self.games_won
    }
}
