use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, info};

use crate::core::board::validate_symbols;
use crate::core::{
    Board, Clock, DisplayState, EventLogger, GameEvent, GameEventHandler, GameRng, Renderer,
    ScheduledTask, Scheduler, SessionPhase, SessionState, Symbol, TaskKind, TileId, TileState,
};
use crate::utils::{GameError, GameResult};

/// Why a selection was dropped without touching the board. These are expected
/// player actions, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalSelection {
    InputLocked,
    AlreadyRevealed,
    AlreadyMatched,
}

impl fmt::Display for IllegalSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalSelection::InputLocked => f.write_str("input is locked"),
            IllegalSelection::AlreadyRevealed => f.write_str("tile is already revealed"),
            IllegalSelection::AlreadyMatched => f.write_str("tile is already matched"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Ignored(IllegalSelection),
    /// First tile of a turn is face up.
    Revealed,
    Matched { pair: [TileId; 2], finished: bool },
    Mismatched { pair: [TileId; 2] },
}

/// Owns the board and session, and resolves turns.
///
/// Everything is synchronous: the host delivers one event at a time
/// (selection, clock tick, due task) and the engine reacts before returning.
pub struct GameEngine<R, C, S> {
    renderer: R,
    clock: C,
    scheduler: S,
    symbols: Vec<Symbol>,
    rng: GameRng,
    board: Board,
    session: SessionState,
    generation: u64,
    event_handler: EventLogger,
}

impl<R: Renderer, C: Clock, S: Scheduler> GameEngine<R, C, S> {
    pub fn new(
        renderer: R,
        clock: C,
        scheduler: S,
        symbols: Vec<Symbol>,
        rng: GameRng,
    ) -> GameResult<Self> {
        validate_symbols(&symbols)?;

        Ok(Self {
            renderer,
            clock,
            scheduler,
            symbols,
            rng,
            board: Board::default(),
            session: SessionState::idle(),
            generation: 0,
            event_handler: EventLogger::default(),
        })
    }

    /// Deals a fresh board and starts a new session. Valid from any phase;
    /// tasks scheduled by earlier sessions become stale.
    pub fn restart(&mut self) -> GameResult<()> {
        let board = Board::deal(&self.symbols, &mut self.rng)?;

        self.generation += 1;
        self.board = board;
        self.session = SessionState::running(self.generation);

        info!(
            "Starting session {} (generation {}, {} pairs, seed {})",
            self.session.id,
            self.generation,
            self.board.pair_count(),
            self.rng.seed()
        );

        self.renderer.hide_victory();
        self.renderer.update_move_count(0);
        self.renderer.update_timer_display(&self.session.elapsed_formatted());
        self.clock.stop();
        self.clock.start();
        self.renderer.render_board(&self.board.views());

        self.emit_event(GameEvent::game_started(
            self.session.id,
            self.generation,
            self.rng.seed(),
            self.board.len(),
        ));

        Ok(())
    }

    pub fn handle_selection(&mut self, position: TileId) -> GameResult<SelectionOutcome> {
        let tile_count = self.board.len();
        let Some((state, symbol)) = self
            .board
            .get(position)
            .map(|tile| (tile.state, tile.symbol.clone()))
        else {
            error!(
                "Selection of tile {} on a board of {} tiles",
                position, tile_count
            );
            return Err(GameError::invalid_tile(position, tile_count));
        };

        let refusal = if self.session.input_locked {
            Some(IllegalSelection::InputLocked)
        } else {
            match state {
                TileState::Hidden => None,
                TileState::Revealed => Some(IllegalSelection::AlreadyRevealed),
                TileState::Matched => Some(IllegalSelection::AlreadyMatched),
            }
        };
        if let Some(reason) = refusal {
            debug!("Ignoring selection of tile {}: {}", position, reason);
            self.emit_event(GameEvent::selection_ignored(position, reason));
            return Ok(SelectionOutcome::Ignored(reason));
        }

        if let Some(tile) = self.board.get_mut(position) {
            tile.reveal();
        }
        self.renderer
            .update_tile(position, DisplayState::Revealed(symbol.clone()));
        self.emit_event(GameEvent::tile_revealed(position, &symbol));
        debug!("Revealed tile {} ({})", position, symbol);

        let Some(pair) = self.session.turn.push(position) else {
            return Ok(SelectionOutcome::Revealed);
        };

        self.session.move_count += 1;
        self.renderer.update_move_count(self.session.move_count);

        Ok(self.resolve_pair(pair))
    }

    fn resolve_pair(&mut self, pair: [TileId; 2]) -> SelectionOutcome {
        let [first, second] = pair;
        let first_symbol = self.board.get(first).map(|tile| tile.symbol.clone());
        let second_symbol = self.board.get(second).map(|tile| tile.symbol.clone());

        match (first_symbol, second_symbol) {
            (Some(a), Some(b)) if a == b => {
                for position in pair {
                    if let Some(tile) = self.board.get_mut(position) {
                        tile.mark_matched();
                        self.renderer.update_tile(position, tile.display_state());
                    }
                }
                self.session.turn.clear();
                self.session.matched_pair_count += 1;
                self.session.input_locked = false;

                debug!(
                    "Matched {} at {:?} ({}/{} pairs)",
                    a,
                    pair,
                    self.session.matched_pair_count,
                    self.board.pair_count()
                );
                self.emit_event(GameEvent::pair_matched(pair, &a, self.session.move_count));

                let finished = self.board.is_fully_matched();
                if finished {
                    self.finish();
                }
                SelectionOutcome::Matched { pair, finished }
            }
            _ => {
                self.session.input_locked = true;
                debug!("Mismatch at {:?}, locking input", pair);
                self.emit_event(GameEvent::pair_mismatched(pair, self.session.move_count));
                self.scheduler
                    .schedule(ScheduledTask::revert_mismatch(self.generation, pair));
                SelectionOutcome::Mismatched { pair }
            }
        }
    }

    fn finish(&mut self) {
        if self.session.phase != SessionPhase::Running {
            return;
        }

        self.session.phase = SessionPhase::Won;
        self.clock.stop();

        let moves = self.session.move_count;
        let time = self.session.elapsed_formatted();
        info!("Session {} won in {} moves ({})", self.session.id, moves, time);
        self.emit_event(GameEvent::game_won(moves, &time));
        self.scheduler
            .schedule(ScheduledTask::present_victory(self.generation, moves, time));
    }

    /// Advances the session timer by one second. Returns false when the tick
    /// arrived outside a running session and was ignored.
    pub fn tick(&mut self) -> bool {
        if !self.session.is_running() {
            return false;
        }

        self.session.elapsed_seconds += 1;
        self.renderer
            .update_timer_display(&self.session.elapsed_formatted());
        true
    }

    /// Runs a task handed back by the scheduler. Returns false when the task
    /// belonged to an earlier session and was dropped.
    pub fn run_task(&mut self, task: ScheduledTask) -> bool {
        if task.generation != self.generation {
            debug!(
                "Discarding stale {} task from generation {} (current {})",
                task.name(),
                task.generation,
                self.generation
            );
            self.emit_event(GameEvent::stale_task_discarded(
                task.name(),
                task.generation,
                self.generation,
            ));
            return false;
        }

        match task.kind {
            TaskKind::RevertMismatch { pair } => {
                for position in pair {
                    if let Some(tile) = self.board.get_mut(position) {
                        tile.hide();
                        self.renderer.update_tile(position, tile.display_state());
                    }
                }
                self.session.turn.clear();
                self.session.input_locked = false;
                debug!("Hid tiles {:?}, input unlocked", pair);
                self.emit_event(GameEvent::tiles_hidden(pair));
            }
            TaskKind::PresentVictory { moves, time } => {
                self.renderer.show_victory(moves, &time);
                self.emit_event(GameEvent::victory_presented(moves, &time));
            }
        }

        true
    }

    fn emit_event(&mut self, event: GameEvent) {
        self.event_handler.handle_event(&event);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn events(&self) -> &EventLogger {
        &self.event_handler
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
