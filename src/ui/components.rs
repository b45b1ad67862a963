use console::Term;
use std::io;

use crate::core::DisplayState;
use crate::ui::ThemeManager;

/// Row of the moves/timer line in a drawn frame: title, separator, then HUD.
pub const HUD_ROW: usize = 2;

/// Formats and writes frames to the terminal.
pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    columns: usize,
    clear_screen: bool,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, columns: usize, clear_screen: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme_manager,
            columns: columns.max(1),
            clear_screen,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn get_available_themes(&self) -> Vec<String> {
        self.theme_manager.list_themes()
    }

    pub fn title_lines(&self) -> Vec<String> {
        let title = self.theme_manager.apply_style("🧠 Memory Match", "title");
        vec![title, self.separator()]
    }

    pub fn hud_line(&self, moves: u32, timer: &str) -> String {
        self.theme_manager
            .apply_style(&format!("Moves: {:<4} Time: {}", moves, timer), "hud")
    }

    pub fn tile_cell(&self, position: usize, display: &DisplayState) -> String {
        match display {
            DisplayState::HiddenFace => self
                .theme_manager
                .apply_style(&format!("[{:>3} ]", position + 1), "tile_hidden"),
            DisplayState::Revealed(symbol) => self
                .theme_manager
                .apply_style(&format!("[ {} ]", symbol), "tile_revealed"),
            DisplayState::Matched(symbol) => self
                .theme_manager
                .apply_style(&format!("[✓{} ]", symbol), "tile_matched"),
        }
    }

    pub fn board_lines(&self, tiles: &[DisplayState]) -> Vec<String> {
        tiles
            .chunks(self.columns)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(offset, display)| self.tile_cell(row * self.columns + offset, display))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    pub fn victory_lines(&self, moves: u32, time: &str) -> Vec<String> {
        vec![
            self.separator(),
            self.theme_manager
                .apply_style("🎉 You found every pair!", "victory"),
            self.theme_manager.apply_style(
                &format!("   Moves: {}   Time: {}", moves, time),
                "victory",
            ),
            self.theme_manager
                .apply_style("   Type 'p' to play again or 'q' to quit.", "hint"),
        ]
    }

    pub fn prompt_line(&self) -> String {
        self.theme_manager.apply_style(
            "Pick a tile (number or a1-style coordinate), 'r' restart, 'h' help, 'q' quit",
            "hint",
        )
    }

    pub fn help_lines(&self) -> Vec<String> {
        [
            "Reveal two tiles per turn. Matching pairs stay face up;",
            "mismatched tiles flip back after a second.",
            "",
            "  12      select tile number 12",
            "  b3      select column b, row 3",
            "  r       restart with a new board",
            "  p       play again",
            "  q       quit",
            "",
            "Matched tiles are marked with ✓.",
        ]
        .iter()
        .map(|line| self.theme_manager.apply_style(line, "info"))
        .collect()
    }

    pub fn error_line(&self, message: &str) -> String {
        self.theme_manager
            .apply_style(&format!("❌ {}", message), "error")
    }

    fn separator(&self) -> String {
        let width = self.columns * 7;
        self.theme_manager.apply_style(&"━".repeat(width), "separator")
    }

    /// Replaces whatever is on screen with `lines`.
    pub fn draw(&self, lines: &[String]) -> io::Result<()> {
        if self.clear_screen {
            self.term.clear_screen()?;
        }
        for line in lines {
            self.term.write_line(line)?;
        }
        Ok(())
    }

    /// Rewrites only the HUD row, leaving the cursor where the player is
    /// typing. Needs a cleared screen to know where the HUD is.
    pub fn redraw_hud(&self, moves: u32, timer: &str) -> io::Result<bool> {
        if !self.clear_screen || !self.term.is_term() {
            return Ok(false);
        }

        self.term.write_str("\x1b7")?;
        self.term.move_cursor_to(0, HUD_ROW)?;
        self.term.clear_line()?;
        self.term.write_str(&self.hud_line(moves, timer))?;
        self.term.write_str("\x1b8")?;
        Ok(true)
    }
}
