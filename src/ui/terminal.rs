use tracing::warn;

use crate::core::{DisplayState, Renderer, TileId, TileView};
use crate::ui::Display;

/// What the terminal currently shows. Rebuilt from engine notifications only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub tiles: Vec<DisplayState>,
    pub moves: u32,
    pub timer: String,
    pub victory: Option<(u32, String)>,
    pub status: Option<String>,
}

/// [`Renderer`] that draws the board to stdout.
pub struct TerminalRenderer {
    display: Display,
    screen: Screen,
    help_visible: bool,
}

impl TerminalRenderer {
    pub fn new(display: Display) -> Self {
        Self {
            display,
            screen: Screen {
                timer: "00:00".to_string(),
                ..Screen::default()
            },
            help_visible: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn columns(&self) -> usize {
        self.display.columns()
    }

    pub fn tile_count(&self) -> usize {
        self.screen.tiles.len()
    }

    /// Shows `message` under the board until the next status change.
    pub fn set_status(&mut self, message: Option<String>) {
        self.screen.status = message;
        self.redraw();
    }

    pub fn show_error(&mut self, message: &str) {
        let line = self.display.error_line(message);
        self.set_status(Some(line));
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.redraw();
    }

    pub fn frame(&self) -> Vec<String> {
        let mut lines = self.display.title_lines();
        lines.push(self.display.hud_line(self.screen.moves, &self.screen.timer));
        lines.push(String::new());
        lines.extend(self.display.board_lines(&self.screen.tiles));
        lines.push(String::new());

        if let Some((moves, time)) = &self.screen.victory {
            lines.extend(self.display.victory_lines(*moves, time));
            lines.push(String::new());
        }
        if self.help_visible {
            lines.extend(self.display.help_lines());
            lines.push(String::new());
        }
        if let Some(status) = &self.screen.status {
            lines.push(status.clone());
        }
        lines.push(self.display.prompt_line());
        lines
    }

    pub fn redraw(&self) {
        if let Err(e) = self.display.draw(&self.frame()) {
            warn!("Failed to draw board: {}", e);
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render_board(&mut self, tiles: &[TileView]) {
        let mut displays = vec![DisplayState::HiddenFace; tiles.len()];
        for view in tiles {
            if let Some(slot) = displays.get_mut(view.position) {
                *slot = view.display.clone();
            }
        }
        self.screen.tiles = displays;
        self.screen.status = None;
        self.redraw();
    }

    fn update_tile(&mut self, position: TileId, display: DisplayState) {
        match self.screen.tiles.get_mut(position) {
            Some(slot) => *slot = display,
            None => {
                warn!("Renderer asked to update unknown tile {}", position);
                return;
            }
        }
        self.redraw();
    }

    fn update_move_count(&mut self, moves: u32) {
        self.screen.moves = moves;
        self.redraw();
    }

    fn update_timer_display(&mut self, text: &str) {
        self.screen.timer = text.to_string();
        if let Err(e) = self.display.redraw_hud(self.screen.moves, &self.screen.timer) {
            warn!("Failed to update timer: {}", e);
        }
    }

    fn show_victory(&mut self, final_moves: u32, final_time: &str) {
        self.screen.victory = Some((final_moves, final_time.to_string()));
        self.redraw();
    }

    fn hide_victory(&mut self) {
        self.screen.victory = None;
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use crate::ui::ThemeManager;
    use pretty_assertions::assert_eq;

    fn renderer() -> TerminalRenderer {
        TerminalRenderer::new(Display::new(ThemeManager::without_colors(), 2, false))
    }

    fn hidden_views(count: usize) -> Vec<TileView> {
        (0..count)
            .map(|position| TileView {
                position,
                display: DisplayState::HiddenFace,
            })
            .collect()
    }

    #[test]
    fn test_render_board_replaces_tiles() {
        let mut renderer = renderer();
        renderer.render_board(&hidden_views(4));

        assert_eq!(renderer.tile_count(), 4);
        let frame = renderer.frame();
        assert!(frame.contains(&"[  1 ] [  2 ]".to_string()));
        assert!(frame.contains(&"[  3 ] [  4 ]".to_string()));
    }

    #[test]
    fn test_updates_track_engine_notifications() {
        let mut renderer = renderer();
        renderer.render_board(&hidden_views(4));
        renderer.update_tile(2, DisplayState::Revealed(Symbol::new("A")));
        renderer.update_move_count(3);
        renderer.update_timer_display("00:07");

        let screen = renderer.screen();
        assert_eq!(screen.tiles[2], DisplayState::Revealed(Symbol::new("A")));
        assert_eq!(screen.moves, 3);
        assert_eq!(screen.timer, "00:07");
        assert!(renderer.frame().contains(&"[ A ] [  4 ]".to_string()));
    }

    #[test]
    fn test_unknown_tile_update_is_ignored() {
        let mut renderer = renderer();
        renderer.render_board(&hidden_views(2));
        renderer.update_tile(5, DisplayState::HiddenFace);
        assert_eq!(renderer.tile_count(), 2);
    }

    #[test]
    fn test_victory_panel_toggles() {
        let mut renderer = renderer();
        renderer.render_board(&hidden_views(2));
        renderer.show_victory(9, "01:30");
        assert_eq!(renderer.screen().victory, Some((9, "01:30".to_string())));
        assert!(renderer
            .frame()
            .iter()
            .any(|line| line.contains("Moves: 9   Time: 01:30")));

        renderer.hide_victory();
        assert_eq!(renderer.screen().victory, None);
    }

    #[test]
    fn test_status_and_help() {
        let mut renderer = renderer();
        renderer.show_error("No tile 'x'");
        assert!(renderer.frame().iter().any(|line| line.contains("No tile 'x'")));

        renderer.toggle_help();
        assert!(renderer.frame().iter().any(|line| line.contains("restart")));

        renderer.render_board(&hidden_views(2));
        assert_eq!(renderer.screen().status, None);
    }
}
