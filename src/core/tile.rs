use serde::{Deserialize, Serialize};
use std::fmt;

/// Board position of a tile, `0..N`.
pub type TileId = usize;

/// The face printed on a tile. Two tiles on a board share each symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn new<S: Into<String>>(face: S) -> Self {
        Self(face.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(face: &str) -> Self {
        Self::new(face)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    Hidden,
    Revealed,
    Matched,
}

/// What the renderer should draw for a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    HiddenFace,
    Revealed(Symbol),
    Matched(Symbol),
}

impl DisplayState {
    pub fn is_face_up(&self) -> bool {
        !matches!(self, DisplayState::HiddenFace)
    }
}

/// A positioned display state, the unit of a full-board render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub position: TileId,
    pub display: DisplayState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub symbol: Symbol,
    pub state: TileState,
}

impl Tile {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            state: TileState::Hidden,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.state == TileState::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }

    pub fn reveal(&mut self) {
        if self.state == TileState::Hidden {
            self.state = TileState::Revealed;
        }
    }

    /// Flips a revealed tile back over. Matched tiles stay matched.
    pub fn hide(&mut self) {
        if self.state == TileState::Revealed {
            self.state = TileState::Hidden;
        }
    }

    pub fn mark_matched(&mut self) {
        self.state = TileState::Matched;
    }

    pub fn display_state(&self) -> DisplayState {
        match self.state {
            TileState::Hidden => DisplayState::HiddenFace,
            TileState::Revealed => DisplayState::Revealed(self.symbol.clone()),
            TileState::Matched => DisplayState::Matched(self.symbol.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_lifecycle() {
        let mut tile = Tile::new(Symbol::new("🚀"));
        assert!(tile.is_hidden());
        assert_eq!(tile.display_state(), DisplayState::HiddenFace);

        tile.reveal();
        assert_eq!(tile.state, TileState::Revealed);
        assert_eq!(tile.display_state(), DisplayState::Revealed(Symbol::new("🚀")));

        tile.hide();
        assert!(tile.is_hidden());
    }

    #[test]
    fn test_matched_is_terminal() {
        let mut tile = Tile::new(Symbol::new("A"));
        tile.reveal();
        tile.mark_matched();

        tile.hide();
        tile.reveal();
        assert!(tile.is_matched());
        assert!(tile.display_state().is_face_up());
    }
}
