use std::collections::{HashMap, HashSet};

use crate::core::{GameRng, Symbol, Tile, TileId, TileView};
use crate::utils::{GameError, GameResult};

/// Ordered tiles making up one dealt game. Every symbol appears exactly twice.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Deals two tiles per symbol and shuffles them.
    pub fn deal(symbols: &[Symbol], rng: &mut GameRng) -> GameResult<Self> {
        validate_symbols(symbols)?;

        let mut tiles: Vec<Tile> = symbols
            .iter()
            .flat_map(|symbol| [Tile::new(symbol.clone()), Tile::new(symbol.clone())])
            .collect();
        shuffle(&mut tiles, rng);

        let board = Self { tiles };
        debug_assert!(board.has_valid_pairs());
        Ok(board)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn get(&self, position: TileId) -> Option<&Tile> {
        self.tiles.get(position)
    }

    pub fn get_mut(&mut self, position: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(position)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn views(&self) -> Vec<TileView> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(position, tile)| TileView {
                position,
                display: tile.display_state(),
            })
            .collect()
    }

    pub fn positions_of(&self, symbol: &Symbol) -> Vec<TileId> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| &tile.symbol == symbol)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn is_fully_matched(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(Tile::is_matched)
    }

    /// True when every symbol on the board is carried by exactly two tiles.
    pub fn has_valid_pairs(&self) -> bool {
        let mut counts: HashMap<&Symbol, usize> = HashMap::new();
        for tile in &self.tiles {
            *counts.entry(&tile.symbol).or_default() += 1;
        }
        counts.values().all(|&count| count == 2)
    }
}

/// Rejects empty symbol lists and duplicated symbols.
pub fn validate_symbols(symbols: &[Symbol]) -> GameResult<()> {
    if symbols.is_empty() {
        return Err(GameError::invalid_deck("at least one symbol is required"));
    }

    let mut seen = HashSet::new();
    for symbol in symbols {
        if symbol.as_str().is_empty() {
            return Err(GameError::invalid_deck("symbols cannot be empty"));
        }
        if !seen.insert(symbol) {
            return Err(GameError::invalid_deck(format!(
                "symbol '{}' appears more than once",
                symbol
            )));
        }
    }

    Ok(())
}

/// Fisher–Yates: walk from the back, swapping each slot with a uniformly
/// chosen slot at or before it.
pub fn shuffle<T>(items: &mut [T], rng: &mut GameRng) {
    for i in (1..items.len()).rev() {
        let j = rng.index_inclusive(i);
        items.swap(i, j);
    }
}
