use crate::core::TileId;

/// One line of player input, already checked against the board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Select(TileId),
    Restart,
    PlayAgain,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl InputCommand {
    /// Parses a line typed by the player. Tile numbers are 1-based; a
    /// coordinate like `b3` means column b, row 3. Anything naming a tile
    /// outside `0..tile_count` comes back as `Unknown`.
    pub fn parse(line: &str, tile_count: usize, columns: usize) -> Self {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        match lowered.as_str() {
            "" => return InputCommand::Empty,
            "r" | "restart" => return InputCommand::Restart,
            "p" | "play again" | "again" => return InputCommand::PlayAgain,
            "h" | "help" | "?" => return InputCommand::Help,
            "q" | "quit" | "exit" => return InputCommand::Quit,
            _ => {}
        }

        let position = parse_number(&lowered).or_else(|| parse_coordinate(&lowered, columns));
        match position {
            Some(position) if position < tile_count => InputCommand::Select(position),
            _ => InputCommand::Unknown(trimmed.to_string()),
        }
    }
}

fn parse_number(text: &str) -> Option<TileId> {
    let number: usize = text.parse().ok()?;
    number.checked_sub(1)
}

fn parse_coordinate(text: &str, columns: usize) -> Option<TileId> {
    let mut chars = text.chars();
    let column = chars.next()?;
    if !column.is_ascii_lowercase() {
        return None;
    }
    let column = (column as u8 - b'a') as usize;
    if column >= columns {
        return None;
    }

    let row: usize = chars.as_str().parse().ok()?;
    let row = row.checked_sub(1)?;
    row.checked_mul(columns)?.checked_add(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(InputCommand::parse("1", 16, 4), InputCommand::Select(0));
        assert_eq!(InputCommand::parse(" 16 \n", 16, 4), InputCommand::Select(15));
        assert_eq!(
            InputCommand::parse("0", 16, 4),
            InputCommand::Unknown("0".to_string())
        );
        assert_eq!(
            InputCommand::parse("17", 16, 4),
            InputCommand::Unknown("17".to_string())
        );
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(InputCommand::parse("a1", 16, 4), InputCommand::Select(0));
        assert_eq!(InputCommand::parse("B3", 16, 4), InputCommand::Select(9));
        assert_eq!(InputCommand::parse("d4", 16, 4), InputCommand::Select(15));
        assert_eq!(
            InputCommand::parse("e1", 16, 4),
            InputCommand::Unknown("e1".to_string())
        );
        assert_eq!(
            InputCommand::parse("a5", 16, 4),
            InputCommand::Unknown("a5".to_string())
        );
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!(InputCommand::parse("r", 16, 4), InputCommand::Restart);
        assert_eq!(InputCommand::parse("Play Again", 16, 4), InputCommand::PlayAgain);
        assert_eq!(InputCommand::parse("?", 16, 4), InputCommand::Help);
        assert_eq!(InputCommand::parse("QUIT", 16, 4), InputCommand::Quit);
        assert_eq!(InputCommand::parse("   ", 16, 4), InputCommand::Empty);
        assert_eq!(
            InputCommand::parse("flip", 16, 4),
            InputCommand::Unknown("flip".to_string())
        );
    }

    #[test]
    fn test_nothing_selects_on_an_empty_board() {
        assert_eq!(
            InputCommand::parse("1", 0, 4),
            InputCommand::Unknown("1".to_string())
        );
    }
}
