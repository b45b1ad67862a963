use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::core::{IllegalSelection, Symbol, TileId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: Uuid,
    pub event_type: GameEventType,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventType {
    GameStarted,
    TileRevealed,
    PairMatched,
    PairMismatched,
    TilesHidden,
    SelectionIgnored,
    GameWon,
    VictoryPresented,
    StaleTaskDiscarded,
}

impl GameEvent {
    pub fn new(event_type: GameEventType, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    // Convenience constructors for common events
    pub fn game_started(session_id: Uuid, generation: u64, seed: u64, tile_count: usize) -> Self {
        let data = serde_json::json!({
            "session_id": session_id,
            "generation": generation,
            "seed": seed,
            "tile_count": tile_count
        });
        Self::new(GameEventType::GameStarted, data)
    }

    pub fn tile_revealed(position: TileId, symbol: &Symbol) -> Self {
        let data = serde_json::json!({
            "position": position,
            "symbol": symbol.as_str()
        });
        Self::new(GameEventType::TileRevealed, data)
    }

    pub fn pair_matched(pair: [TileId; 2], symbol: &Symbol, move_count: u32) -> Self {
        let data = serde_json::json!({
            "positions": pair,
            "symbol": symbol.as_str(),
            "move_count": move_count
        });
        Self::new(GameEventType::PairMatched, data)
    }

    pub fn pair_mismatched(pair: [TileId; 2], move_count: u32) -> Self {
        let data = serde_json::json!({
            "positions": pair,
            "move_count": move_count
        });
        Self::new(GameEventType::PairMismatched, data)
    }

    pub fn tiles_hidden(pair: [TileId; 2]) -> Self {
        let data = serde_json::json!({ "positions": pair });
        Self::new(GameEventType::TilesHidden, data)
    }

    pub fn selection_ignored(position: TileId, reason: IllegalSelection) -> Self {
        let data = serde_json::json!({
            "position": position,
            "reason": reason
        });
        Self::new(GameEventType::SelectionIgnored, data)
    }

    pub fn game_won(moves: u32, time: &str) -> Self {
        let data = serde_json::json!({
            "moves": moves,
            "time": time
        });
        Self::new(GameEventType::GameWon, data)
    }

    pub fn victory_presented(moves: u32, time: &str) -> Self {
        let data = serde_json::json!({
            "moves": moves,
            "time": time
        });
        Self::new(GameEventType::VictoryPresented, data)
    }

    pub fn stale_task_discarded(task: &str, task_generation: u64, current_generation: u64) -> Self {
        let data = serde_json::json!({
            "task": task,
            "task_generation": task_generation,
            "current_generation": current_generation
        });
        Self::new(GameEventType::StaleTaskDiscarded, data)
    }
}

pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

pub struct EventLogger {
    events: VecDeque<GameEvent>,
    max_events: usize,
}

impl EventLogger {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    pub fn get_events(&self) -> &VecDeque<GameEvent> {
        &self.events
    }

    pub fn get_events_by_type(&self, event_type: &GameEventType) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|event| &event.event_type == event_type)
            .collect()
    }

    pub fn get_recent_events(&self, count: usize) -> Vec<&GameEvent> {
        self.events.iter().rev().take(count).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn export_events(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events)
    }

    pub fn get_event_count(&self) -> usize {
        self.events.len()
    }

    pub fn get_event_count_by_type(&self, event_type: &GameEventType) -> usize {
        self.events
            .iter()
            .filter(|event| &event.event_type == event_type)
            .count()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl GameEventHandler for EventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.push_back(event.clone());

        while self.events.len() > self.max_events {
            self.events.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_event_creation() {
        let session = Uuid::new_v4();
        let event = GameEvent::game_started(session, 3, 42, 16);

        assert_eq!(event.event_type, GameEventType::GameStarted);
        assert_eq!(event.data["generation"], 3);
        assert_eq!(event.data["seed"], 42);
        assert_eq!(event.data["tile_count"], 16);
    }

    #[test]
    fn test_selection_ignored_event() {
        let event = GameEvent::selection_ignored(4, IllegalSelection::InputLocked);
        assert_eq!(event.event_type, GameEventType::SelectionIgnored);
        assert_eq!(event.data["position"], 4);
        assert_eq!(event.data["reason"], "InputLocked");
    }

    #[test]
    fn test_event_logger() {
        let mut logger = EventLogger::new(3);

        logger.handle_event(&GameEvent::game_won(1, "00:01"));
        logger.handle_event(&GameEvent::game_won(2, "00:02"));
        logger.handle_event(&GameEvent::game_won(3, "00:03"));
        assert_eq!(logger.get_event_count(), 3);

        logger.handle_event(&GameEvent::game_won(4, "00:04"));
        assert_eq!(logger.get_event_count(), 3);
        assert_eq!(logger.get_events()[0].data["moves"], 2);
        assert_eq!(logger.get_recent_events(1)[0].data["moves"], 4);
    }

    #[test]
    fn test_full_logger_keeps_newest_in_order() {
        let mut logger = EventLogger::new(2);
        for moves in 1..=50 {
            logger.handle_event(&GameEvent::game_won(moves, "00:00"));
        }

        assert_eq!(logger.get_event_count(), 2);
        let moves: Vec<_> = logger
            .get_events()
            .iter()
            .map(|event| event.data["moves"].clone())
            .collect();
        assert_eq!(moves, vec![serde_json::json!(49), serde_json::json!(50)]);
    }

    #[test]
    fn test_event_filtering() {
        let mut logger = EventLogger::default();

        logger.handle_event(&GameEvent::tile_revealed(0, &Symbol::new("A")));
        logger.handle_event(&GameEvent::tile_revealed(1, &Symbol::new("B")));
        logger.handle_event(&GameEvent::pair_mismatched([0, 1], 1));

        assert_eq!(logger.get_events_by_type(&GameEventType::TileRevealed).len(), 2);
        assert_eq!(logger.get_event_count_by_type(&GameEventType::PairMismatched), 1);
        assert_eq!(logger.get_event_count_by_type(&GameEventType::GameWon), 0);

        logger.clear();
        assert_eq!(logger.get_event_count(), 0);
    }

    #[test]
    fn test_export_events() {
        let mut logger = EventLogger::default();
        logger.handle_event(&GameEvent::tiles_hidden([2, 9]));

        let json = logger.export_events().unwrap();
        let parsed: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].event_type, GameEventType::TilesHidden);
    }
}
