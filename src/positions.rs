use std::collections::HashMap;

use eframe::egui::{Vec2, vec2};

use crate::catalog::{Game, GameId};

/// Live node coordinates keyed by game id. Once seeded, entries here take
/// precedence over the coordinates stored on each record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionMap {
    positions: HashMap<GameId, Vec2>,
}

impl PositionMap {
    pub fn from_games(games: &[Game]) -> Self {
        Self {
            positions: games
                .iter()
                .map(|game| (game.id, vec2(game.x, game.y)))
                .collect(),
        }
    }

    pub fn get(&self, id: GameId) -> Option<Vec2> {
        self.positions.get(&id).copied()
    }

    /// Live position for `game`, falling back to its stored coordinates.
    pub fn resolve(&self, game: &Game) -> Vec2 {
        self.get(game.id).unwrap_or_else(|| vec2(game.x, game.y))
    }

    pub fn set(&mut self, id: GameId, position: Vec2) {
        self.positions.insert(id, position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_game;

    #[test]
    fn seeded_from_stored_coordinates() {
        let mut game = test_game(4, "seeded");
        game.x = 120.0;
        game.y = -40.0;

        let positions = PositionMap::from_games(&[game]);
        assert_eq!(positions.get(4), Some(vec2(120.0, -40.0)));
        assert_eq!(positions.get(5), None);
    }

    #[test]
    fn live_entry_wins_over_stored_coordinates() {
        let mut game = test_game(8, "moved");
        game.x = 1.0;
        game.y = 2.0;

        let mut positions = PositionMap::from_games(std::slice::from_ref(&game));
        positions.set(8, vec2(50.0, 60.0));

        assert_eq!(positions.resolve(&game), vec2(50.0, 60.0));
        assert_eq!(game.x, 1.0);
    }

    #[test]
    fn missing_entry_falls_back_to_record() {
        let mut game = test_game(9, "unseeded");
        game.x = 7.0;
        game.y = 9.0;

        let positions = PositionMap::default();
        assert_eq!(positions.resolve(&game), vec2(7.0, 9.0));
    }
}
