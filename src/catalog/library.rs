use std::collections::HashMap;

use anyhow::{Result, bail};

use super::game::{Game, GameId};

/// Ordered, read-mostly list of games. Ids are unique.
#[derive(Clone, Debug)]
pub struct Catalog {
    games: Vec<Game>,
    index_by_id: HashMap<GameId, usize>,
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Result<Self> {
        let mut index_by_id = HashMap::with_capacity(games.len());
        for (index, game) in games.iter().enumerate() {
            if let Some(previous) = index_by_id.insert(game.id, index) {
                bail!(
                    "duplicate game id {} (\"{}\" at index {previous}, \"{}\" at index {index})",
                    game.id,
                    games[previous].title,
                    game.title
                );
            }
        }

        Ok(Self { games, index_by_id })
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.index_by_id
            .get(&id)
            .and_then(|&index| self.games.get(index))
    }
}
