mod game;
mod library;
mod load;
mod parse;

pub use game::{Game, GameId};
pub use library::Catalog;
pub use load::{CatalogSource, load_catalog};

#[cfg(test)]
pub(crate) use game::{ReleaseStatus, test_game};
