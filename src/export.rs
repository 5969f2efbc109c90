use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::catalog::Game;
use crate::positions::PositionMap;

pub const EXPORT_FILE_NAME: &str = "updated_games.json";

/// Catalog records with their stored coordinates replaced by live positions.
pub fn merge_positions(games: &[Game], positions: &PositionMap) -> Vec<Game> {
    games
        .iter()
        .map(|game| {
            let position = positions.resolve(game);
            Game {
                x: position.x,
                y: position.y,
                ..game.clone()
            }
        })
        .collect()
}

pub fn render_export(games: &[Game], positions: &PositionMap) -> Result<String> {
    serde_json::to_string_pretty(&merge_positions(games, positions))
        .context("failed to serialize layout export")
}

/// Writes the merged catalog to `dir/updated_games.json`, replacing any
/// previous export.
pub fn write_export(dir: &Path, games: &[Game], positions: &PositionMap) -> Result<PathBuf> {
    let json = render_export(games, positions)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), games = games.len(), "layout exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;
    use tempfile::TempDir;

    use super::*;
    use crate::catalog::test_game;

    fn sample() -> Vec<Game> {
        let mut first = test_game(1, "first");
        first.x = 10.0;
        first.y = 20.0;
        let mut second = test_game(2, "second");
        second.x = 30.0;
        second.y = 40.0;
        second.designer = Some("Someone".to_owned());
        vec![first, second]
    }

    #[test]
    fn merged_records_carry_live_positions() {
        let games = sample();
        let mut positions = PositionMap::from_games(&games);
        positions.set(2, vec2(300.5, -12.0));

        let merged = merge_positions(&games, &positions);
        assert_eq!(merged.len(), 2);
        assert_eq!((merged[0].x, merged[0].y), (10.0, 20.0));
        assert_eq!((merged[1].x, merged[1].y), (300.5, -12.0));
        assert_eq!(merged[1].designer.as_deref(), Some("Someone"));
        assert_eq!((games[1].x, games[1].y), (30.0, 40.0));
    }

    #[test]
    fn export_file_round_trips_through_the_catalog_format() {
        let temp = TempDir::new().unwrap();
        let games = sample();
        let mut positions = PositionMap::from_games(&games);
        positions.set(1, vec2(-5.0, 15.0));

        let path = write_export(temp.path(), &games, &positions).unwrap();
        assert_eq!(path.file_name().and_then(|name| name.to_str()), Some(EXPORT_FILE_NAME));

        let raw = fs::read_to_string(&path).unwrap();
        let exported: Vec<Game> = serde_json::from_str(&raw).unwrap();
        assert_eq!(exported.len(), games.len());
        assert_eq!((exported[0].x, exported[0].y), (-5.0, 15.0));
        assert_eq!(exported[0].title, "first");
        assert!(raw.contains("\"releaseStatus\": \"Released\""));
    }

    #[test]
    fn export_keeps_keys_the_map_does_not_model() {
        let games: Vec<Game> = serde_json::from_str(
            r#"[{ "id": 1, "title": "Annotated", "x": 5, "y": 6, "notes": "keep me", "tags": ["x"] }]"#,
        )
        .unwrap();
        let mut positions = PositionMap::from_games(&games);
        positions.set(1, vec2(70.0, 80.0));

        let out = render_export(&games, &positions).unwrap();
        let exported: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(exported[0]["notes"], "keep me");
        assert_eq!(exported[0]["tags"], serde_json::json!(["x"]));
        assert_eq!(exported[0]["x"], 70.0);
        assert_eq!(exported[0]["y"], 80.0);
        assert!(exported[0].get("image").is_none());
    }

    #[test]
    fn export_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("layouts").join("latest");
        let games = sample();

        let path = write_export(&nested, &games, &PositionMap::from_games(&games)).unwrap();
        assert!(path.exists());
    }
}
