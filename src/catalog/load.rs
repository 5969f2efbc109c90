use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::library::Catalog;
use super::parse::parse_catalog;

const BUNDLED_CATALOG: &str = include_str!("../../data/games.json");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled catalog"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    let games = match source {
        CatalogSource::Bundled => {
            parse_catalog(BUNDLED_CATALOG).context("failed to parse bundled catalog")?
        }
        CatalogSource::File(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            parse_catalog(&raw)
                .with_context(|| format!("failed to parse catalog {}", path.display()))?
        }
    };

    let catalog = Catalog::new(games).with_context(|| format!("invalid catalog from {source}"))?;
    tracing::info!(games = catalog.len(), %source, "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = load_catalog(&CatalogSource::Bundled).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get(201801).is_some());
    }

    #[test]
    fn loads_catalog_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("games.json");
        fs::write(
            &path,
            r#"[{ "id": 1, "title": "Alpha", "x": 5, "y": 6 }, { "id": 2, "title": "Beta" }]"#,
        )
        .unwrap();

        let catalog = load_catalog(&CatalogSource::File(path)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|game| game.y), Some(6.0));
    }

    #[test]
    fn missing_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.json");

        let error = load_catalog(&CatalogSource::File(path)).unwrap_err();
        assert!(format!("{error:#}").contains("absent.json"));
    }

    #[test]
    fn duplicate_ids_in_file_fail_to_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dupes.json");
        fs::write(&path, r#"[{ "id": 3, "title": "A" }, { "id": 3, "title": "B" }]"#).unwrap();

        let error = load_catalog(&CatalogSource::File(path)).unwrap_err();
        assert!(format!("{error:#}").contains("duplicate game id 3"));
    }
}
