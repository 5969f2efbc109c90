use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use super::game::Game;

pub(super) fn parse_catalog(raw: &str) -> Result<Vec<Game>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid catalog JSON")?;

    let records = match parsed {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("games") {
            Some(Value::Array(records)) => records,
            Some(_) => return Err(anyhow!("catalog field `games` is not an array")),
            None => return Err(anyhow!("catalog object has no `games` array")),
        },
        _ => return Err(anyhow!("unexpected JSON type for catalog")),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<Game>(record)
                .with_context(|| format!("invalid game record at index {index}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_top_level_array() {
        let games = parse_catalog(r#"[{ "id": 1, "title": "One" }, { "id": 2, "title": "Two" }]"#)
            .unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[1].title, "Two");
    }

    #[test]
    fn accepts_games_wrapper_object() {
        let games = parse_catalog(r#"{ "version": 1, "games": [{ "id": 5, "title": "Five" }] }"#)
            .unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, 5);
    }

    #[test]
    fn reports_index_of_bad_record() {
        let error = parse_catalog(r#"[{ "id": 1, "title": "Ok" }, { "title": "No id" }]"#)
            .unwrap_err();
        assert!(format!("{error:#}").contains("index 1"));
    }

    #[test]
    fn rejects_scalar_documents() {
        assert!(parse_catalog("42").is_err());
        assert!(parse_catalog(r#"{ "games": 3 }"#).is_err());
    }
}
