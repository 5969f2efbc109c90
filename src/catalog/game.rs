use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type GameId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReleaseStatus {
    Released,
    Other(String),
}

impl ReleaseStatus {
    pub const RELEASED: &'static str = "Released";

    pub fn is_released(&self) -> bool {
        matches!(self, Self::Released)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Released => Self::RELEASED,
            Self::Other(status) => status.as_str(),
        }
    }
}

impl From<String> for ReleaseStatus {
    fn from(value: String) -> Self {
        if value == Self::RELEASED {
            Self::Released
        } else {
            Self::Other(value)
        }
    }
}

impl From<ReleaseStatus> for String {
    fn from(value: ReleaseStatus) -> Self {
        match value {
            ReleaseStatus::Released => ReleaseStatus::RELEASED.to_owned(),
            ReleaseStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthCategory {
    Short,
    Medium,
    Long,
}

impl LengthCategory {
    pub const SHORT_MAX_HOURS: f32 = 5.0;
    pub const LONG_MIN_HOURS: f32 = 12.0;

    pub fn for_hours(hours: f32) -> Self {
        if hours <= Self::SHORT_MAX_HOURS {
            Self::Short
        } else if hours >= Self::LONG_MIN_HOURS {
            Self::Long
        } else {
            Self::Medium
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }
}

/// One catalog entry. Field names follow the camelCase JSON layout of the
/// catalog and export files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub length: f32,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_status: Option<ReleaseStatus>,
    #[serde(default)]
    pub demo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansions: Option<String>,
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub first_person_motion: bool,
    #[serde(default)]
    pub action_pressure: bool,
    #[serde(default)]
    pub audio_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_jam: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gog: Option<String>,
    /// Keys the map does not interpret, written back unchanged on export.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Game {
    pub fn is_released(&self) -> bool {
        self.release_status
            .as_ref()
            .is_some_and(ReleaseStatus::is_released)
    }

    pub fn length_category(&self) -> LengthCategory {
        LengthCategory::for_hours(self.length)
    }

    /// Cover art location, if the record has a usable one.
    pub fn image_uri(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }

    /// Store links that are present, labelled for display.
    pub fn store_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Steam", self.steam.as_deref()),
            ("Itch.io", self.itch.as_deref()),
            ("GOG", self.gog.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.filter(|url| !url.is_empty()).map(|url| (name, url)))
        .collect()
    }
}

#[cfg(test)]
pub(crate) fn test_game(id: GameId, title: &str) -> Game {
    Game {
        id,
        title: title.to_owned(),
        image: None,
        length: 4.0,
        year: 2020,
        description: String::new(),
        x: 0.0,
        y: 0.0,
        release_status: Some(ReleaseStatus::Released),
        demo: false,
        expansions: None,
        free: false,
        first_person_motion: false,
        action_pressure: false,
        audio_required: false,
        designer: None,
        studio: None,
        game_jam: None,
        steam: None,
        itch: None,
        gog: None,
        extra: Map::new(),
    }
}
