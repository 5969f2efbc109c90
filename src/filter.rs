use std::collections::BTreeMap;

use crate::catalog::Game;
use crate::util::yes_no;

pub const ALL: &str = "All";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    ReleaseStatus,
    Demo,
    Free,
    FirstPersonMotion,
    ActionPressure,
    AudioRequired,
    GameJam,
    LengthCategory,
}

/// The value a record exposes for one filter field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Flag(bool),
    Text(Option<&'a str>),
}

impl FilterField {
    pub const ALL: [Self; 8] = [
        Self::ReleaseStatus,
        Self::Demo,
        Self::Free,
        Self::FirstPersonMotion,
        Self::ActionPressure,
        Self::AudioRequired,
        Self::GameJam,
        Self::LengthCategory,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::ReleaseStatus => "releaseStatus",
            Self::Demo => "demo",
            Self::Free => "free",
            Self::FirstPersonMotion => "firstPersonMotion",
            Self::ActionPressure => "actionPressure",
            Self::AudioRequired => "audioRequired",
            Self::GameJam => "gameJam",
            Self::LengthCategory => "lengthCategory",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ReleaseStatus => "Release Status",
            Self::Demo => "Demo Available",
            Self::Free => "Free",
            Self::FirstPersonMotion => "First Person Motion",
            Self::ActionPressure => "Action / Time Pressure",
            Self::AudioRequired => "Audio Required",
            Self::GameJam => "Game Jam",
            Self::LengthCategory => "Length",
        }
    }

    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            Self::Demo
                | Self::Free
                | Self::FirstPersonMotion
                | Self::ActionPressure
                | Self::AudioRequired
        )
    }

    pub fn value_of(self, game: &Game) -> FieldValue<'_> {
        match self {
            Self::ReleaseStatus => FieldValue::Text(game.release_status.as_ref().map(|s| s.as_str())),
            Self::Demo => FieldValue::Flag(game.demo),
            Self::Free => FieldValue::Flag(game.free),
            Self::FirstPersonMotion => FieldValue::Flag(game.first_person_motion),
            Self::ActionPressure => FieldValue::Flag(game.action_pressure),
            Self::AudioRequired => FieldValue::Flag(game.audio_required),
            Self::GameJam => FieldValue::Text(game.game_jam.as_deref()),
            Self::LengthCategory => FieldValue::Text(Some(game.length_category().label())),
        }
    }

    /// Dropdown entries for this field, excluding the leading "All".
    pub fn options(self, games: &[Game]) -> Vec<String> {
        if self.is_boolean() {
            return vec![yes_no(true).to_owned(), yes_no(false).to_owned()];
        }

        let mut options: Vec<String> = Vec::new();
        for game in games {
            if let FieldValue::Text(Some(value)) = self.value_of(game)
                && !options.iter().any(|existing| existing == value)
            {
                options.push(value.to_owned());
            }
        }
        options
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterChoice {
    #[default]
    All,
    Value(String),
}

impl FilterChoice {
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Value(value) => value,
        }
    }

    fn matches(&self, value: FieldValue<'_>) -> bool {
        let Self::Value(wanted) = self else {
            return true;
        };

        match value {
            FieldValue::Flag(flag) => wanted == yes_no(flag),
            FieldValue::Text(text) => text == Some(wanted.as_str()),
        }
    }
}

impl From<&str> for FilterChoice {
    fn from(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Value(value.to_owned())
        }
    }
}

/// Selected value per filter field. Fields left at "All" do not constrain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    choices: BTreeMap<FilterField, FilterChoice>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            choices: FilterField::ALL
                .into_iter()
                .map(|field| (field, FilterChoice::All))
                .collect(),
        }
    }
}

impl FilterState {
    pub fn choice(&self, field: FilterField) -> &FilterChoice {
        self.choices.get(&field).unwrap_or(&FilterChoice::All)
    }

    pub fn set(&mut self, field: FilterField, choice: FilterChoice) {
        self.choices.insert(field, choice);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_unfiltered(&self) -> bool {
        self.choices
            .values()
            .all(|choice| *choice == FilterChoice::All)
    }

    pub fn matches(&self, game: &Game) -> bool {
        self.choices
            .iter()
            .all(|(field, choice)| choice.matches(field.value_of(game)))
    }

    /// Stable filter over `games`: survivors keep catalog order.
    pub fn apply<'a>(&self, games: &'a [Game]) -> Vec<&'a Game> {
        games.iter().filter(|game| self.matches(game)).collect()
    }
}
