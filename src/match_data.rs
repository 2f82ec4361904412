//! The persisted match record, as written by the ingestion job: a JSON array with one record per
//! match index.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::file::{FileError, ReadJsonFile};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u32,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub stage_name: String,
    #[serde(default)]
    pub datetime: String,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub home_team_statistics: TeamStatistics,
    #[serde(default)]
    pub away_team_statistics: TeamStatistics,
    #[serde(default)]
    pub home_team_events: Vec<TeamEvent>,
    #[serde(default)]
    pub away_team_events: Vec<TeamEvent>,
}
impl MatchRecord {
    /// The title a match is selected by, e.g. `New Zealand x Norway`.
    pub fn title(&self) -> String {
        format!("{} x {}", self.home_team.name, self.away_team.name)
    }

    pub fn team(&self, side: &Side) -> &Team {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn statistics(&self, side: &Side) -> &TeamStatistics {
        match side {
            Side::Home => &self.home_team_statistics,
            Side::Away => &self.away_team_statistics,
        }
    }

    pub fn events(&self, side: &Side) -> &[TeamEvent] {
        match side {
            Side::Home => &self.home_team_events,
            Side::Away => &self.away_team_events,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub goals: u8,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub penalties: Option<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStatistics {
    pub ball_possession: f64,
    pub num_passes: f64,
    pub attempts_on_goal: f64,
    pub distance_walking: f64,
    pub distance_jogging: f64,
    pub distance_speedrunning: f64,
    pub distance_speedsprinting: f64,
    pub distance_covered: f64,
}
impl TeamStatistics {
    /// Total distance covered across the four speed categories.
    pub fn total_distance(&self) -> f64 {
        self.distance_walking
            + self.distance_jogging
            + self.distance_speedrunning
            + self.distance_speedsprinting
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamEvent {
    #[serde(default, deserialize_with = "lenient_text")]
    pub type_of_event: String,
    #[serde(default, deserialize_with = "lenient_minute")]
    pub time: Option<i32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub player: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: String,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Reads a match minute given either as a number or as text with leading digits (`"45'"`,
/// `"90'+3"`). Anything else reads as `None`.
fn lenient_minute<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .and_then(|minute| i32::try_from(minute).ok()),
        Value::String(text) => parse_leading_int(&text),
        _ => None,
    }))
}

/// Reads a text field, treating `null` and non-string values as empty.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(text),
        _ => Ok(String::new()),
    }
}

pub(crate) fn parse_leading_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|minute| sign * minute)
}

pub fn read_matches(path: impl AsRef<Path>) -> Result<Vec<MatchRecord>, FileError> {
    Vec::<MatchRecord>::read_json_file(path)
}

pub fn find_by_index(matches: &[MatchRecord], id: u32) -> Option<&MatchRecord> {
    matches.iter().find(|record| record.id == id)
}

pub fn find_by_title<'a>(matches: &'a [MatchRecord], title: &str) -> Option<&'a MatchRecord> {
    matches.iter().find(|record| record.title() == title)
}
