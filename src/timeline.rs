use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::match_data::{MatchRecord, Side, TeamEvent};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphShape {
    Circle,
    Diamond,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub time: i32,
    pub side: Side,
    pub kind: String,
    pub player: String,
}
impl TimelineEvent {
    /// Goals flagged `out` are marked with a diamond; everything else with a circle.
    pub fn shape(&self) -> GlyphShape {
        if self.kind == "out" {
            GlyphShape::Diamond
        } else {
            GlyphShape::Circle
        }
    }

    /// The minute as captioned on the poster, e.g. `23"`.
    pub fn minute_label(&self) -> String {
        format!("{}\"", self.time)
    }
}

/// Keeps only the tokens written entirely in upper case, i.e. the surname in `Hannah WILKINSON`.
pub fn uppercase_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| *word == word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_goal(event: &TeamEvent) -> bool {
    event.type_of_event.contains("goal")
}

fn side_goals(record: &MatchRecord, side: Side) -> impl Iterator<Item = TimelineEvent> + '_ {
    record
        .events(&side)
        .iter()
        .filter(|event| is_goal(event))
        .filter_map(move |event| match event.time {
            Some(time) => Some(TimelineEvent {
                time,
                side,
                kind: event.position.clone(),
                player: uppercase_words(&event.player),
            }),
            None => {
                warn!("match {}: skipping {side:?} goal by '{}' without a minute", record.id, event.player);
                None
            }
        })
}

/// Merges both sides' goals into one timeline ordered by minute. Goals in the same minute keep
/// home before away.
pub fn build(record: &MatchRecord) -> Vec<TimelineEvent> {
    let mut timeline = side_goals(record, Side::Home)
        .chain(side_goals(record, Side::Away))
        .collect::<Vec<_>>();
    timeline.sort_by_key(|event| event.time);
    timeline
}
