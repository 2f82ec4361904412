//! Derivation of the poster's intermediate representation from one match record. The IR holds
//! everything the drawing layer needs and nothing that depends on a drawing surface.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

use crate::config::PosterConfig;
use crate::gradient::{generate_stops, GradientStop, InvalidMetric};
use crate::grid::{place_timeline, GoalGridPosition, InvalidCell};
use crate::match_data::{MatchRecord, Side};
use crate::palette::{Palette, Rgb};
use crate::stats::{InvalidCounter, MatchStats, Metric};
use crate::text::TextBlock;
use crate::timeline::{self, TimelineEvent};

#[derive(Debug, Error)]
pub enum PosterError {
    #[error("{0}")]
    InvalidCounter(#[from] InvalidCounter),

    #[error("{0}")]
    InvalidMetric(#[from] InvalidMetric),

    #[error("invalid placement override: {0}")]
    InvalidCell(#[from] InvalidCell),

    #[error("no palette for team code '{0}' and no colour override")]
    UnknownTeamCode(String),

    #[error("unreadable kick-off time '{0}'")]
    InvalidDatetime(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn total(&self) -> u16 {
        self.home as u16 + self.away as u16
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
    pub home: Rgb,
    pub away: Rgb,
    pub background: Rgb,
    /// Marks and text; the inverse of the background.
    pub foreground: Rgb,
}
impl TeamColors {
    pub fn resolve(record: &MatchRecord, config: &PosterConfig) -> Result<Self, PosterError> {
        let shade = |side: Side, overridden: Option<Rgb>| match overridden {
            Some(color) => Ok(color),
            None => {
                let code = &record.team(&side).code;
                Palette::for_code(code)
                    .map(|palette| match side {
                        Side::Home => palette.primary(),
                        Side::Away => palette.secondary(),
                    })
                    .ok_or_else(|| PosterError::UnknownTeamCode(code.clone()))
            }
        };
        let background = config.background();
        Ok(Self {
            home: shade(Side::Home, config.color_overrides.home)?,
            away: shade(Side::Away, config.color_overrides.away)?,
            background,
            foreground: background.inverse(),
        })
    }

    pub fn side(&self, side: Side) -> Rgb {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientBar {
    pub metric: Metric,
    pub inverted: bool,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PosterIr {
    pub match_id: u32,
    pub title: String,
    pub home_code: String,
    pub away_code: String,
    pub score: Score,
    pub stats: MatchStats,
    pub timeline: Vec<TimelineEvent>,
    /// One per timeline event, in the same order.
    pub placements: Vec<GoalGridPosition>,
    pub text: TextBlock,
    pub colors: TeamColors,
    /// One per metric, top to bottom.
    pub bars: Vec<GradientBar>,
}
impl PosterIr {
    /// The file name stem a rendered poster is saved under, e.g. `0_NZLxNOR`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}x{}", self.match_id, self.home_code, self.away_code)
    }

    pub fn goals(&self) -> impl Iterator<Item = (&TimelineEvent, &GoalGridPosition)> {
        self.timeline.iter().zip(self.placements.iter())
    }
}

pub fn derive(record: &MatchRecord, config: &PosterConfig) -> Result<PosterIr, PosterError> {
    let stats = MatchStats::derive(record)?;
    let colors = TeamColors::resolve(record, config)?;
    let text = TextBlock::derive(record)
        .ok_or_else(|| PosterError::InvalidDatetime(record.datetime.clone()))?;

    let timeline = timeline::build(record);
    let overrides = config.overrides()?;
    let placements = place_timeline(record.id, timeline.iter().map(|event| event.time), &overrides);

    let bars = Metric::iter()
        .map(|metric| -> Result<GradientBar, InvalidMetric> {
            let stat = stats.get(metric);
            let inverted = config.invert_gradients && metric.alternates();
            let stops = generate_stops(
                colors.home,
                colors.away,
                stat.home_fraction,
                stat.away_fraction,
                inverted,
                config.gradient_mix,
            )?;
            Ok(GradientBar {
                metric,
                inverted,
                stops,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ir = PosterIr {
        match_id: record.id,
        title: record.title(),
        home_code: record.home_team.code.clone(),
        away_code: record.away_team.code.clone(),
        score: Score {
            home: record.home_team.goals,
            away: record.away_team.goals,
        },
        stats,
        timeline,
        placements,
        text,
        colors,
        bars,
    };
    debug!("derived poster for {}: {} goals", ir.title, ir.timeline.len());
    Ok(ir)
}

#[cfg(test)]
mod tests;
