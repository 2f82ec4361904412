//! Normalisation of head-to-head match statistics into home/away shares.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;
use tracing::debug;

use crate::match_data::{MatchRecord, TeamStatistics};

/// The four statistics rendered as gradient bars, in top-to-bottom order.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[strum(serialize = "Ball possession")]
    BallPossession,
    #[strum(serialize = "Attempts on goal")]
    Attempts,
    #[strum(serialize = "Passes")]
    Passes,
    #[strum(serialize = "Distance covered")]
    Distance,
}
impl Metric {
    pub fn counter(&self, stats: &TeamStatistics) -> f64 {
        match self {
            Metric::BallPossession => stats.ball_possession,
            Metric::Attempts => stats.attempts_on_goal,
            Metric::Passes => stats.num_passes,
            Metric::Distance => stats.total_distance(),
        }
    }

    /// Zero-based bar row.
    pub fn row(&self) -> usize {
        match self {
            Metric::BallPossession => 0,
            Metric::Attempts => 1,
            Metric::Passes => 2,
            Metric::Distance => 3,
        }
    }

    /// Whether the bar is drawn mirrored when gradients are inverted; alternate rows flip.
    pub fn alternates(&self) -> bool {
        self.row() % 2 == 1
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid {metric} counters: home {home}, away {away}")]
pub struct InvalidCounter {
    pub metric: Metric,
    pub home: f64,
    pub away: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatMetric {
    pub total: f64,
    pub home_absolute: f64,
    pub away_absolute: f64,
    pub home_fraction: f64,
    pub away_fraction: f64,
}
impl StatMetric {
    /// Fraction reported for both sides when neither side registered anything.
    pub const EVEN_SPLIT: f64 = 0.5;

    pub fn is_even_split(&self) -> bool {
        self.total == 0.0
    }
}

/// Splits a pair of counters into each side's share of the total. Both fractions are derived
/// from the shared total. A zero total splits evenly.
pub fn normalise(home: f64, away: f64) -> StatMetric {
    let total = home + away;
    let (home_fraction, away_fraction) = if total == 0.0 {
        (StatMetric::EVEN_SPLIT, StatMetric::EVEN_SPLIT)
    } else {
        (home / total, away / total)
    };
    StatMetric {
        total,
        home_absolute: home,
        away_absolute: away,
        home_fraction,
        away_fraction,
    }
}

pub fn normalise_metric(metric: Metric, home: f64, away: f64) -> Result<StatMetric, InvalidCounter> {
    let valid = |counter: f64| counter.is_finite() && counter >= 0.0;
    if !valid(home) || !valid(away) {
        return Err(InvalidCounter { metric, home, away });
    }
    Ok(normalise(home, away))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub ball_possession: StatMetric,
    pub attempts: StatMetric,
    pub passes: StatMetric,
    pub distance: StatMetric,
}
impl MatchStats {
    pub fn derive(record: &MatchRecord) -> Result<Self, InvalidCounter> {
        let home = &record.home_team_statistics;
        let away = &record.away_team_statistics;
        let split = |metric: Metric| normalise_metric(metric, metric.counter(home), metric.counter(away));
        let stats = Self {
            ball_possession: split(Metric::BallPossession)?,
            attempts: split(Metric::Attempts)?,
            passes: split(Metric::Passes)?,
            distance: split(Metric::Distance)?,
        };
        debug!("match {} stats: {stats:?}", record.id);
        Ok(stats)
    }

    pub fn get(&self, metric: Metric) -> &StatMetric {
        match metric {
            Metric::BallPossession => &self.ball_possession,
            Metric::Attempts => &self.attempts,
            Metric::Passes => &self.passes,
            Metric::Distance => &self.distance,
        }
    }
}
