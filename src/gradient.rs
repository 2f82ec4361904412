//! Two-tone horizontal gradients with a soft transition band between the home and away shares.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::Rgb;

/// Transition band width used when neither share is small.
pub const DEFAULT_MIX: f64 = 0.4;

/// Shares below this are given a narrower band so it does not swamp them.
pub const SMALL_SHARE: f64 = 0.15;

/// Upper bound on the band width next to a small share.
pub const SMALL_SHARE_MIX: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgb,
    pub offset: f64,
}
impl GradientStop {
    pub fn new(color: Rgb, offset: f64) -> Self {
        Self { color, offset }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidMetric {
    #[error("fraction {0} outside [0, 1]")]
    FractionOutOfRange(f64),

    #[error("mix {0} outside [0, 1]")]
    MixOutOfRange(f64),
}

fn check_unit(value: f64, err: fn(f64) -> InvalidMetric) -> Result<(), InvalidMetric> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(err(value))
    }
}

/// The band width actually applied for a pair of shares.
pub fn effective_mix(home: f64, away: f64, mix: f64) -> f64 {
    if home == 0.0 || away == 0.0 {
        0.0
    } else if home < SMALL_SHARE || away < SMALL_SHARE {
        f64::min(mix, SMALL_SHARE_MIX)
    } else {
        mix
    }
}

/// Generates four stops blending `home_color` into `away_color`. The band sits on the larger
/// share's side of the boundary. When `invert` is set the blend is mirrored so that the home
/// colour ends on the right.
pub fn generate_stops(
    home_color: Rgb,
    away_color: Rgb,
    home: f64,
    away: f64,
    invert: bool,
    mix: f64,
) -> Result<Vec<GradientStop>, InvalidMetric> {
    check_unit(home, InvalidMetric::FractionOutOfRange)?;
    check_unit(away, InvalidMetric::FractionOutOfRange)?;
    check_unit(mix, InvalidMetric::MixOutOfRange)?;

    let mix = effective_mix(home, away, mix);
    let offsets = if home > away {
        [0.0, home - mix, home, 1.0]
    } else {
        [0.0, home, 1.0 - away + mix, 1.0]
    };
    let colors = [home_color, home_color, away_color, away_color];

    let mut stops = Vec::with_capacity(offsets.len());
    let mut floor = 0.0;
    for (color, offset) in colors.into_iter().zip(offsets) {
        let offset = offset.clamp(floor, 1.0);
        floor = offset;
        stops.push(GradientStop::new(color, offset));
    }

    if invert {
        stops.reverse();
        for stop in &mut stops {
            stop.offset = 1.0 - stop.offset;
        }
    }
    Ok(stops)
}
