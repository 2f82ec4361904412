//! Poster configuration. Every field has a default, so a configuration file need only name what
//! it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::file::{FileError, ReadJsonFile};
use crate::gradient::DEFAULT_MIX;
use crate::grid::{InvalidCell, Overrides, PlacementOverride};
use crate::palette::{color_or_false, Rgb};

pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x1d, 0x1d, 0x1d);
pub const DEFAULT_GRAIN_SPECKS: usize = 4_000;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorOverrides {
    #[serde(default, deserialize_with = "color_or_false")]
    pub home: Option<Rgb>,
    #[serde(default, deserialize_with = "color_or_false")]
    pub away: Option<Rgb>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    pub gradient_mix: f64,
    pub invert_gradients: bool,
    #[serde(deserialize_with = "color_or_false")]
    pub background: Option<Rgb>,
    pub color_overrides: ColorOverrides,
    pub noise: bool,
    pub grain_specks: usize,
    pub seed: u64,
    pub placement_overrides: Vec<PlacementOverride>,
}
impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            gradient_mix: DEFAULT_MIX,
            invert_gradients: true,
            background: None,
            color_overrides: ColorOverrides::default(),
            noise: true,
            grain_specks: DEFAULT_GRAIN_SPECKS,
            seed: 1,
            placement_overrides: vec![],
        }
    }
}
impl PosterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.gradient_mix) {
            return Err(ConfigError::GradientMix(self.gradient_mix));
        }
        self.overrides()?;
        Ok(())
    }

    pub fn background(&self) -> Rgb {
        self.background.unwrap_or(DEFAULT_BACKGROUND)
    }

    pub fn overrides(&self) -> Result<Overrides, InvalidCell> {
        Overrides::try_from(self.placement_overrides.as_slice())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read_json_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gradient mix {0} outside [0, 1]")]
    GradientMix(f64),

    #[error("invalid placement override: {0}")]
    PlacementOverride(#[from] InvalidCell),

    #[error("{0}")]
    File(#[from] FileError),
}
