//! Team colours. Every team code maps to one of six palette buckets, each carrying a primary
//! (home) and a secondary (away) shade.

use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

use serde::de::{Error as DeError, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn inverse(&self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid colour '{0}': expected #rrggbb")]
pub struct InvalidColor(pub String);

impl FromStr for Rgb {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(InvalidColor(s.into()));
        }
        let channel = |range: Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| InvalidColor(s.into()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_str(&s).map_err(DeError::custom)
    }
}

/// Deserializes an optional colour that may also be given as `false` (meaning 'not set').
pub fn color_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Rgb>, D::Error> {
    struct ColorOrFalse;

    impl<'de> Visitor<'de> for ColorOrFalse {
        type Value = Option<Rgb>;

        fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
            write!(f, "a #rrggbb colour, false or null")
        }

        fn visit_bool<E: DeError>(self, v: bool) -> Result<Self::Value, E> {
            if v {
                Err(E::invalid_value(Unexpected::Bool(v), &self))
            } else {
                Ok(None)
            }
        }

        fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
            Rgb::from_str(v).map(Some).map_err(E::custom)
        }

        fn visit_unit<E: DeError>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: DeError>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(ColorOrFalse)
        }
    }

    deserializer.deserialize_option(ColorOrFalse)
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, strum_macros::Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Palette {
    Yellow,
    Green,
    Orange,
    Red,
    Purple,
    Blue,
}
impl Palette {
    pub fn primary(&self) -> Rgb {
        match self {
            Palette::Yellow => Rgb::new(0xFD, 0xC3, 0x33),
            Palette::Green => Rgb::new(0xA2, 0xC8, 0x4F),
            Palette::Orange => Rgb::new(0xF3, 0x92, 0x4C),
            Palette::Red => Rgb::new(0xEC, 0x60, 0x62),
            Palette::Purple => Rgb::new(0x88, 0x71, 0xB1),
            Palette::Blue => Rgb::new(0x66, 0xBC, 0xEB),
        }
    }

    pub fn secondary(&self) -> Rgb {
        match self {
            Palette::Yellow => Rgb::new(0xFF, 0xED, 0xAD),
            Palette::Green => Rgb::new(0xD7, 0xE3, 0xA1),
            Palette::Orange => Rgb::new(0xFB, 0xCF, 0xA5),
            Palette::Red => Rgb::new(0xF9, 0xCA, 0xC5),
            Palette::Purple => Rgb::new(0xE5, 0xD7, 0xEB),
            Palette::Blue => Rgb::new(0xBC, 0xE4, 0xFA),
        }
    }

    /// The bucket assigned to a three-letter team code, grouped by tournament group.
    pub fn for_code(code: &str) -> Option<Palette> {
        let palette = match code.to_ascii_uppercase().as_str() {
            // A
            "PHI" => Palette::Purple,
            "NOR" => Palette::Orange,
            "NZL" => Palette::Blue,
            "SUI" => Palette::Red,
            // B
            "AUS" => Palette::Yellow,
            "CAN" => Palette::Red,
            "IRL" => Palette::Orange,
            "NGA" => Palette::Green,
            // C
            "CRC" => Palette::Red,
            "ESP" => Palette::Orange,
            "JPN" => Palette::Purple,
            "ZAM" => Palette::Green,
            // D
            "CHN" => Palette::Red,
            "DEN" => Palette::Yellow,
            "HAI" => Palette::Purple,
            "ENG" => Palette::Blue,
            // E
            "USA" => Palette::Blue,
            "NED" => Palette::Orange,
            "POR" => Palette::Green,
            "VIE" => Palette::Purple,
            // F
            "BRA" => Palette::Green,
            "FRA" => Palette::Blue,
            "JAM" => Palette::Yellow,
            "PAN" | "PAM" => Palette::Purple,
            // G
            "ARG" => Palette::Blue,
            "ITA" => Palette::Purple,
            "SWE" => Palette::Yellow,
            "RSA" => Palette::Green,
            // H
            "GER" => Palette::Yellow,
            "COL" => Palette::Blue,
            "KOR" => Palette::Red,
            "MAR" => Palette::Orange,
            _ => return None,
        };
        Some(palette)
    }
}
