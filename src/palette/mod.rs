//! Team colour assignment and shade ramps.
//!
//! Charts colour each manager's series by team name. The palette is a
//! plain value handed to whoever needs it (built from configuration or
//! [`Palette::league_default`]), so tests can substitute their own.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much darker each successive shade gets.
const SHADE_STEP: f64 = 0.15;

/// Colour parsing errors.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour '{0}': expected #RRGGBB")]
    InvalidHex(String),
}

/// An RGB colour, serialised as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::InvalidHex(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Progressively darker shades of `base`.
///
/// Shade `i` multiplies each channel by `1 - i * 0.15`, rounding to the
/// nearest integer. Channels are clamped at 0 so deep ramps on dark base
/// colours stay valid. Shade 0 is always the base colour unchanged.
pub fn generate_shades(base: Rgb, count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            let factor = 1.0 - i as f64 * SHADE_STEP;
            let scale = |channel: u8| (channel as f64 * factor).max(0.0).round() as u8;
            Rgb::new(scale(base.r), scale(base.g), scale(base.b))
        })
        .collect()
}

/// Manager name to colour mapping with a shared fallback.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<String, Rgb>,
    fallback: Rgb,
}

impl Palette {
    pub fn new(colors: HashMap<String, Rgb>, fallback: Rgb) -> Self {
        Self { colors, fallback }
    }

    /// The league's standing team colours.
    pub fn league_default() -> Self {
        let colors = [
            ("Wirtzuose", Rgb::new(0xF1, 0xC4, 0x0F)),
            ("Diego FC", Rgb::new(0x6B, 0x5B, 0x95)),
            ("FacePalmer FC", Rgb::new(0x88, 0xB0, 0x4B)),
            ("Put it in in", Rgb::new(0xF7, 0xCA, 0xC9)),
            ("The Habibi Army", Rgb::new(0xE6, 0x7E, 0x22)),
            ("Guinness FC", Rgb::new(0x95, 0x52, 0x51)),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color))
        .collect();

        Self {
            colors,
            fallback: Rgb::new(0x3B, 0x82, 0xF6),
        }
    }

    /// Build a palette from hex strings, e.g. from configuration.
    pub fn from_hex_map(
        colors: &HashMap<String, String>,
        fallback: &str,
    ) -> Result<Self, ColorError> {
        let parsed = colors
            .iter()
            .map(|(name, hex)| Ok((name.clone(), hex.parse()?)))
            .collect::<Result<HashMap<_, _>, ColorError>>()?;

        Ok(Self {
            colors: parsed,
            fallback: fallback.parse()?,
        })
    }

    /// Colour for a manager, by exact name match. Unknown names get the
    /// shared fallback.
    pub fn color_for(&self, manager_name: &str) -> Rgb {
        self.colors
            .get(manager_name)
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Shade ramp rooted at a manager's colour.
    pub fn shades_for(&self, manager_name: &str, count: usize) -> Vec<Rgb> {
        generate_shades(self.color_for(manager_name), count)
    }

    pub fn fallback(&self) -> Rgb {
        self.fallback
    }
}
