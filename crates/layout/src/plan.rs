//! Layout plans consumed by the renderer.
//!
//! Coordinates are PostScript points with the origin at the bottom-left of
//! the page and Y pointing up.

use std::{fmt, ops::Range, str::FromStr};

use kurbo::Point;

use crate::{AxisSetting, error::Error};

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parses `#RRGGBB` or `R,G,B` with components in `0..1`.
impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |range: Range<usize>| {
                u8::from_str_radix(&hex[range], 16)
                    .map(|v| f32::from(v) / 255.0)
                    .map_err(|_| invalid())
            };
            return Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<f32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            &[r, g, b] if parts.iter().all(|c| (0.0..=1.0).contains(c)) => Ok(Self::new(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

/// Text drawn left to right from a baseline origin with one font setting.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    pub font_size: f64,
    pub axes: Vec<AxisSetting>,
    pub color: Rgb,
}

/// Everything needed to draw one poster page.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterPlan {
    pub page: PageSize,
    /// Full-page fill drawn before any text.
    pub background: Option<Rgb>,
    pub runs: Vec<TextRun>,
}
