//! Colors and colormaps.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NeuroPlotError;

/// A color with red, green, blue and alpha channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Rgba::new(r, g, b, 1.0)
    }
}

impl FromStr for Rgba {
    type Err = NeuroPlotError;

    /// Parses `#rrggbb`, `#rrggbbaa` or one of a few color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NeuroPlotError::InvalidArgument(format!("invalid color: {}", s));

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
                return Err(invalid());
            }
            let channels = (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map(|v| v as f64 / 255.0))
                .collect::<Result<Vec<f64>, _>>()
                .map_err(|_| invalid())?;
            let alpha = channels.get(3).copied().unwrap_or(1.0);
            return Ok(Rgba::new(channels[0], channels[1], channels[2], alpha));
        }

        match s {
            "black" | "k" => Ok(Rgba::BLACK),
            "white" | "w" => Ok(Rgba::WHITE),
            "red" | "r" => Ok(Rgba::opaque(1.0, 0.0, 0.0)),
            "green" | "g" => Ok(Rgba::opaque(0.0, 0.5, 0.0)),
            "blue" | "b" => Ok(Rgba::opaque(0.0, 0.0, 1.0)),
            "gray" | "grey" => Ok(Rgba::opaque(0.5, 0.5, 0.5)),
            "orange" => Ok(Rgba::opaque(1.0, 0.647, 0.0)),
            "none" => Ok(Rgba::TRANSPARENT),
            _ => Err(invalid()),
        }
    }
}

/// A colormap, i.e., a function from [0, 1] to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Jet,
    Gray,
    Hot,
}

/// Anchors (position, value) of a piecewise-linear channel.
type Segments = &'static [(f64, f64)];

const JET: [Segments; 3] = [
    &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    &[(0.0, 0.0), (0.125, 0.0), (0.375, 1.0), (0.64, 1.0), (0.91, 0.0), (1.0, 0.0)],
    &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
];

const HOT: [Segments; 3] = [
    &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
    &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
    &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
];

const GRAY: [Segments; 3] = [
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
];

impl Colormap {
    /// Evaluates the colormap at the given value, clamped to [0, 1].
    /// NaN values map to a transparent color.
    pub fn eval(&self, value: f64) -> Rgba {
        if value.is_nan() {
            return Rgba::TRANSPARENT;
        }
        let value = value.clamp(0.0, 1.0);
        let [r, g, b] = match self {
            Colormap::Jet => JET,
            Colormap::Gray => GRAY,
            Colormap::Hot => HOT,
        };
        Rgba::opaque(interpolate(r, value), interpolate(g, value), interpolate(b, value))
    }
}

fn interpolate(segments: Segments, value: f64) -> f64 {
    let pos = segments
        .iter()
        .position(|(x, _)| *x >= value)
        .unwrap_or(segments.len() - 1);
    if pos == 0 {
        return segments[0].1;
    }
    let (x0, y0) = segments[pos - 1];
    let (x1, y1) = segments[pos];
    y0 + (y1 - y0) * (value - x0) / (x1 - x0)
}
