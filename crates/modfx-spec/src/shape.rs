//! Mod-signal shape names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical mod-signal waveform shapes.
///
/// All shapes produce values in [0, 1] before exponent shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Raised cosine starting at 0.
    Cos,
    /// Rectified cosine, |cos|.
    RectCos,
    /// Inverted rectified cosine, 1 - |cos|.
    InvRectCos,
    /// Triangle.
    Tri,
    /// Rising sawtooth.
    Saw,
    /// Falling sawtooth.
    Rsaw,
    /// Square.
    Sqr,
}

/// Error returned when parsing an unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported shape '{0}'")]
pub struct UnknownShape(pub String);

impl Shape {
    /// Every supported shape, in declaration order.
    pub const ALL: [Shape; 7] = [
        Shape::Cos,
        Shape::RectCos,
        Shape::InvRectCos,
        Shape::Tri,
        Shape::Saw,
        Shape::Rsaw,
        Shape::Sqr,
    ];

    /// Default candidate set for randomized synthesis (no square wave).
    pub const RANDOM_DEFAULTS: [Shape; 6] = [
        Shape::Cos,
        Shape::Tri,
        Shape::RectCos,
        Shape::InvRectCos,
        Shape::Saw,
        Shape::Rsaw,
    ];

    /// Returns the snake_case name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Cos => "cos",
            Shape::RectCos => "rect_cos",
            Shape::InvRectCos => "inv_rect_cos",
            Shape::Tri => "tri",
            Shape::Saw => "saw",
            Shape::Rsaw => "rsaw",
            Shape::Sqr => "sqr",
        }
    }

    /// Rectified shapes double the apparent frequency, so synthesis halves
    /// frequency and phase first.
    pub fn is_rectified(&self) -> bool {
        matches!(self, Shape::RectCos | Shape::InvRectCos)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}
