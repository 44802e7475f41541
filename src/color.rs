//! HSL color model and CSS color strings
//!
//! Every celestial object carries a hue/saturation/lightness triple; all of
//! its paint (gradients, rings, dots, emitted particles) is derived from it.

use serde::{Deserialize, Serialize};

/// Hue in degrees [0, 360), saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation,
            lightness,
        }
    }

    /// Same color with the hue turned by `degrees`
    pub fn rotated(self, degrees: f32) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.lightness)
    }

    /// Opaque color (`hsl(...)`)
    pub fn opaque(self) -> Color {
        Color::Hsl(self)
    }

    /// Translucent color (`hsla(...)`)
    pub fn with_alpha(self, alpha: f32) -> Color {
        Color::Hsla(self, alpha)
    }
}

/// A fill or stroke color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Hsl(Hsl),
    Hsla(Hsl, f32),
    Rgba(u8, u8, u8, f32),
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Color::Rgba(r, g, b, alpha)
    }

    /// The color's own opacity
    pub fn alpha(&self) -> f32 {
        match self {
            Color::Hsl(_) => 1.0,
            Color::Hsla(_, a) | Color::Rgba(_, _, _, a) => *a,
        }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        match self {
            Color::Hsl(c) => format!("hsl({}, {}%, {}%)", c.hue, c.saturation, c.lightness),
            Color::Hsla(c, a) => format!(
                "hsla({}, {}%, {}%, {})",
                c.hue, c.saturation, c.lightness, a
            ),
            Color::Rgba(r, g, b, a) => format!("rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}
