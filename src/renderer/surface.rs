//! Immediate-mode 2D drawing surface
//!
//! Mirrors the subset of the canvas 2D context the scene needs. All drawing
//! code is written against this trait so it runs the same against the browser
//! canvas, a command recorder, or nothing at all.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One color stop of a gradient; `offset` runs 0 (center) to 1 (edge)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Radial gradient centered on the circle it fills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            stops: Vec::with_capacity(3),
        }
    }

    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}

/// Fill style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    Radial(RadialGradient),
}

/// Post-process filter applied to subsequent draws
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    None,
    /// Gaussian blur radius in CSS pixels
    Blur(f32),
}

impl Filter {
    pub fn to_css(&self) -> String {
        match self {
            Filter::None => "none".to_string(),
            Filter::Blur(px) => format!("blur({}px)", px),
        }
    }
}

/// 2D drawing context
///
/// Draw routines must leave the surface as they found it: global alpha 1.0,
/// no filter, and every `save` matched by a `restore`.
pub trait Surface {
    /// Push the current transform/alpha/filter state
    fn save(&mut self);
    /// Pop the most recently saved state
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
    fn set_global_alpha(&mut self, alpha: f32);
    fn set_filter(&mut self, filter: Filter);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);
}
