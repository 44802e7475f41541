//! Off-screen surfaces: a command recorder and a no-op sink

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::surface::{Filter, Paint, Surface};
use crate::color::Color;

/// Transient paint state tracked by [`RecordingSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintState {
    pub global_alpha: f32,
    pub filter: Filter,
    /// Whether a translate/rotate is in effect
    pub transformed: bool,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            global_alpha: 1.0,
            filter: Filter::None,
            transformed: false,
        }
    }
}

/// A recorded drawing primitive, with the paint state it was drawn under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        state: PaintState,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        line_width: f32,
        state: PaintState,
    },
}

/// Surface that records every primitive instead of rasterizing it
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    state: PaintState,
    stack: Vec<PaintState>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    /// Unmatched `save` calls
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Opaque, untransformed, unfiltered, with no open `save`
    pub fn is_neutral(&self) -> bool {
        self.stack.is_empty() && self.state == PaintState::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn fill_circles(&self) -> impl Iterator<Item = (&Paint, PaintState)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle { paint, state, .. } => Some((paint, *state)),
            _ => None,
        })
    }

    pub fn stroke_radii(&self) -> Vec<f32> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeCircle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("restore() without matching save()"),
        }
    }

    fn translate(&mut self, _offset: Vec2) {
        self.state.transformed = true;
    }

    fn rotate(&mut self, _angle: f32) {
        self.state.transformed = true;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.global_alpha = alpha;
    }

    fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
            state: self.state,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
            state: self.state,
        });
    }
}

/// Surface that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _offset: Vec2) {}
    fn rotate(&mut self, _angle: f32) {}
    fn set_global_alpha(&mut self, _alpha: f32) {}
    fn set_filter(&mut self, _filter: Filter) {}
    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: Color) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _paint: &Paint) {}
    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _line_width: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_restore_round_trips_state() {
        let mut s = RecordingSurface::new();
        s.save();
        s.translate(Vec2::new(5.0, 5.0));
        s.set_global_alpha(0.3);
        s.set_filter(Filter::Blur(5.0));
        assert!(!s.is_neutral());
        assert_eq!(s.depth(), 1);
        s.restore();
        assert!(s.is_neutral());
    }

    #[test]
    fn test_unmatched_restore_is_ignored() {
        let mut s = RecordingSurface::new();
        s.restore();
        assert!(s.is_neutral());
    }

    #[test]
    fn test_commands_capture_state() {
        let mut s = RecordingSurface::new();
        s.set_global_alpha(0.5);
        let paint = Paint::Solid(Color::rgba(255, 255, 255, 1.0));
        s.fill_circle(Vec2::ZERO, 2.0, &paint);
        let (_, state) = s.fill_circles().next().expect("one circle");
        assert_eq!(state.global_alpha, 0.5);
    }
}
