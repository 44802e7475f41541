//! Starfield - drifting galaxies, clusters and nebulae on a 2D canvas
//!
//! Core modules:
//! - `sim`: Scene state (celestial objects, particles, per-tick updates)
//! - `renderer`: Drawing surface abstraction and per-variant renderers
//! - `settings`: Quality presets and tunables, persisted in LocalStorage on web
//! - `clock`: Frame-rate bookkeeping for the animation loop

pub mod clock;
pub mod color;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::{Color, Hsl};
pub use settings::{QualityPreset, Settings};
pub use sim::{CelestialKind, CelestialObject, Particle, Scene, Viewport};

use glam::Vec2;

/// Scene tuning constants
pub mod consts {
    /// Celestial objects created per variant at startup
    pub const OBJECTS_PER_KIND: usize = 5;
    /// Object radius range [min, max)
    pub const OBJECT_SIZE_MIN: f32 = 25.0;
    pub const OBJECT_SIZE_MAX: f32 = 75.0;
    /// Object drift speed range [min, max)
    pub const OBJECT_SPEED_MIN: f32 = 0.1;
    pub const OBJECT_SPEED_MAX: f32 = 0.3;
    /// Orbital angle advance per tick, as a fraction of drift speed
    pub const ORBIT_RATE: f32 = 0.02;
    /// Chance per object update of emitting one particle
    pub const SPAWN_CHANCE: f32 = 0.1;

    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE: i32 = 100;
    /// Per-tick size multiplier
    pub const PARTICLE_SHRINK: f32 = 0.99;
    /// Particles smaller than this are reaped
    pub const PARTICLE_MIN_SIZE: f32 = 0.1;
    pub const PARTICLE_SIZE_MIN: f32 = 1.0;
    pub const PARTICLE_SIZE_MAX: f32 = 3.0;
    pub const PARTICLE_SPEED_MIN: f32 = 0.1;
    pub const PARTICLE_SPEED_MAX: f32 = 0.6;

    /// Opacity of the black overlay painted each frame (motion trails)
    pub const TRAIL_ALPHA: f32 = 0.1;
    /// Nebula soft-edge blur radius in CSS pixels
    pub const NEBULA_BLUR_PX: f32 = 5.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
