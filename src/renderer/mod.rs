//! Canvas 2D rendering
//!
//! Everything draws through the [`Surface`] trait. The browser build uses
//! [`CanvasSurface`]; tests and the native runner use the off-screen surfaces.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod celestial;
pub mod particle;
pub mod recorder;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use celestial::{CelestialStyle, draw_celestial};
pub use particle::draw_particle;
pub use recorder::{DrawCommand, NullSurface, PaintState, RecordingSurface};
pub use surface::{Filter, GradientStop, Paint, RadialGradient, Surface};
