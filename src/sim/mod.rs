//! Scene simulation
//!
//! Object and particle state plus the per-tick update rules. Drawing lives in
//! `renderer`; the scene only hands its entities to a [`Surface`](crate::renderer::Surface).
//! All randomness comes from the scene's seeded RNG.

pub mod celestial;
pub mod particle;
pub mod scene;

pub use celestial::{CelestialKind, CelestialObject, Viewport};
pub use particle::Particle;
pub use scene::{Scene, SceneSnapshot};
