//! Scene: the object and particle collections and the per-frame tick

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::celestial::{CelestialKind, CelestialObject, Viewport};
use super::particle::Particle;
use crate::color::Color;
use crate::renderer::{CelestialStyle, NullSurface, Surface, draw_celestial, draw_particle};
use crate::settings::Settings;

/// Everything that changes from frame to frame
pub struct Scene {
    /// Run seed for reproducibility
    pub seed: u64,
    viewport: Viewport,
    /// Fixed after construction; order is draw order
    objects: Vec<CelestialObject>,
    /// Oldest first
    particles: Vec<Particle>,
    rng: Pcg32,
    max_particles: usize,
    trail_color: Color,
    style: CelestialStyle,
    /// Ticks run so far
    pub ticks: u64,
}

/// Serializable view of a scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub seed: u64,
    pub ticks: u64,
    pub viewport: Viewport,
    pub objects: Vec<CelestialObject>,
    pub particles: Vec<Particle>,
}

impl Scene {
    /// Create a scene and populate it with `settings.objects_per_kind` of each variant
    pub fn new(seed: u64, viewport: Viewport, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut objects = Vec::with_capacity(settings.objects_per_kind * CelestialKind::ALL.len());
        for _ in 0..settings.objects_per_kind {
            for kind in CelestialKind::ALL {
                let mut obj = CelestialObject::random(kind, viewport, &mut rng);
                obj.spawn_chance = settings.spawn_chance;
                objects.push(obj);
            }
        }

        log::info!(
            "Scene created: {} objects, {}x{} viewport, seed {}",
            objects.len(),
            viewport.width,
            viewport.height,
            seed
        );

        Self {
            seed,
            viewport,
            objects,
            particles: Vec::new(),
            rng,
            max_particles: settings.max_particles(),
            trail_color: Color::rgba(0, 0, 0, settings.trail_alpha),
            style: CelestialStyle {
                nebula_blur: settings.nebula_blur(),
            },
            ticks: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// Track a new viewport size. Existing objects stay put until they wrap.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width.max(0.0), height.max(0.0));
        log::debug!("Viewport resized to {}x{}", self.viewport.width, self.viewport.height);
    }

    /// Run one tick and paint it onto `surface`
    ///
    /// Fades the previous frame, updates and draws every object in order,
    /// then updates, draws and reaps every particle.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let Self {
            viewport,
            objects,
            particles,
            rng,
            max_particles,
            trail_color,
            style,
            ..
        } = self;

        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(viewport.width, viewport.height),
            *trail_color,
        );

        for obj in objects.iter_mut() {
            if let Some(particle) = obj.update(*viewport, rng) {
                push_bounded(particles, particle, *max_particles);
            }
            draw_celestial(surface, obj, style, rng);
        }

        particles.retain_mut(|p| {
            p.update();
            draw_particle(surface, p);
            p.is_alive()
        });

        self.ticks += 1;
    }

    /// Run one tick without drawing
    pub fn step(&mut self) {
        self.frame(&mut NullSurface);
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            seed: self.seed,
            ticks: self.ticks,
            viewport: self.viewport,
            objects: self.objects.clone(),
            particles: self.particles.clone(),
        }
    }
}

/// Append, dropping the oldest particle when at capacity
fn push_bounded(particles: &mut Vec<Particle>, particle: Particle, cap: usize) {
    if cap == 0 {
        return;
    }
    if particles.len() >= cap {
        // Remove oldest particles to make room
        let excess = particles.len() + 1 - cap;
        particles.drain(..excess);
    }
    particles.push(particle);
}
