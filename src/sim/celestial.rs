//! Drifting celestial objects

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::particle::Particle;
use crate::color::Hsl;
use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// Visual style of a celestial object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelestialKind {
    /// Gradient disk with concentric rings
    Galaxy,
    /// Scatter of twinkling dots
    Cluster,
    /// Blurred three-tone gradient cloud
    Nebula,
    /// Gradient disk with complementary-hued sparks
    BigBank,
}

impl CelestialKind {
    /// All variants, in startup creation order
    pub const ALL: [CelestialKind; 4] = [
        CelestialKind::Galaxy,
        CelestialKind::Cluster,
        CelestialKind::Nebula,
        CelestialKind::BigBank,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CelestialKind::Galaxy => "galaxy",
            CelestialKind::Cluster => "cluster",
            CelestialKind::Nebula => "nebula",
            CelestialKind::BigBank => "bigbank",
        }
    }
}

/// Drawing surface bounds in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `pos` lies inside the viewport grown by `margin` on every side
    pub fn contains_with_margin(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }

    /// Uniform random point in [0, width) x [0, height)
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.random::<f32>() * self.width,
            rng.random::<f32>() * self.height,
        )
    }
}

/// A decorative body drifting along a slowly turning heading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialObject {
    pub kind: CelestialKind,
    pub pos: Vec2,
    /// Radius in pixels
    pub size: f32,
    /// Orbital angle (radians); heading and draw rotation
    pub angle: f32,
    pub speed: f32,
    pub color: Hsl,
    /// Chance per update of emitting a particle
    pub spawn_chance: f32,
}

impl CelestialObject {
    /// Create an object with randomized heading, speed and color
    pub fn new<R: Rng + ?Sized>(kind: CelestialKind, pos: Vec2, size: f32, rng: &mut R) -> Self {
        let angle = rng.random::<f32>() * TAU;
        let speed = rng.random_range(OBJECT_SPEED_MIN..OBJECT_SPEED_MAX);
        let color = Hsl::new(
            rng.random::<f32>() * 360.0,
            rng.random_range(50.0..100.0),
            rng.random_range(25.0..75.0),
        );
        Self {
            kind,
            pos,
            size,
            angle: normalize_angle(angle),
            speed,
            color,
            spawn_chance: SPAWN_CHANCE,
        }
    }

    /// Create an object at a random spot with a random size
    pub fn random<R: Rng + ?Sized>(kind: CelestialKind, viewport: Viewport, rng: &mut R) -> Self {
        let pos = viewport.random_point(rng);
        let size = rng.random_range(OBJECT_SIZE_MIN..OBJECT_SIZE_MAX);
        Self::new(kind, pos, size, rng)
    }

    /// Advance one tick. Returns the particle emitted this tick, if any.
    pub fn update<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> Option<Particle> {
        self.angle = normalize_angle(self.angle + self.speed * ORBIT_RATE);
        self.pos += polar_to_cartesian(self.speed, self.angle);

        // Teleport back into view rather than bounce
        if !viewport.contains_with_margin(self.pos, self.size) {
            self.pos = viewport.random_point(rng);
        }

        if rng.random::<f32>() < self.spawn_chance {
            Some(self.emit(rng))
        } else {
            None
        }
    }

    fn emit<R: Rng + ?Sized>(&self, rng: &mut R) -> Particle {
        Particle::new(
            self.pos,
            rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            self.color.opaque(),
            rng.random::<f32>() * TAU,
            rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEW: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_random_object_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let obj = CelestialObject::random(CelestialKind::Nebula, VIEW, &mut rng);
            assert!(obj.size >= 25.0 && obj.size < 75.0);
            assert!(obj.speed >= 0.1 && obj.speed < 0.3);
            assert!(obj.color.hue >= 0.0 && obj.color.hue < 360.0);
            assert!(obj.color.saturation >= 50.0 && obj.color.saturation < 100.0);
            assert!(obj.color.lightness >= 25.0 && obj.color.lightness < 75.0);
            assert!(obj.pos.x >= 0.0 && obj.pos.x < 800.0);
            assert!(obj.pos.y >= 0.0 && obj.pos.y < 600.0);
        }
    }

    #[test]
    fn test_update_advances_angle_and_position() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut obj = CelestialObject::new(CelestialKind::Galaxy, Vec2::new(400.0, 300.0), 30.0, &mut rng);
        obj.angle = 0.0;
        obj.speed = 0.2;
        obj.spawn_chance = 0.0;

        assert!(obj.update(VIEW, &mut rng).is_none());

        let expected_angle = 0.2 * ORBIT_RATE;
        assert!((obj.angle - expected_angle).abs() < 1e-6);
        assert!((obj.pos.x - (400.0 + expected_angle.cos() * 0.2)).abs() < 1e-4);
        assert!((obj.pos.y - (300.0 + expected_angle.sin() * 0.2)).abs() < 1e-4);
    }

    #[test]
    fn test_leaving_bounds_teleports_inside() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut obj = CelestialObject::new(CelestialKind::Cluster, Vec2::new(-40.0, 300.0), 30.0, &mut rng);
        obj.spawn_chance = 0.0;
        obj.update(VIEW, &mut rng);
        assert!(obj.pos.x >= 0.0 && obj.pos.x < 800.0);
        assert!(obj.pos.y >= 0.0 && obj.pos.y < 600.0);
    }

    #[test]
    fn test_margin_keeps_object_in_place() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut obj = CelestialObject::new(CelestialKind::Cluster, Vec2::new(-20.0, 300.0), 30.0, &mut rng);
        obj.angle = 0.0;
        obj.spawn_chance = 0.0;
        obj.update(VIEW, &mut rng);
        // Still within the 30px margin, so it just drifts
        assert!(obj.pos.x < 0.0);
    }

    #[test]
    fn test_forced_spawn_emits_every_update() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut obj = CelestialObject::random(CelestialKind::BigBank, VIEW, &mut rng);
        obj.spawn_chance = 1.0;
        for _ in 0..50 {
            let p = obj.update(VIEW, &mut rng).expect("forced spawn");
            assert_eq!(p.pos, obj.pos);
            assert_eq!(p.life, 100);
            assert_eq!(p.color, obj.color.opaque());
            assert!(p.size >= 1.0 && p.size < 3.0);
            assert!(p.speed >= 0.1 && p.speed < 0.6);
        }
    }

    #[test]
    fn test_zero_spawn_chance_never_emits() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut obj = CelestialObject::random(CelestialKind::Galaxy, VIEW, &mut rng);
        obj.spawn_chance = 0.0;
        assert!((0..500).all(|_| obj.update(VIEW, &mut rng).is_none()));
    }

    proptest! {
        #[test]
        fn prop_position_stays_bounded(
            seed in any::<u64>(),
            x in -200.0f32..1000.0,
            y in -200.0f32..800.0,
            size in 25.0f32..75.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut obj = CelestialObject::new(CelestialKind::Galaxy, Vec2::new(x, y), size, &mut rng);
            for _ in 0..200 {
                let before = obj.pos;
                obj.update(VIEW, &mut rng);
                let drifted = before + polar_to_cartesian(obj.speed, obj.angle);
                if drifted != obj.pos {
                    // Wrapped: must land strictly inside the viewport
                    prop_assert!(obj.pos.x >= 0.0 && obj.pos.x < VIEW.width);
                    prop_assert!(obj.pos.y >= 0.0 && obj.pos.y < VIEW.height);
                }
                prop_assert!(VIEW.contains_with_margin(obj.pos, obj.size));
            }
        }
    }
}
