//! Fading particles emitted by celestial objects

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;
use crate::polar_to_cartesian;

/// A short-lived point of light drifting in a fixed direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    /// Heading in radians, fixed at creation
    pub angle: f32,
    pub speed: f32,
    /// Remaining lifetime in ticks
    pub life: i32,
}

impl Particle {
    pub fn new(pos: Vec2, size: f32, color: Color, angle: f32, speed: f32) -> Self {
        Self {
            pos,
            size,
            color,
            angle,
            speed,
            life: PARTICLE_LIFE,
        }
    }

    /// Advance one tick: drift, age and shrink
    pub fn update(&mut self) {
        self.pos += polar_to_cartesian(self.speed, self.angle);
        self.life -= 1;
        self.size *= PARTICLE_SHRINK;
    }

    /// Draw opacity, fading linearly with remaining life
    pub fn opacity(&self) -> f32 {
        (self.life as f32 / PARTICLE_LIFE as f32).clamp(0.0, 1.0)
    }

    /// False once the particle has burned out or shrunk below visibility
    pub fn is_alive(&self) -> bool {
        self.life > 0 && self.size >= PARTICLE_MIN_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;
    use proptest::prelude::*;

    fn particle(size: f32, angle: f32, speed: f32) -> Particle {
        Particle::new(
            Vec2::new(100.0, 100.0),
            size,
            Hsl::new(120.0, 60.0, 50.0).opaque(),
            angle,
            speed,
        )
    }

    #[test]
    fn test_new_particle_full_life() {
        let p = particle(2.0, 0.0, 0.5);
        assert_eq!(p.life, 100);
        assert_eq!(p.opacity(), 1.0);
        assert!(p.is_alive());
    }

    #[test]
    fn test_update_moves_along_heading() {
        let mut p = particle(2.0, std::f32::consts::FRAC_PI_2, 0.5);
        p.update();
        assert!((p.pos.x - 100.0).abs() < 1e-4);
        assert!((p.pos.y - 100.5).abs() < 1e-4);
    }

    #[test]
    fn test_dies_after_lifetime() {
        let mut p = particle(3.0, 0.0, 0.1);
        for _ in 0..99 {
            p.update();
            assert!(p.is_alive());
        }
        p.update();
        assert_eq!(p.life, 0);
        assert_eq!(p.opacity(), 0.0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_dies_when_too_small() {
        let mut p = particle(0.1, 0.0, 0.1);
        p.update();
        assert!(p.size < PARTICLE_MIN_SIZE);
        assert!(!p.is_alive());
    }

    proptest! {
        #[test]
        fn prop_update_ages_and_shrinks(
            size in 1.0f32..3.0,
            angle in 0.0f32..std::f32::consts::TAU,
            speed in 0.1f32..0.6,
            steps in 1usize..100,
        ) {
            let mut p = particle(size, angle, speed);
            for _ in 0..steps {
                let (life, size) = (p.life, p.size);
                p.update();
                prop_assert_eq!(p.life, life - 1);
                prop_assert!((p.size - size * 0.99).abs() < 1e-6);
            }
            prop_assert!((p.opacity() - p.life as f32 / 100.0).abs() < 1e-6);
        }
    }
}
