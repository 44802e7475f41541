//! Particle drawing

use super::surface::{Paint, Surface};
use crate::sim::Particle;

/// Draw a particle as a dot faded by its remaining life
pub fn draw_particle<S: Surface + ?Sized>(surface: &mut S, particle: &Particle) {
    surface.set_global_alpha(particle.opacity());
    surface.fill_circle(particle.pos, particle.size, &Paint::Solid(particle.color));
    surface.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;
    use crate::renderer::RecordingSurface;
    use glam::Vec2;

    #[test]
    fn test_alpha_tracks_life_and_is_restored() {
        let color = Hsl::new(30.0, 80.0, 60.0).opaque();
        let mut p = Particle::new(Vec2::new(10.0, 20.0), 2.0, color, 0.0, 0.3);
        for _ in 0..25 {
            p.update();
        }

        let mut surface = RecordingSurface::new();
        draw_particle(&mut surface, &p);

        let (paint, state) = surface.fill_circles().next().expect("particle dot");
        assert!((state.global_alpha - 0.75).abs() < 1e-6);
        assert_eq!(paint, &Paint::Solid(color));
        assert!(surface.is_neutral());
    }
}
