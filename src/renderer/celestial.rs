//! Per-variant celestial object renderers
//!
//! Each renderer draws in the object's local frame: origin at the object
//! center, rotated by its orbital angle. [`draw_celestial`] sets that frame
//! up and tears it down again.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::surface::{Filter, Paint, RadialGradient, Surface};
use crate::color::Hsl;
use crate::polar_to_cartesian;
use crate::sim::{CelestialKind, CelestialObject};

/// Galaxy ring count and stroke
const GALAXY_RINGS: usize = 5;
const GALAXY_RING_ALPHA: f32 = 0.5;
const GALAXY_RING_WIDTH: f32 = 2.0;

const CLUSTER_STARS: usize = 20;

const NEBULA_HUE_STEP: f32 = 30.0;

const BIGBANK_SPARKS: usize = 10;
const BIGBANK_SPARK_REACH: f32 = 1.5;
const BIGBANK_SPARK_ALPHA: f32 = 0.8;

/// Options that vary with quality settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialStyle {
    /// Nebula blur radius; `None` draws the gradient unfiltered
    pub nebula_blur: Option<f32>,
}

impl Default for CelestialStyle {
    fn default() -> Self {
        Self {
            nebula_blur: Some(crate::consts::NEBULA_BLUR_PX),
        }
    }
}

/// Draw an object in its local frame
///
/// Cluster and bigbank dot layouts are re-rolled from `rng` every call.
pub fn draw_celestial<S, R>(surface: &mut S, obj: &CelestialObject, style: &CelestialStyle, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    surface.save();
    surface.translate(obj.pos);
    surface.rotate(obj.angle);

    match obj.kind {
        CelestialKind::Galaxy => draw_galaxy(surface, obj.size, obj.color),
        CelestialKind::Cluster => draw_cluster(surface, obj.size, obj.color, rng),
        CelestialKind::Nebula => draw_nebula(surface, obj.size, obj.color, style.nebula_blur),
        CelestialKind::BigBank => draw_bigbank(surface, obj.size, obj.color, rng),
    }

    surface.restore();
}

/// Opaque center fading to a transparent rim
fn core_disk<S: Surface + ?Sized>(surface: &mut S, size: f32, color: Hsl) {
    let gradient = RadialGradient::new(size)
        .stop(0.0, color.with_alpha(1.0))
        .stop(1.0, color.with_alpha(0.0));
    surface.fill_circle(Vec2::ZERO, size, &Paint::Radial(gradient));
}

/// Random point within `reach` of the origin
fn scatter<R: Rng + ?Sized>(rng: &mut R, reach: f32) -> Vec2 {
    let angle = rng.random::<f32>() * TAU;
    let distance = rng.random::<f32>() * reach;
    polar_to_cartesian(distance, angle)
}

pub fn draw_galaxy<S: Surface + ?Sized>(surface: &mut S, size: f32, color: Hsl) {
    core_disk(surface, size, color);

    let ring = color.with_alpha(GALAXY_RING_ALPHA);
    for i in 0..GALAXY_RINGS {
        let radius = size * (0.2 + i as f32 * 0.2);
        surface.stroke_circle(Vec2::ZERO, radius, ring, GALAXY_RING_WIDTH);
    }
}

pub fn draw_cluster<S, R>(surface: &mut S, size: f32, color: Hsl, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..CLUSTER_STARS {
        let pos = scatter(rng, size);
        let radius = rng.random_range(1.0..3.0);
        let alpha = rng.random_range(0.5..1.0);
        surface.fill_circle(pos, radius, &Paint::Solid(color.with_alpha(alpha)));
    }
}

pub fn draw_nebula<S: Surface + ?Sized>(surface: &mut S, size: f32, color: Hsl, blur: Option<f32>) {
    if let Some(px) = blur {
        surface.set_filter(Filter::Blur(px));
    }

    let gradient = RadialGradient::new(size)
        .stop(0.0, color.with_alpha(0.8))
        .stop(0.5, color.rotated(NEBULA_HUE_STEP).with_alpha(0.4))
        .stop(1.0, color.rotated(2.0 * NEBULA_HUE_STEP).with_alpha(0.0));
    surface.fill_circle(Vec2::ZERO, size, &Paint::Radial(gradient));

    if blur.is_some() {
        surface.set_filter(Filter::None);
    }
}

pub fn draw_bigbank<S, R>(surface: &mut S, size: f32, color: Hsl, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    core_disk(surface, size, color);

    let spark = Paint::Solid(color.rotated(180.0).with_alpha(BIGBANK_SPARK_ALPHA));
    for _ in 0..BIGBANK_SPARKS {
        let pos = scatter(rng, size * BIGBANK_SPARK_REACH);
        let radius = rng.random_range(2.0..5.0);
        surface.fill_circle(pos, radius, &spark);
    }
}
