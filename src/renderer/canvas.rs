//! Browser canvas backend

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::surface::{Filter, Paint, Surface};
use crate::color::Color;

/// [`Surface`] over a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        let res = self.ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        check("arc", res)
    }

    fn set_paint(&self, paint: &Paint, center: Vec2) -> bool {
        match paint {
            Paint::Solid(color) => {
                self.ctx.set_fill_style_str(&color.to_css());
                true
            }
            Paint::Radial(gradient) => {
                let (cx, cy) = (center.x as f64, center.y as f64);
                let radius = gradient.radius.max(0.0) as f64;
                let grad = match self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius) {
                    Ok(grad) => grad,
                    Err(e) => {
                        log::warn!("create_radial_gradient failed: {:?}", e);
                        return false;
                    }
                };
                for stop in &gradient.stops {
                    if !check("add_color_stop", grad.add_color_stop(stop.offset, &stop.color.to_css())) {
                        return false;
                    }
                }
                self.ctx.set_fill_style_canvas_gradient(&grad);
                true
            }
        }
    }
}

fn check(op: &str, res: Result<(), JsValue>) -> bool {
    match res {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{} failed: {:?}", op, e);
            false
        }
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        check("translate", self.ctx.translate(offset.x as f64, offset.y as f64));
    }

    fn rotate(&mut self, angle: f32) {
        check("rotate", self.ctx.rotate(angle as f64));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_filter(&mut self, filter: Filter) {
        self.ctx.set_filter(&filter.to_css());
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if self.set_paint(paint, center) && self.circle_path(center, radius) {
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        if self.circle_path(center, radius) {
            self.ctx.stroke();
        }
    }
}
