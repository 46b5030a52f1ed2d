//! Canvas 2D implementation of the core `Surface`.

use std::f64::consts::TAU;

use pagefx::{Rgb, Surface};
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) {
        self.ctx.begin_path();
        // arc only throws for a negative radius
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_css(alpha));
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Rgb, alpha: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from[0], from[1]);
        self.ctx.line_to(to[0], to[1]);
        self.ctx.set_stroke_style_str(&color.to_css(alpha));
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}
