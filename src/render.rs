use portfolio_core::constants::{PARTICLE_FILL, TRAIL_FILL};
use portfolio_core::ParticleField;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D painter for the particle background.
pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// `None` when the canvas has no 2D context.
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn paint(&self, field: &ParticleField) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        // Translucent fill instead of a clear: previous frames fade into trails
        self.ctx.set_fill_style_str(TRAIL_FILL);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(PARTICLE_FILL);
        for p in field.particles() {
            self.ctx.begin_path();
            if self
                .ctx
                .arc(
                    p.position.x as f64,
                    p.position.y as f64,
                    p.radius as f64,
                    0.0,
                    TAU,
                )
                .is_ok()
            {
                self.ctx.fill();
            }
        }
    }
}
