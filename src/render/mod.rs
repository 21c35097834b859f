//! Canvas 2D rendering
//!
//! Strictly a projection of session state onto pixels; nothing here mutates
//! the simulation. Draw order per frame: clear, stars, asteroids, ball, HUD.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::{Asteroid, Ball, Star};

/// HUD count accent color
const HUD_COUNT_COLOR: &str = "#4FC3F7";

fn rgba(color: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", color[0], color[1], color[2], alpha)
}

/// Frame renderer bound to one canvas
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Bind to a canvas, or `None` when no 2D context is available
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(style);
        self.ctx.fill();
    }

    pub fn draw_stars(&self, stars: &[Star]) {
        for star in stars {
            self.fill_circle(
                star.pos.x as f64,
                star.pos.y as f64,
                star.size as f64,
                &rgba(star.color, star.alpha),
            );
        }
    }

    /// Draw the asteroid field
    ///
    /// The default mode is a filled circle of the collision size; the
    /// detailed mode traces the stored outline instead.
    pub fn draw_asteroids(&self, asteroids: &[Asteroid], detailed: bool) {
        for asteroid in asteroids {
            if detailed && !asteroid.outline.is_empty() {
                self.ctx.begin_path();
                for (i, point) in asteroid.outline.iter().enumerate() {
                    let x = (asteroid.pos.x + point.angle.cos() * point.radius) as f64;
                    let y = (asteroid.pos.y + point.angle.sin() * point.radius) as f64;
                    if i == 0 {
                        self.ctx.move_to(x, y);
                    } else {
                        self.ctx.line_to(x, y);
                    }
                }
                self.ctx.close_path();
                self.ctx.set_fill_style_str(&rgba(asteroid.color, 1.0));
                self.ctx.fill();
            } else {
                self.fill_circle(
                    asteroid.pos.x as f64,
                    asteroid.pos.y as f64,
                    asteroid.size as f64,
                    &rgba(asteroid.color, 1.0),
                );
            }
        }
    }

    pub fn draw_ball(&self, ball: &Ball) {
        self.fill_circle(
            ball.pos.x as f64,
            ball.pos.y as f64,
            ball.radius as f64,
            "white",
        );
    }

    /// Score panel, anchored top-right and scaled down on narrow viewports
    pub fn draw_hud(&self, collected: u32, viewport_width: f32, mobile_breakpoint: f32) {
        let mobile = viewport_width < mobile_breakpoint;
        let panel_w = if mobile { 120.0 } else { 150.0 };
        let panel_h = if mobile { 50.0 } else { 60.0 };
        let margin = if mobile { 15.0 } else { 20.0 };
        let title_font = if mobile {
            "bold 18px Arial"
        } else {
            "bold 24px Arial"
        };
        let count_font = if mobile {
            "bold 22px Arial"
        } else {
            "bold 28px Arial"
        };

        let canvas_w = self.canvas.width() as f64;
        let x = canvas_w - panel_w - margin;

        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
        self.ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        self.ctx.set_line_width(2.0);
        self.ctx.fill_rect(x, margin, panel_w, panel_h);
        self.ctx.stroke_rect(x, margin, panel_w, panel_h);

        self.ctx.set_fill_style_str("white");
        self.ctx.set_font(title_font);
        self.ctx.set_text_align("right");
        let _ = self.ctx.fill_text(
            "Asteroids:",
            canvas_w - margin - 10.0,
            margin + if mobile { 25.0 } else { 30.0 },
        );

        self.ctx.set_font(count_font);
        self.ctx.set_fill_style_str(HUD_COUNT_COLOR);
        let _ = self.ctx.fill_text(
            &collected.to_string(),
            canvas_w - margin - 10.0,
            margin + if mobile { 45.0 } else { 60.0 },
        );
    }
}
