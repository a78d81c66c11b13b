//! [`Context2d`] and [`Surface`] over the browser's Canvas2D objects.
//!
//! Newtypes, since the core traits cannot be implemented for web-sys
//! types directly from this crate. Fallible web-sys calls are issued
//! with their results discarded; a bad argument is the host's problem.

use easel_core::{Context2d, Surface};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A browser 2D rendering context.
#[derive(Debug, Clone)]
pub struct WebContext2d(pub CanvasRenderingContext2d);

impl Context2d for WebContext2d {
    fn begin_path(&mut self) {
        self.0.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        let _ = self.0.arc_with_anticlockwise(
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        );
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.0.quadratic_curve_to(cx, cy, x, y);
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.0.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn fill(&mut self) {
        self.0.fill();
    }

    fn stroke(&mut self) {
        self.0.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.0.fill_rect(x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.0.stroke_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.0.fill_text(text, x, y);
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.0.stroke_text(text, x, y);
    }

    fn set_line_width(&mut self, width: f64) {
        self.0.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.0.set_stroke_style_str(color);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.0.set_fill_style_str(color);
    }

    fn set_line_cap(&mut self, cap: &str) {
        self.0.set_line_cap(cap);
    }

    fn set_line_join(&mut self, join: &str) {
        self.0.set_line_join(join);
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.0.set_text_baseline(baseline);
    }

    fn set_font(&mut self, font: &str) {
        self.0.set_font(font);
    }
}

/// A `<canvas>` element as a resizable pixel surface.
///
/// `width`/`height` address the backing store, not the CSS box; the
/// browser may normalize the values we set, which is why the size is
/// always read back.
#[derive(Debug, Clone)]
pub struct WebSurface(pub HtmlCanvasElement);

impl Surface for WebSurface {
    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.0.set_width(width);
        self.0.set_height(height);
    }

    fn pixel_size(&self) -> (u32, u32) {
        (self.0.width(), self.0.height())
    }
}
