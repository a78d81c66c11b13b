//! Capability traits for the host drawing surface.
//!
//! The surface and its rendering context live in the host environment;
//! this layer holds non-owning handles and forwards calls through these
//! traits. Nothing here checks coordinates, colors, or descriptor
//! strings — malformed input is the host's failure mode.

/// The slice of the Canvas2D API this layer consumes: path
/// construction, fill/stroke painting, text, and mutable style state.
///
/// Angles are radians; the `anticlockwise` flag on [`arc`] follows the
/// host convention. Cap/join/baseline/font values are forwarded as
/// strings without interpretation.
///
/// [`arc`]: Context2d::arc
pub trait Context2d {
    // ─── Path construction ───────────────────────────────────────────

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);

    // ─── Painting ────────────────────────────────────────────────────

    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn stroke_text(&mut self, text: &str, x: f64, y: f64);

    // ─── Style state ─────────────────────────────────────────────────

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_cap(&mut self, cap: &str);
    fn set_line_join(&mut self, join: &str);
    fn set_text_baseline(&mut self, baseline: &str);
    fn set_font(&mut self, font: &str);
}

/// A resizable pixel surface.
///
/// `set_pixel_size` is a request — the host may clamp or round the
/// backing store, so callers re-read [`pixel_size`] afterwards instead
/// of trusting the requested values.
///
/// [`pixel_size`]: Surface::pixel_size
pub trait Surface {
    fn set_pixel_size(&mut self, width: u32, height: u32);
    fn pixel_size(&self) -> (u32, u32);
}
