//! The surface handle: a surface reference, its rendering context, and
//! the cached realized pixel size.

use crate::context::{Context2d, Surface};
use crate::draw::{self, CellCoord};
use crate::style::Style;
use kurbo::Point;

/// Bundles a drawing surface with its 2D context and pixel size.
///
/// `width`/`height` always hold the values last read back from the
/// surface, never the values a caller requested — the host may clamp
/// or round a resize. The handle holds the host references for its own
/// lifetime but assumes no exclusivity; other code may mutate the same
/// surface at any time.
#[derive(Debug)]
pub struct SurfaceHandle<S, C> {
    surface: S,
    context: C,
    width: u32,
    height: u32,
}

impl<S: Surface, C: Context2d> SurfaceHandle<S, C> {
    /// Bundle an already-acquired surface and context, reading the
    /// current pixel size off the surface.
    pub fn new(surface: S, context: C) -> Self {
        let (width, height) = surface.pixel_size();
        Self {
            surface,
            context,
            width,
            height,
        }
    }

    /// Realized pixel width, as last reported by the surface.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Realized pixel height, as last reported by the surface.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The underlying surface reference.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The underlying rendering context, for compositions this layer
    /// doesn't cover.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Request a new backing pixel size, then re-read and cache what
    /// the surface actually settled on. Returns the realized size.
    pub fn resize(&mut self, width: u32, height: u32) -> (u32, u32) {
        self.surface.set_pixel_size(width, height);
        let (realized_w, realized_h) = self.surface.pixel_size();
        log::trace!("resize requested {width}x{height}, surface reports {realized_w}x{realized_h}");
        self.width = realized_w;
        self.height = realized_h;
        (realized_w, realized_h)
    }

    /// Apply a sparse style bag to the context. See [`Style::apply`].
    pub fn set_style(&mut self, style: &Style) {
        style.apply(&mut self.context);
    }

    // ─── Drawing conveniences ────────────────────────────────────────

    pub fn draw_line(&mut self, from: Point, to: Point) {
        draw::line(&mut self.context, from, to);
    }

    pub fn draw_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        draw::arc(&mut self.context, center, radius, start_angle, end_angle, anticlockwise);
    }

    pub fn draw_quadratic(&mut self, from: Point, to: Point, ctrl: Point) {
        draw::quadratic(&mut self.context, from, to, ctrl);
    }

    pub fn draw_cubic(&mut self, from: Point, to: Point, ctrl1: Point, ctrl2: Point) {
        draw::cubic(&mut self.context, from, to, ctrl1, ctrl2);
    }

    pub fn draw_rect(
        &mut self,
        fill_color: &str,
        stroke_color: &str,
        pos: Point,
        width: f64,
        height: f64,
    ) {
        draw::rect(&mut self.context, fill_color, stroke_color, pos, width, height);
    }

    pub fn draw_cell(
        &mut self,
        fill_color: &str,
        stroke_color: &str,
        cell: CellCoord,
        cell_width: f64,
        cell_height: f64,
    ) {
        draw::cell(&mut self.context, fill_color, stroke_color, cell, cell_width, cell_height);
    }

    /// Fill and border the whole surface using the cached size.
    pub fn draw_background(&mut self, fill_color: &str, stroke_color: &str) {
        draw::background(
            &mut self.context,
            fill_color,
            stroke_color,
            self.width as f64,
            self.height as f64,
        );
    }

    pub fn fill_text(&mut self, text: &str, pos: Point) {
        draw::fill_text(&mut self.context, text, pos);
    }

    pub fn stroke_text(&mut self, text: &str, pos: Point) {
        draw::stroke_text(&mut self.context, text, pos);
    }

    pub fn fill_text_styled(&mut self, text: &str, pos: Point, style: &Style) {
        draw::fill_text_styled(&mut self.context, text, pos, style);
    }

    pub fn stroke_text_styled(&mut self, text: &str, pos: Point, style: &Style) {
        draw::stroke_text_styled(&mut self.context, text, pos, style);
    }
}
