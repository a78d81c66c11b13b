//! Stateless drawing primitives over a [`Context2d`].
//!
//! Each vector primitive begins a fresh path, issues its construction
//! calls, and strokes or fills. Coordinates are forwarded untouched —
//! non-finite or out-of-surface values are the host's concern.

use crate::context::Context2d;
use crate::style::Style;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Grid index into a tile grid.
///
/// Scaled by a caller-supplied cell size to obtain the pixel-space
/// origin of the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel-space origin of this cell for the given cell size.
    pub fn origin(&self, cell_width: f64, cell_height: f64) -> Point {
        Point::new(self.x as f64 * cell_width, self.y as f64 * cell_height)
    }
}

/// Stroke a straight line from `from` to `to`.
pub fn line<C: Context2d>(ctx: &mut C, from: Point, to: Point) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

/// Stroke a circular arc around `center`.
///
/// Angles are radians; `anticlockwise` follows the host convention.
pub fn arc<C: Context2d>(
    ctx: &mut C,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    anticlockwise: bool,
) {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, start_angle, end_angle, anticlockwise);
    ctx.stroke();
}

/// Stroke a quadratic curve from `from` to `to` through one control
/// point.
pub fn quadratic<C: Context2d>(ctx: &mut C, from: Point, to: Point, ctrl: Point) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y);
    ctx.stroke();
}

/// Stroke a cubic bezier from `from` to `to` through two control
/// points.
pub fn cubic<C: Context2d>(ctx: &mut C, from: Point, to: Point, ctrl1: Point, ctrl2: Point) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.bezier_curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
    ctx.stroke();
}

/// Fill a rectangle with `fill_color`, then stroke its border with
/// `stroke_color`, in that order.
///
/// Unlike [`Style::apply`], this always overwrites the context's fill
/// and stroke colors.
pub fn rect<C: Context2d>(
    ctx: &mut C,
    fill_color: &str,
    stroke_color: &str,
    pos: Point,
    width: f64,
    height: f64,
) {
    ctx.set_fill_color(fill_color);
    ctx.fill_rect(pos.x, pos.y, width, height);
    ctx.set_stroke_color(stroke_color);
    ctx.stroke_rect(pos.x, pos.y, width, height);
}

/// Fill and border one tile of a grid. The pixel origin is the cell
/// coordinate scaled by the cell size.
pub fn cell<C: Context2d>(
    ctx: &mut C,
    fill_color: &str,
    stroke_color: &str,
    cell: CellCoord,
    cell_width: f64,
    cell_height: f64,
) {
    rect(
        ctx,
        fill_color,
        stroke_color,
        cell.origin(cell_width, cell_height),
        cell_width,
        cell_height,
    );
}

/// Fill and border the whole surface area.
pub fn background<C: Context2d>(
    ctx: &mut C,
    fill_color: &str,
    stroke_color: &str,
    width: f64,
    height: f64,
) {
    cell(ctx, fill_color, stroke_color, CellCoord::new(0, 0), width, height);
}

/// Fill `text` at `pos` using the context's current font and baseline.
/// Set those beforehand via [`Style::apply`].
pub fn fill_text<C: Context2d>(ctx: &mut C, text: &str, pos: Point) {
    ctx.fill_text(text, pos.x, pos.y);
}

/// Stroke `text` at `pos` using the context's current font and
/// baseline.
pub fn stroke_text<C: Context2d>(ctx: &mut C, text: &str, pos: Point) {
    ctx.stroke_text(text, pos.x, pos.y);
}

/// Apply `style`, then fill `text` at `pos`.
pub fn fill_text_styled<C: Context2d>(ctx: &mut C, text: &str, pos: Point, style: &Style) {
    style.apply(ctx);
    fill_text(ctx, text, pos);
}

/// Apply `style`, then stroke `text` at `pos`.
pub fn stroke_text_styled<C: Context2d>(ctx: &mut C, text: &str, pos: Point, style: &Style) {
    style.apply(ctx);
    stroke_text(ctx, text, pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cell_origin_scales_by_cell_size() {
        let origin = CellCoord::new(2, 3).origin(16.0, 16.0);
        assert_eq!(origin, Point::new(32.0, 48.0));

        let origin = CellCoord::new(-1, 0).origin(8.0, 10.0);
        assert_eq!(origin, Point::new(-8.0, 0.0));
    }
}
