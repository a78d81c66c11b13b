//! Browser bridge for Easel — acquires `<canvas>` elements by id and
//! exposes the drawing helpers to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. Rust callers can also
//! use [`acquire`] directly and work with the [`easel_core`] API.

mod context;

pub use context::{WebContext2d, WebSurface};

use easel_core::{CellCoord, Point, Style, SurfaceHandle};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Handle type for a browser canvas.
pub type WebSurfaceHandle = SurfaceHandle<WebSurface, WebContext2d>;

/// Look up a `<canvas>` element by id and bundle it with its 2D
/// context.
///
/// Lookup and context acquisition are the host's failure modes; errors
/// are passed through as-is, with no caching or retry.
pub fn acquire(id: &str) -> Result<WebSurfaceHandle, JsValue> {
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {id:?}")))?;
    let canvas: HtmlCanvasElement = element.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into()?;

    let handle = SurfaceHandle::new(WebSurface(canvas), WebContext2d(ctx));
    log::debug!(
        "acquired canvas #{id}: {}x{}",
        handle.width(),
        handle.height()
    );
    Ok(handle)
}

/// The JS-facing canvas wrapper.
///
/// All drawing from the host page goes through this struct. Geometry
/// arguments are flat scalars; style bags arrive as JSON strings using
/// the Canvas2D property names.
#[wasm_bindgen]
pub struct Easel {
    handle: WebSurfaceHandle,
}

#[wasm_bindgen]
impl Easel {
    /// Acquire the canvas with the given element id.
    #[wasm_bindgen(constructor)]
    pub fn new(id: &str) -> Result<Easel, JsValue> {
        // Set up panic hook for better error messages in console
        console_error_panic_hook_setup();
        Ok(Self {
            handle: acquire(id)?,
        })
    }

    /// Realized pixel width, as last reported by the canvas.
    pub fn width(&self) -> u32 {
        self.handle.width()
    }

    /// Realized pixel height, as last reported by the canvas.
    pub fn height(&self) -> u32 {
        self.handle.height()
    }

    /// Resize the canvas backing store. Read `width()`/`height()`
    /// afterwards for the size the browser settled on.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.handle.resize(width, height);
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.handle.draw_line(Point::new(x1, y1), Point::new(x2, y2));
    }

    /// Angles are radians; `anticlockwise` follows the Canvas2D
    /// convention.
    pub fn draw_arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.handle
            .draw_arc(Point::new(x, y), radius, start_angle, end_angle, anticlockwise);
    }

    pub fn draw_quadratic(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, cx: f64, cy: f64) {
        self.handle
            .draw_quadratic(Point::new(x1, y1), Point::new(x2, y2), Point::new(cx, cy));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_cubic(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
    ) {
        self.handle.draw_cubic(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(c1x, c1y),
            Point::new(c2x, c2y),
        );
    }

    /// Fill with `fill_color`, then border with `stroke_color`.
    pub fn draw_rect(
        &mut self,
        fill_color: &str,
        stroke_color: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        self.handle
            .draw_rect(fill_color, stroke_color, Point::new(x, y), width, height);
    }

    /// Tile-grid variant of `draw_rect`: the pixel origin is the cell
    /// coordinate scaled by the cell size.
    pub fn draw_cell(
        &mut self,
        fill_color: &str,
        stroke_color: &str,
        cell_x: i32,
        cell_y: i32,
        cell_width: f64,
        cell_height: f64,
    ) {
        self.handle.draw_cell(
            fill_color,
            stroke_color,
            CellCoord::new(cell_x, cell_y),
            cell_width,
            cell_height,
        );
    }

    /// Fill and border the whole canvas at its current realized size.
    pub fn draw_background(&mut self, fill_color: &str, stroke_color: &str) {
        self.handle.draw_background(fill_color, stroke_color);
    }

    /// Fill `text` using the context's current font and baseline; set
    /// those beforehand via `set_style`.
    pub fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.handle.fill_text(text, Point::new(x, y));
    }

    pub fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        self.handle.stroke_text(text, Point::new(x, y));
    }

    /// Apply a style bag given as a JSON object string, e.g.
    /// `{"lineWidth": 2, "strokeStyle": "#333"}`.
    ///
    /// Keys that are absent or wrongly typed are skipped without
    /// touching the matching context property; unparseable input is an
    /// empty bag.
    pub fn set_style(&mut self, options_json: &str) {
        self.handle.set_style(&parse_style(options_json));
    }

    /// Apply a style bag, then fill `text`.
    pub fn fill_styled_text(&mut self, text: &str, x: f64, y: f64, options_json: &str) {
        self.handle
            .fill_text_styled(text, Point::new(x, y), &parse_style(options_json));
    }

    /// Apply a style bag, then stroke `text`.
    pub fn stroke_styled_text(&mut self, text: &str, x: f64, y: f64, options_json: &str) {
        self.handle
            .stroke_text_styled(text, Point::new(x, y), &parse_style(options_json));
    }
}

/// Decode a JSON style bag, treating unparseable input as empty.
fn parse_style(options_json: &str) -> Style {
    match serde_json::from_str::<serde_json::Value>(options_json) {
        Ok(value) => Style::from_json(&value),
        Err(err) => {
            log::debug!("ignoring unparseable style options: {err}");
            Style::default()
        }
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Easel WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
