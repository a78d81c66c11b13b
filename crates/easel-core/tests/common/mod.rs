//! Shared test doubles: a context that records every call it receives
//! and a surface that clamps resize requests like a constrained host.

use easel_core::{Context2d, Surface};

/// One recorded context call. Arguments are kept verbatim so tests can
/// assert exact sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    QuadraticCurveTo(f64, f64, f64, f64),
    BezierCurveTo(f64, f64, f64, f64, f64, f64),
    Fill,
    Stroke,
    FillRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    FillText(String, f64, f64),
    StrokeText(String, f64, f64),
    SetLineWidth(f64),
    SetStrokeColor(String),
    SetFillColor(String),
    SetLineCap(String),
    SetLineJoin(String),
    SetTextBaseline(String),
    SetFont(String),
}

/// Records every forwarded call in order.
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub ops: Vec<Op>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }
}

impl Context2d for RecordingContext {
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
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
        self.ops.push(Op::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(Op::QuadraticCurveTo(cx, cy, x, y));
    }
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.ops.push(Op::BezierCurveTo(c1x, c1y, c2x, c2y, x, y));
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::FillRect(x, y, width, height));
    }
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::StrokeRect(x, y, width, height));
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(Op::FillText(text.to_owned(), x, y));
    }
    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(Op::StrokeText(text.to_owned(), x, y));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::SetLineWidth(width));
    }
    fn set_stroke_color(&mut self, color: &str) {
        self.ops.push(Op::SetStrokeColor(color.to_owned()));
    }
    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(Op::SetFillColor(color.to_owned()));
    }
    fn set_line_cap(&mut self, cap: &str) {
        self.ops.push(Op::SetLineCap(cap.to_owned()));
    }
    fn set_line_join(&mut self, join: &str) {
        self.ops.push(Op::SetLineJoin(join.to_owned()));
    }
    fn set_text_baseline(&mut self, baseline: &str) {
        self.ops.push(Op::SetTextBaseline(baseline.to_owned()));
    }
    fn set_font(&mut self, font: &str) {
        self.ops.push(Op::SetFont(font.to_owned()));
    }
}

/// A surface whose backing store is capped, like a host that clamps
/// oversized canvases. Reports the clamped size back.
#[derive(Debug)]
pub struct ClampedSurface {
    width: u32,
    height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl ClampedSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            max_width: u32::MAX,
            max_height: u32::MAX,
        }
    }

    pub fn with_max(width: u32, height: u32, max_width: u32, max_height: u32) -> Self {
        Self {
            width: width.min(max_width),
            height: height.min(max_height),
            max_width,
            max_height,
        }
    }
}

impl Surface for ClampedSurface {
    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.width = width.min(self.max_width);
        self.height = height.min(self.max_height);
    }

    fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
