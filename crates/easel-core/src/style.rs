//! Sparse style bag and the rules for merging it onto a context.
//!
//! Each recognized property is gated independently: present and
//! well-typed → copied onto the context, absent or wrongly typed →
//! the context's current value is left alone. No errors, no defaults.

use crate::context::Context2d;
use serde_json::Value;

/// A partial bundle of context style properties.
///
/// Every field is optional; [`Style::apply`] copies only the fields
/// that are set and never touches the rest of the context's style
/// state. Values are not validated — an unknown line cap or a garbage
/// font descriptor is forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub line_width: Option<f64>,
    pub stroke_color: Option<String>,
    pub line_cap: Option<String>,
    pub line_join: Option<String>,
    pub fill_color: Option<String>,
    pub text_baseline: Option<String>,
    pub font: Option<String>,
}

impl Style {
    /// Decode a style bag from a loosely-typed JSON object keyed by the
    /// Canvas2D property names (`lineWidth`, `strokeStyle`, `lineCap`,
    /// `lineJoin`, `fillStyle`, `textBaseline`, `font`).
    ///
    /// Each key is checked for its expected type on its own: a key that
    /// is absent or holds the wrong type yields `None` for that field
    /// while the remaining keys still decode. Unrecognized keys are
    /// ignored. A non-object value decodes to the empty bag.
    pub fn from_json(options: &Value) -> Self {
        Self {
            line_width: options.get("lineWidth").and_then(Value::as_f64),
            stroke_color: str_key(options, "strokeStyle"),
            line_cap: str_key(options, "lineCap"),
            line_join: str_key(options, "lineJoin"),
            fill_color: str_key(options, "fillStyle"),
            text_baseline: str_key(options, "textBaseline"),
            font: str_key(options, "font"),
        }
    }

    /// Copy the set fields onto `ctx`, leaving every unset property at
    /// its current value. Field order is immaterial — each maps to an
    /// independent context property.
    pub fn apply<C: Context2d>(&self, ctx: &mut C) {
        if let Some(width) = self.line_width {
            ctx.set_line_width(width);
        }
        if let Some(ref color) = self.stroke_color {
            ctx.set_stroke_color(color);
        }
        if let Some(ref cap) = self.line_cap {
            ctx.set_line_cap(cap);
        }
        if let Some(ref join) = self.line_join {
            ctx.set_line_join(join);
        }
        if let Some(ref color) = self.fill_color {
            ctx.set_fill_color(color);
        }
        if let Some(ref baseline) = self.text_baseline {
            ctx.set_text_baseline(baseline);
        }
        if let Some(ref font) = self.font {
            ctx.set_font(font);
        }
    }
}

fn str_key(options: &Value, key: &str) -> Option<String> {
    options.get(key).and_then(Value::as_str).map(str::to_owned)
}
