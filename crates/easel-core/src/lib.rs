//! Easel — thin convenience layer over a host-owned 2D drawing surface.
//!
//! The host (a browser `<canvas>` in the `easel-web` binding) owns the
//! surface and its rendering context; this crate only forwards calls.
//! Drawing primitives are free functions over the [`Context2d`]
//! capability for low-level composition, and [`SurfaceHandle`] bundles
//! a surface + context + cached pixel size with the same operations as
//! methods.

pub mod context;
pub mod draw;
pub mod handle;
pub mod style;

pub use context::{Context2d, Surface};
pub use draw::CellCoord;
pub use handle::SurfaceHandle;
pub use style::Style;

// Re-export kurbo's point type so downstream crates don't need a direct dependency
pub use kurbo::Point;
