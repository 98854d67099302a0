//! Coordinate and geometry primitives shared by the geometry engine and rasterizer.
//!
//! Canonical CPU space:
//! - Logical units (multiplied by `RasterConfig::scale` to get pixels)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are `atan2(dy, dx)` in this space, so a positive sweep turns
//! clockwise on screen.

mod corner_radii;
mod edges;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use edges::{Corner, CornerMask, Edge, EdgeInsets, EdgeMask};
pub use rect::Rect;
pub use vec2::Vec2;
