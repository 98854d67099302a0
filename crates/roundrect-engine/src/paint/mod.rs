//! Paint model consumed by the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - fill / stroke paint for shape tiles
//! - linear gradients for gradient tiles
//!
//! Geometry types remain in `coords` and `geometry`.

pub mod color;
pub mod gradient;
#[allow(clippy::module_inception)]
mod paint;

pub use color::Color;
pub use gradient::{ColorStop, GradientDirection, LinearGradient, SpreadMode};
pub use paint::{ShapePaint, Stroke};
