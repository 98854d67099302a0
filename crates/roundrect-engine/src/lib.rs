//! Rounded-rectangle image engine.
//!
//! Builds rounded-rect outlines with per-corner rounding and per-edge
//! strokes, rasterizes them into the smallest stretchable tile, and
//! stretches tiles as nine-slices. Linear gradient tiles share the same
//! outline and stretching model.
//!
//! Layering:
//! - `coords`: points, rects, insets, edge and corner masks
//! - `paint`: colors, strokes, gradients
//! - `geometry`: outlines and stroke centerlines (pure math)
//! - `raster`: pixels

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod raster;

pub use geometry::Rounding;
pub use raster::{GradientImage, NineSlice, RasterConfig, RasterError, ShapeImage, Tile};
