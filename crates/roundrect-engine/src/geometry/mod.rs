//! Geometry engine: rounded-rect outlines and per-edge stroke centerlines.
//!
//! Everything here is pure math over `coords` types; nothing allocates a
//! canvas. The rasterizer turns the resulting [`Contour`]s into pixels.

mod contour;
mod fill;
mod layout;
mod outline;
mod rounding;
mod stroke;

pub use contour::{Arc, Contour, Segment};
pub use fill::fill_contour;
pub use layout::TileLayout;
pub use rounding::{Rounding, radii_of};
pub use stroke::stroke_contours;
