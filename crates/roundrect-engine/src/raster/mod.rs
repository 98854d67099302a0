//! CPU rasterizer: contours to premultiplied RGBA tiles, plus nine-slice
//! stretching and gradient tiles.
//!
//! Every call draws into its own canvas and returns an owned [`Tile`], so
//! tiles can be produced concurrently and shared across threads.

mod canvas;
mod config;
mod error;
mod gradient;
mod nine_slice;
mod shape;
mod tile;

pub use config::RasterConfig;
pub use error::RasterError;
pub use gradient::{GradientImage, gradient_image};
pub use nine_slice::{CapInsets, NineSlice};
pub use shape::{ShapeImage, rasterize_shape};
pub use tile::{ColorMode, Tile};
