use crate::coords::{EdgeInsets, Rect, Vec2};
use crate::geometry::{Rounding, fill_contour};
use crate::paint::{Color, GradientDirection, LinearGradient};

use super::canvas::Canvas;
use super::{NineSlice, RasterConfig, RasterError, Tile};

/// Room added to the caps on each axis so the gradient has a body to stretch.
const GRADIENT_PADDING: f32 = 50.0;

/// Paints `gradient` across a working rectangle sized from `insets`, cuts
/// it to the rounded outline, and wraps the result as a nine-slice with
/// the same insets.
///
/// The outline goes through a separate mask layer, so the gradient's own
/// alpha is kept and only the corners are cut away. A radius larger than
/// half the working rect is reduced to fit.
pub fn gradient_image(
    gradient: &LinearGradient,
    rounding: Option<&Rounding>,
    insets: EdgeInsets,
    config: &RasterConfig,
) -> Result<NineSlice, RasterError> {
    let rect = Rect::from_size(insets.h() + GRADIENT_PADDING, insets.v() + GRADIENT_PADDING);
    let mut canvas = Canvas::new(rect.size, config)?;
    canvas.fill_gradient(rect, gradient)?;
    if let Some(rounding) = rounding.filter(|r| !r.is_square()) {
        // Radii larger than the working rect allows round off to a capsule.
        let fitted = rounding.clamped(rect.width().min(rect.height()) * 0.5);
        canvas.clip_to(&fill_contour(rect, Some(&fitted)))?;
    }

    let tile = Tile::new(canvas.finish(), config.scale);
    log::debug!(
        "gradient tile {}x{} px, {} stops (opaque: {})",
        tile.width(),
        tile.height(),
        gradient.stops.len(),
        gradient.is_opaque()
    );
    Ok(NineSlice::new(tile, insets))
}

/// Request for a stretchable gradient image.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientImage {
    pub colors: Vec<Color>,
    pub direction: GradientDirection,
    pub rounding: Option<Rounding>,
    pub insets: EdgeInsets,
}

impl GradientImage {
    /// # Panics
    /// With fewer than two colors.
    pub fn new(colors: Vec<Color>) -> Self {
        assert!(colors.len() >= 2, "gradient needs at least 2 colors, got {}", colors.len());
        Self {
            colors,
            direction: GradientDirection::default(),
            rounding: None,
            insets: EdgeInsets::zero(),
        }
    }

    #[inline]
    pub fn with_direction(mut self, start: Vec2, end: Vec2) -> Self {
        self.direction = GradientDirection::new(start, end);
        self
    }

    #[inline]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = Some(rounding);
        self
    }

    #[inline]
    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    pub fn gradient(&self) -> LinearGradient {
        LinearGradient::evenly_spaced(&self.colors, self.direction)
    }

    pub fn render(&self, config: &RasterConfig) -> Result<NineSlice, RasterError> {
        gradient_image(&self.gradient(), self.rounding.as_ref(), self.insets, config)
    }
}
