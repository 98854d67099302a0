use crate::coords::{EdgeInsets, EdgeMask};
use crate::geometry::{Rounding, TileLayout, fill_contour, stroke_contours};
use crate::paint::ShapePaint;

use super::canvas::Canvas;
use super::{ColorMode, NineSlice, RasterConfig, RasterError, Tile};

/// Renders the minimal tile for a rounded rectangle: fill first, then the
/// stroke on the selected edges.
///
/// A stroke of width zero (or no stroke) leaves the fill untouched and adds
/// no room around the shape.
pub fn rasterize_shape(
    paint: &ShapePaint,
    edges: EdgeMask,
    rounding: Option<&Rounding>,
    config: &RasterConfig,
) -> Result<Tile, RasterError> {
    let stroke = paint.active_stroke();
    let stroke_width = stroke.map_or(0.0, |s| s.width);
    let layout = TileLayout::new(rounding, stroke_width, edges);
    let mut canvas = Canvas::new(layout.canvas, config)?;

    if let Some(fill) = paint.fill.filter(|c| !c.is_transparent()) {
        canvas.fill(&[fill_contour(layout.shape, rounding)], fill)?;
    }
    if let Some(stroke) = stroke {
        let contours = stroke_contours(layout.shape, rounding, edges, stroke.width);
        canvas.stroke(&contours, stroke)?;
    }

    let tile = Tile::new(canvas.finish(), config.scale);
    log::debug!(
        "shape tile {}x{} px (radius {}, stroke {}, edges {:?})",
        tile.width(),
        tile.height(),
        rounding.map_or(0.0, Rounding::radius),
        stroke_width,
        edges
    );
    Ok(tile)
}

// ── ShapeImage ────────────────────────────────────────────────────────────

/// Everything needed to produce a stretchable rounded-rect image.
///
/// ```
/// use roundrect_engine::coords::EdgeMask;
/// use roundrect_engine::geometry::Rounding;
/// use roundrect_engine::paint::{Color, ShapePaint};
/// use roundrect_engine::raster::{RasterConfig, ShapeImage};
///
/// let image = ShapeImage::new(ShapePaint::fill(Color::white()).with_stroke(Color::black(), 1.0))
///     .with_edges(EdgeMask::TOP | EdgeMask::BOTTOM)
///     .with_rounding(Rounding::uniform(6.0));
/// let slice = image.render(&RasterConfig::default()).unwrap();
/// let button = slice.render(120, 32).unwrap();
/// assert_eq!(button.width(), 120);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeImage {
    pub paint: ShapePaint,
    /// Edges that get the stroke.
    pub edges: EdgeMask,
    pub rounding: Option<Rounding>,
    /// Cap insets for stretching; derived from the shape when unset.
    pub insets: Option<EdgeInsets>,
    /// Opacity applied after rasterizing, in `[0, 1]`.
    pub alpha: f32,
    pub color_mode: ColorMode,
}

impl ShapeImage {
    pub fn new(paint: ShapePaint) -> Self {
        Self {
            paint,
            edges: EdgeMask::all(),
            rounding: None,
            insets: None,
            alpha: 1.0,
            color_mode: ColorMode::Original,
        }
    }

    #[inline]
    pub fn with_edges(mut self, edges: EdgeMask) -> Self {
        self.edges = edges;
        self
    }

    #[inline]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = Some(rounding);
        self
    }

    #[inline]
    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = Some(insets);
        self
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    #[inline]
    pub fn as_template(mut self) -> Self {
        self.color_mode = ColorMode::Template;
        self
    }

    /// Cap insets the nine-slice will use, in logical units.
    ///
    /// Without an override this is the radius plus half the stroke width on
    /// stroked edges, not the bare radius.
    pub fn cap_insets(&self) -> EdgeInsets {
        self.insets.unwrap_or_else(|| {
            TileLayout::new(self.rounding.as_ref(), self.paint.stroke_width(), self.edges)
                .cap_insets(self.rounding.as_ref())
        })
    }

    /// The fixed-size tile with alpha and color mode applied.
    pub fn rasterize(&self, config: &RasterConfig) -> Result<Tile, RasterError> {
        let tile = rasterize_shape(&self.paint, self.edges, self.rounding.as_ref(), config)?.with_alpha(self.alpha);
        Ok(match self.color_mode {
            ColorMode::Original => tile,
            ColorMode::Template => tile.into_template(),
        })
    }

    /// The tile wrapped as a stretchable nine-slice.
    pub fn render(&self, config: &RasterConfig) -> Result<NineSlice, RasterError> {
        Ok(NineSlice::new(self.rasterize(config)?, self.cap_insets()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LoggingConfig, init_logging};
    use crate::paint::Color;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0, 255)
    }

    fn blue() -> Color {
        Color::from_srgb_u8(0, 0, 255, 255)
    }

    fn alpha_sum(tile: &Tile) -> u64 {
        tile.pixmap().pixels().iter().map(|p| p.alpha() as u64).sum()
    }

    #[test]
    fn fill_tile_is_one_plus_two_radii() {
        init_logging(LoggingConfig::for_tests());
        let tile = rasterize_shape(
            &ShapePaint::fill(Color::black()),
            EdgeMask::all(),
            Some(&Rounding::uniform(10.0)),
            &RasterConfig::default(),
        )
        .unwrap();
        assert_eq!((tile.width(), tile.height()), (21, 21));
        assert_eq!(tile.pixel(10, 10), Some([0, 0, 0, 255]));
        // Outside the corner arc.
        assert_eq!(tile.pixel(0, 0).map(|p| p[3]), Some(0));
        // Straight part of the top edge.
        assert!(tile.pixel(10, 0).unwrap()[3] >= 250);
    }

    #[test]
    fn scale_multiplies_pixel_size() {
        let tile = rasterize_shape(
            &ShapePaint::fill(Color::black()),
            EdgeMask::all(),
            Some(&Rounding::uniform(10.0)),
            &RasterConfig::with_scale(2.0),
        )
        .unwrap();
        assert_eq!((tile.width(), tile.height()), (42, 42));
        assert_eq!(tile.size().x, 21.0);
    }

    #[test]
    fn stroke_is_drawn_over_fill() {
        let paint = ShapePaint::fill(blue()).with_stroke(red(), 2.0);
        let tile = rasterize_shape(&paint, EdgeMask::all(), Some(&Rounding::uniform(10.0)), &RasterConfig::default())
            .unwrap();
        assert_eq!((tile.width(), tile.height()), (23, 23));
        assert_eq!(tile.pixel(11, 0), Some(RED));
        assert_eq!(tile.pixel(0, 11), Some(RED));
        assert_eq!(tile.pixel(11, 11), Some(BLUE));
    }

    #[test]
    fn partial_stroke_only_marks_selected_edges() {
        let paint = ShapePaint::fill(blue()).with_stroke(red(), 2.0);
        let tile =
            rasterize_shape(&paint, EdgeMask::TOP, Some(&Rounding::uniform(4.0)), &RasterConfig::default()).unwrap();
        // Only the top edge grew.
        assert_eq!((tile.width(), tile.height()), (9, 10));
        assert_eq!(tile.pixel(4, 0), Some(RED));
        assert_eq!(tile.pixel(4, 9), Some(BLUE));
        assert_eq!(tile.pixel(0, 5), Some(BLUE));
    }

    #[test]
    fn zero_width_stroke_matches_fill_only() {
        let rounding = Rounding::uniform(6.0);
        let config = RasterConfig::default();
        let plain = rasterize_shape(&ShapePaint::fill(blue()), EdgeMask::all(), Some(&rounding), &config).unwrap();
        let stroked = rasterize_shape(
            &ShapePaint::fill(blue()).with_stroke(red(), 0.0),
            EdgeMask::all(),
            Some(&rounding),
            &config,
        )
        .unwrap();
        assert_eq!(plain, stroked);
    }

    #[test]
    fn rasterizing_is_deterministic() {
        let image = ShapeImage::new(ShapePaint::fill(blue()).with_stroke(red(), 1.5))
            .with_edges(EdgeMask::LEFT | EdgeMask::BOTTOM)
            .with_rounding(Rounding::per_corner(crate::coords::CornerMask::BOTTOM_LEFT, 5.0));
        let config = RasterConfig::with_scale(3.0);
        assert_eq!(image.rasterize(&config).unwrap(), image.rasterize(&config).unwrap());
    }

    #[test]
    fn alpha_scales_coverage() {
        let base = ShapeImage::new(ShapePaint::fill(Color::black())).with_rounding(Rounding::uniform(8.0));
        let config = RasterConfig::default();
        let full = base.rasterize(&config).unwrap();
        let half = base.clone().with_alpha(0.5).rasterize(&config).unwrap();
        let none = base.with_alpha(0.0).rasterize(&config).unwrap();

        assert_eq!(half.pixel(8, 8).map(|p| p[3]), Some(128));
        let (f, h) = (alpha_sum(&full) as f64, alpha_sum(&half) as f64);
        assert!((h / f - 0.5).abs() < 0.01, "{h} / {f}");
        assert_eq!(alpha_sum(&none), 0);
    }

    #[test]
    fn template_can_be_tinted() {
        let tile = ShapeImage::new(ShapePaint::fill(Color::black()))
            .with_rounding(Rounding::uniform(4.0))
            .as_template()
            .rasterize(&RasterConfig::default())
            .unwrap();
        assert_eq!(tile.color_mode(), ColorMode::Template);
        assert_eq!(tile.tinted(red()).pixel(4, 4), Some(RED));
    }

    #[test]
    fn default_insets_follow_shape_and_stroke() {
        let image = ShapeImage::new(ShapePaint::fill(blue()).with_stroke(red(), 4.0))
            .with_edges(EdgeMask::TOP | EdgeMask::LEFT | EdgeMask::RIGHT)
            .with_rounding(Rounding::uniform(10.0));
        assert_eq!(image.cap_insets(), EdgeInsets::new(12.0, 12.0, 10.0, 12.0));

        let custom = image.with_insets(EdgeInsets::all(3.0));
        assert_eq!(custom.cap_insets(), EdgeInsets::all(3.0));
    }

    #[test]
    #[should_panic(expected = "corner radius")]
    fn negative_radius_panics_instead_of_failing() {
        let _ = ShapeImage::new(ShapePaint::fill(Color::black()))
            .with_rounding(Rounding::Uniform(-5.0))
            .render(&RasterConfig::default());
    }

    #[test]
    fn no_fill_no_stroke_is_transparent() {
        let tile = rasterize_shape(
            &ShapePaint::new(None, None),
            EdgeMask::all(),
            Some(&Rounding::uniform(3.0)),
            &RasterConfig::default(),
        )
        .unwrap();
        assert_eq!(alpha_sum(&tile), 0);
    }
}
