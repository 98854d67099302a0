use crate::coords::{EdgeInsets, EdgeMask, Rect, Vec2};

use super::rounding::{Rounding, assert_radius};

/// Minimal canvas for one shape tile.
///
/// The shape is `1 + 2 * radius` on each axis: both corners plus a single
/// stretchable unit between them. Each stroked edge adds half the stroke
/// width outside the shape so the outer half of the stroke is not clipped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileLayout {
    /// Canvas size in logical units.
    pub canvas: Vec2,
    /// Where fill and stroke centerlines sit inside the canvas.
    pub shape: Rect,
    /// Room added outside `shape` for the stroke.
    pub stroke_outsets: EdgeInsets,
}

impl TileLayout {
    /// # Panics
    /// On a negative radius or stroke width.
    pub fn new(rounding: Option<&Rounding>, stroke_width: f32, edges: EdgeMask) -> Self {
        assert!(
            stroke_width.is_finite() && stroke_width >= 0.0,
            "stroke width must be >= 0, got {stroke_width}"
        );
        // The variants are public, so a radius may not have gone through the constructors.
        let radius = rounding.map_or(0.0, Rounding::radius);
        assert_radius(radius);
        let side = 1.0 + 2.0 * radius;
        let stroke_outsets = EdgeInsets::on_edges(stroke_width * 0.5, edges);
        let shape = Rect::new(stroke_outsets.left, stroke_outsets.top, side, side);
        let canvas = Vec2::new(side + stroke_outsets.h(), side + stroke_outsets.v());
        Self { canvas, shape, stroke_outsets }
    }

    /// Caps that keep the corners and the stroke out of the stretched band,
    /// leaving exactly the middle unit of the shape stretchable.
    pub fn cap_insets(&self, rounding: Option<&Rounding>) -> EdgeInsets {
        let r = rounding.map_or(EdgeInsets::zero(), Rounding::insets);
        EdgeInsets::new(
            r.top + self.stroke_outsets.top,
            r.left + self.stroke_outsets.left,
            r.bottom + self.stroke_outsets.bottom,
            r.right + self.stroke_outsets.right,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstroked_tile_is_one_plus_two_radii() {
        let l = TileLayout::new(Some(&Rounding::uniform(10.0)), 0.0, EdgeMask::all());
        assert_eq!(l.canvas, Vec2::new(21.0, 21.0));
        assert_eq!(l.shape, Rect::new(0.0, 0.0, 21.0, 21.0));
        assert_eq!(l.cap_insets(Some(&Rounding::uniform(10.0))), EdgeInsets::all(10.0));
    }

    #[test]
    fn stroke_grows_only_stroked_edges() {
        let edges = EdgeMask::TOP | EdgeMask::LEFT | EdgeMask::RIGHT;
        let l = TileLayout::new(Some(&Rounding::uniform(10.0)), 4.0, edges);
        assert_eq!(l.canvas, Vec2::new(25.0, 23.0));
        assert_eq!(l.shape, Rect::new(2.0, 2.0, 21.0, 21.0));
        assert_eq!(
            l.cap_insets(Some(&Rounding::uniform(10.0))),
            EdgeInsets::new(12.0, 12.0, 10.0, 12.0)
        );
    }

    #[test]
    #[should_panic(expected = "corner radius")]
    fn negative_raw_radius_is_rejected() {
        TileLayout::new(Some(&Rounding::Uniform(-5.0)), 0.0, EdgeMask::all());
    }

    #[test]
    fn no_rounding_is_single_unit() {
        let l = TileLayout::new(None, 0.0, EdgeMask::all());
        assert_eq!(l.canvas, Vec2::new(1.0, 1.0));
        assert_eq!(l.cap_insets(None), EdgeInsets::zero());
    }
}
