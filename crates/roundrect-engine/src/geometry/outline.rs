use core::f32::consts::FRAC_1_SQRT_2;

use crate::coords::{Corner, CornerRadii, Edge, Rect, Vec2};

/// Per-corner geometry of one rounded rect, computed once and shared by the
/// fill and stroke builders so that every edge derives its arc endpoints
/// from the same pivots.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Outline {
    pub rect: Rect,
    pub radii: CornerRadii,
    corners: [CornerGeom; 4],
}

#[derive(Debug, Copy, Clone)]
struct CornerGeom {
    /// The sharp corner of `rect`.
    point: Vec2,
    radius: f32,
    /// Arc center, `radius` inward from `point` on both axes.
    pivot: Vec2,
    /// Arc point on the top/bottom edge.
    tangent_h: Vec2,
    /// Arc point on the left/right edge.
    tangent_v: Vec2,
    /// 45° point of the arc, where two stroked edges meet.
    mid: Vec2,
}

impl Outline {
    /// # Panics
    /// On a negative, non-finite or oversized radius, or a rect with
    /// negative size.
    pub fn new(rect: Rect, radii: CornerRadii) -> Self {
        assert!(
            rect.is_finite() && rect.size.x >= 0.0 && rect.size.y >= 0.0,
            "rect must be finite with non-negative size, got {rect:?}"
        );
        for c in Corner::CLOCKWISE {
            let r = radii.get(c);
            assert!(r.is_finite() && r >= 0.0, "corner radius must be >= 0, got {r} at {c:?}");
        }
        let fits = |a: f32, b: f32, len: f32| a + b <= len + 1e-4;
        assert!(
            fits(radii.top_left, radii.top_right, rect.width())
                && fits(radii.bottom_left, radii.bottom_right, rect.width())
                && fits(radii.top_left, radii.bottom_left, rect.height())
                && fits(radii.top_right, radii.bottom_right, rect.height()),
            "corner radii {radii:?} do not fit in {rect:?}"
        );

        let geom = |corner: Corner, point: Vec2| {
            let radius = radii.get(corner);
            let (sx, sy) = corner.inward();
            let pivot = point + Vec2::new(sx, sy) * radius;
            CornerGeom {
                point,
                radius,
                pivot,
                tangent_h: Vec2::new(pivot.x, point.y),
                tangent_v: Vec2::new(point.x, pivot.y),
                mid: pivot - Vec2::new(sx, sy) * (radius * FRAC_1_SQRT_2),
            }
        };

        Self {
            rect,
            radii,
            corners: [
                geom(Corner::TopLeft, rect.top_left()),
                geom(Corner::TopRight, rect.top_right()),
                geom(Corner::BottomRight, rect.bottom_right()),
                geom(Corner::BottomLeft, rect.bottom_left()),
            ],
        }
    }

    #[inline]
    fn corner(&self, c: Corner) -> &CornerGeom {
        &self.corners[c.index()]
    }

    #[inline]
    pub fn point(&self, c: Corner) -> Vec2 {
        self.corner(c).point
    }

    #[inline]
    pub fn radius(&self, c: Corner) -> f32 {
        self.corner(c).radius
    }

    #[inline]
    pub fn is_rounded(&self, c: Corner) -> bool {
        self.corner(c).radius > 0.0
    }

    #[inline]
    pub fn pivot(&self, c: Corner) -> Vec2 {
        self.corner(c).pivot
    }

    #[inline]
    pub fn mid(&self, c: Corner) -> Vec2 {
        self.corner(c).mid
    }

    /// Where the arc of `c` touches `edge`. Equals the corner point when
    /// the corner is sharp.
    #[inline]
    pub fn tangent(&self, c: Corner, edge: Edge) -> Vec2 {
        let g = self.corner(c);
        match edge {
            Edge::Top | Edge::Bottom => g.tangent_h,
            Edge::Left | Edge::Right => g.tangent_v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivots_sit_radius_inward() {
        let o = Outline::new(Rect::new(0.0, 0.0, 40.0, 30.0), CornerRadii::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(o.pivot(Corner::TopLeft), Vec2::new(1.0, 1.0));
        assert_eq!(o.pivot(Corner::TopRight), Vec2::new(38.0, 2.0));
        assert_eq!(o.pivot(Corner::BottomRight), Vec2::new(37.0, 27.0));
        assert_eq!(o.pivot(Corner::BottomLeft), Vec2::new(4.0, 26.0));
    }

    #[test]
    fn tangents_lie_on_their_edges() {
        let o = Outline::new(Rect::new(0.0, 0.0, 40.0, 30.0), CornerRadii::all(5.0));
        assert_eq!(o.tangent(Corner::TopRight, Edge::Top), Vec2::new(35.0, 0.0));
        assert_eq!(o.tangent(Corner::TopRight, Edge::Right), Vec2::new(40.0, 5.0));
        assert_eq!(o.tangent(Corner::BottomLeft, Edge::Bottom), Vec2::new(5.0, 30.0));
        assert_eq!(o.tangent(Corner::BottomLeft, Edge::Left), Vec2::new(0.0, 25.0));
    }

    #[test]
    fn mid_is_on_the_arc() {
        let o = Outline::new(Rect::new(0.0, 0.0, 20.0, 20.0), CornerRadii::all(5.0));
        for c in Corner::CLOCKWISE {
            assert!((o.mid(c).distance(o.pivot(c)) - 5.0).abs() < 1e-4);
            assert!(o.mid(c).distance(o.point(c)) < o.pivot(c).distance(o.point(c)));
        }
    }

    #[test]
    fn sharp_corner_collapses_to_point() {
        let o = Outline::new(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::zero());
        assert_eq!(o.tangent(Corner::BottomRight, Edge::Bottom), Vec2::new(10.0, 10.0));
        assert_eq!(o.mid(Corner::BottomRight), Vec2::new(10.0, 10.0));
        assert!(!o.is_rounded(Corner::BottomRight));
    }

    #[test]
    #[should_panic(expected = "do not fit")]
    fn oversized_radii_are_rejected() {
        Outline::new(Rect::new(0.0, 0.0, 10.0, 30.0), CornerRadii::all(6.0));
    }
}
