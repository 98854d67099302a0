use crate::coords::{Corner, CornerMask, CornerRadii, EdgeInsets};

/// Which corners of a rectangle are rounded, and by how much.
///
/// The radius is shared by every rounded corner; corners outside the set
/// are sharp.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Rounding {
    /// Every corner rounded by the radius.
    Uniform(f32),
    /// Only `corners` are rounded, each by `radius`.
    PerCorner { corners: CornerMask, radius: f32 },
}

impl Rounding {
    /// # Panics
    /// If `radius` is negative or not finite.
    #[inline]
    pub fn uniform(radius: f32) -> Self {
        assert_radius(radius);
        Rounding::Uniform(radius)
    }

    /// # Panics
    /// If `radius` is negative or not finite.
    #[inline]
    pub fn per_corner(corners: CornerMask, radius: f32) -> Self {
        assert_radius(radius);
        Rounding::PerCorner { corners, radius }
    }

    #[inline]
    pub fn corners(&self) -> CornerMask {
        match *self {
            Rounding::Uniform(_) => CornerMask::all(),
            Rounding::PerCorner { corners, .. } => corners,
        }
    }

    /// The shared radius, also the largest per-corner radius when any
    /// corner is selected.
    #[inline]
    pub fn radius(&self) -> f32 {
        match *self {
            Rounding::Uniform(r) => r,
            Rounding::PerCorner { radius, .. } => radius,
        }
    }

    /// Radius of `corner`, or `None` when it is not rounded.
    #[inline]
    pub fn radius_for(&self, corner: Corner) -> Option<f32> {
        self.corners().contains(corner.mask()).then(|| self.radius())
    }

    /// Per-corner radii with zero for unrounded corners.
    pub fn radii(&self) -> CornerRadii {
        let r = |c| self.radius_for(c).unwrap_or(0.0);
        CornerRadii::new(r(Corner::TopLeft), r(Corner::TopRight), r(Corner::BottomRight), r(Corner::BottomLeft))
    }

    /// Room the corners need on each side of a canvas.
    #[inline]
    pub fn insets(&self) -> EdgeInsets {
        EdgeInsets::all(self.radius())
    }

    /// True when no corner ends up with a non-zero radius.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.radii().is_zero()
    }

    /// Same corners with the radius capped at `max`.
    #[must_use]
    pub fn clamped(&self, max: f32) -> Self {
        match *self {
            Rounding::Uniform(r) => Rounding::Uniform(r.min(max)),
            Rounding::PerCorner { corners, radius } => Rounding::PerCorner { corners, radius: radius.min(max) },
        }
    }
}

/// Radii of an optional rounding; `None` is four sharp corners.
#[inline]
pub fn radii_of(rounding: Option<&Rounding>) -> CornerRadii {
    rounding.map_or(CornerRadii::zero(), Rounding::radii)
}

#[inline]
pub(crate) fn assert_radius(radius: f32) {
    assert!(radius.is_finite() && radius >= 0.0, "corner radius must be >= 0, got {radius}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_covers_all_corners() {
        let r = Rounding::uniform(10.0);
        for c in Corner::CLOCKWISE {
            assert_eq!(r.radius_for(c), Some(10.0));
        }
        assert_eq!(r.insets(), EdgeInsets::all(10.0));
    }

    #[test]
    fn per_corner_leaves_others_sharp() {
        let r = Rounding::per_corner(CornerMask::TOP_LEFT | CornerMask::TOP_RIGHT, 6.0);
        assert_eq!(r.radius_for(Corner::TopLeft), Some(6.0));
        assert_eq!(r.radius_for(Corner::BottomLeft), None);
        assert_eq!(r.radii(), CornerRadii::new(6.0, 6.0, 0.0, 0.0));
        // Insets stay symmetric: the canvas is square around the largest radius.
        assert_eq!(r.insets(), EdgeInsets::all(6.0));
    }

    #[test]
    fn uniform_matches_full_subset() {
        assert_eq!(Rounding::uniform(4.0).radii(), Rounding::per_corner(CornerMask::all(), 4.0).radii());
    }

    #[test]
    fn zero_radius_or_empty_mask_is_square() {
        assert!(Rounding::uniform(0.0).is_square());
        assert!(Rounding::per_corner(CornerMask::empty(), 8.0).is_square());
        assert!(!Rounding::uniform(1.0).is_square());
        assert!(radii_of(None).is_zero());
    }

    #[test]
    fn clamped_caps_radius_and_keeps_corners() {
        let r = Rounding::per_corner(CornerMask::BOTTOM_LEFT, 30.0).clamped(25.0);
        assert_eq!(r, Rounding::per_corner(CornerMask::BOTTOM_LEFT, 25.0));
        assert_eq!(Rounding::uniform(4.0).clamped(25.0), Rounding::uniform(4.0));
    }

    #[test]
    #[should_panic(expected = "corner radius")]
    fn negative_radius_is_rejected() {
        Rounding::uniform(-1.0);
    }

    #[test]
    #[should_panic(expected = "corner radius")]
    fn nan_radius_is_rejected() {
        Rounding::per_corner(CornerMask::TOP_LEFT, f32::NAN);
    }
}
