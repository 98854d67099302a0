use super::{EdgeInsets, Vec2};

/// Axis-aligned rectangle in logical units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn top_left(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn top_right(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y)
    }

    #[inline]
    pub fn bottom_right(self) -> Vec2 {
        self.max()
    }

    #[inline]
    pub fn bottom_left(self) -> Vec2 {
        Vec2::new(self.origin.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Shrinks the rect by `insets` on each side. Negative insets grow it.
    #[inline]
    #[must_use]
    pub fn inset(self, insets: EdgeInsets) -> Self {
        Rect::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            self.size.x - insets.h(),
            self.size.y - insets.v(),
        )
    }

    #[inline]
    #[must_use]
    pub fn offset(self, d: Vec2) -> Self {
        Self::from_origin_size(self.origin + d, self.size)
    }

    /// Smallest rect containing both.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        let x0 = self.origin.x.min(other.origin.x);
        let y0 = self.origin.y.min(other.origin.y);
        let x1 = self.max().x.max(other.max().x);
        let y1 = self.max().y.max(other.max().y);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Grows the rect to include `p`.
    #[inline]
    pub fn include(self, p: Vec2) -> Rect {
        self.union(Rect::from_origin_size(p, Vec2::zero()))
    }

    /// Component-wise comparison within `eps`.
    #[inline]
    pub fn approx_eq(self, other: Rect, eps: f32) -> bool {
        self.origin.approx_eq(other.origin, eps) && self.size.approx_eq(other.size, eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── corners ───────────────────────────────────────────────────────────

    #[test]
    fn corner_points() {
        let rect = r(2.0, 3.0, 10.0, 20.0);
        assert_eq!(rect.top_left(), Vec2::new(2.0, 3.0));
        assert_eq!(rect.top_right(), Vec2::new(12.0, 3.0));
        assert_eq!(rect.bottom_right(), Vec2::new(12.0, 23.0));
        assert_eq!(rect.bottom_left(), Vec2::new(2.0, 23.0));
        assert_eq!(rect.center(), Vec2::new(7.0, 13.0));
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_asymmetric() {
        let rect = r(5.0, 5.0, 100.0, 60.0);
        let insets = EdgeInsets::new(4.0, 6.0, 8.0, 10.0);
        let inner = rect.inset(insets);
        assert_eq!(inner, r(11.0, 9.0, 84.0, 48.0));
    }

    #[test]
    fn negative_inset_grows() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.inset(EdgeInsets::all(-2.0)), r(-2.0, -2.0, 14.0, 14.0));
    }

    // ── union / include ───────────────────────────────────────────────────

    #[test]
    fn include_point_outside() {
        let rect = r(0.0, 0.0, 5.0, 5.0).include(Vec2::new(8.0, -1.0));
        assert_eq!(rect, r(0.0, -1.0, 8.0, 6.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
