use crate::coords::{Rect, Vec2};

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Gradient axis in unit space: `(0, 0)` is the top-left of the filled
/// rectangle, `(1, 1)` its bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientDirection {
    pub start: Vec2,
    pub end: Vec2,
}

impl GradientDirection {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Left edge to right edge.
    #[inline]
    pub const fn horizontal() -> Self {
        Self::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0))
    }

    /// Top edge to bottom edge.
    #[inline]
    pub const fn vertical() -> Self {
        Self::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0))
    }

    /// Top-left corner to bottom-right corner.
    #[inline]
    pub const fn diagonal() -> Self {
        Self::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0))
    }

    /// Maps the unit-space axis onto `rect`.
    #[inline]
    pub fn resolve(self, rect: Rect) -> (Vec2, Vec2) {
        let map = |p: Vec2| Vec2::new(rect.origin.x + p.x * rect.size.x, rect.origin.y + p.y * rect.size.y);
        (map(self.start), map(self.end))
    }
}

impl Default for GradientDirection {
    fn default() -> Self {
        Self::horizontal()
    }
}

/// Linear gradient definition in unit space.
///
/// Semantics:
/// - `direction` is resolved against the rectangle being filled.
/// - Stops define premultiplied colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub direction: GradientDirection,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(direction: GradientDirection, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { direction, stops, spread }
    }

    /// Spaces `colors` evenly from `t = 0` to `t = 1`.
    ///
    /// # Panics
    /// With fewer than two colors.
    pub fn evenly_spaced(colors: &[Color], direction: GradientDirection) -> Self {
        assert!(colors.len() >= 2, "gradient needs at least 2 colors, got {}", colors.len());
        let last = (colors.len() - 1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &c)| ColorStop::new(i as f32 / last, c))
            .collect();
        Self::new(direction, stops, SpreadMode::Pad)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        let GradientDirection { start, end } = self.direction;
        start.is_finite()
            && end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && start != end
    }

    /// True when every stop is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.stops.iter().all(|s| s.color.a >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_three_colors() {
        let g = LinearGradient::evenly_spaced(
            &[Color::black(), Color::white(), Color::black()],
            GradientDirection::default(),
        );
        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
        assert!(g.is_valid());
        assert!(g.is_opaque());
    }

    #[test]
    #[should_panic(expected = "at least 2 colors")]
    fn single_color_is_rejected() {
        LinearGradient::evenly_spaced(&[Color::black()], GradientDirection::default());
    }

    #[test]
    fn degenerate_direction_is_invalid() {
        let dir = GradientDirection::new(Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.5));
        let g = LinearGradient::evenly_spaced(&[Color::black(), Color::white()], dir);
        assert!(!g.is_valid());
    }

    #[test]
    fn resolve_maps_unit_space() {
        let (s, e) = GradientDirection::diagonal().resolve(Rect::new(10.0, 20.0, 50.0, 70.0));
        assert_eq!(s, Vec2::new(10.0, 20.0));
        assert_eq!(e, Vec2::new(60.0, 90.0));
    }
}
