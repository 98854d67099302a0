use super::Color;

/// Stroke drawn centered on the outline of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    /// # Panics
    /// If `width` is negative or not finite.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        assert!(width.is_finite() && width >= 0.0, "stroke width must be >= 0, got {width}");
        Self { color, width }
    }

    /// A zero-width stroke draws nothing.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

/// Fill and stroke applied to a rounded-rect tile.
///
/// Fill always covers the whole shape; the stroke may be restricted to a
/// subset of edges by the caller.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShapePaint {
    /// `None` leaves the interior transparent.
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl ShapePaint {
    #[inline]
    pub fn new(fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { fill, stroke }
    }

    #[inline]
    pub fn fill(color: Color) -> Self {
        Self { fill: Some(color), stroke: None }
    }

    #[inline]
    pub fn stroke(color: Color, width: f32) -> Self {
        Self { fill: None, stroke: Some(Stroke::new(color, width)) }
    }

    #[inline]
    #[must_use]
    pub fn with_stroke(self, color: Color, width: f32) -> Self {
        Self { stroke: Some(Stroke::new(color, width)), ..self }
    }

    /// The stroke, unless absent or zero width.
    #[inline]
    pub fn active_stroke(&self) -> Option<Stroke> {
        self.stroke.filter(Stroke::is_visible)
    }

    /// Width that shapes the tile layout; 0 without a stroke.
    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke.map_or(0.0, |s| s.width)
    }
}
