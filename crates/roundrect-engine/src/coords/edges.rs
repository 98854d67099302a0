use bitflags::bitflags;

// ── EdgeInsets ────────────────────────────────────────────────────────────

/// Distances on all four sides (cap insets, paddings, stroke outsets).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    #[inline]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self { top, left, bottom, right }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub const fn all(v: f32) -> Self {
        Self { top: v, left: v, bottom: v, right: v }
    }

    /// `v` on every edge in `edges`, zero elsewhere.
    pub fn on_edges(v: f32, edges: EdgeMask) -> Self {
        let pick = |e: EdgeMask| if edges.contains(e) { v } else { 0.0 };
        Self {
            top: pick(EdgeMask::TOP),
            left: pick(EdgeMask::LEFT),
            bottom: pick(EdgeMask::BOTTOM),
            right: pick(EdgeMask::RIGHT),
        }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.top.is_finite() && self.left.is_finite() && self.bottom.is_finite() && self.right.is_finite()
    }
}

// ── edge / corner sets ────────────────────────────────────────────────────

bitflags! {
    /// Set of rectangle edges that carry a stroke.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct EdgeMask: u8 {
        const TOP = 1 << 0;
        const LEFT = 1 << 1;
        const BOTTOM = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Default for EdgeMask {
    fn default() -> Self {
        EdgeMask::all()
    }
}

bitflags! {
    /// Set of rectangle corners.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct CornerMask: u8 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_RIGHT = 1 << 2;
        const BOTTOM_LEFT = 1 << 3;
    }
}

// ── named edges / corners ─────────────────────────────────────────────────

/// A single rectangle corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Clockwise order starting at the top-right corner.
    pub const CLOCKWISE: [Corner; 4] =
        [Corner::TopRight, Corner::BottomRight, Corner::BottomLeft, Corner::TopLeft];

    #[inline]
    pub fn mask(self) -> CornerMask {
        match self {
            Corner::TopLeft => CornerMask::TOP_LEFT,
            Corner::TopRight => CornerMask::TOP_RIGHT,
            Corner::BottomRight => CornerMask::BOTTOM_RIGHT,
            Corner::BottomLeft => CornerMask::BOTTOM_LEFT,
        }
    }

    /// Unit signs pointing from the corner towards the rect interior.
    #[inline]
    pub(crate) fn inward(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (1.0, 1.0),
            Corner::TopRight => (-1.0, 1.0),
            Corner::BottomRight => (-1.0, -1.0),
            Corner::BottomLeft => (1.0, -1.0),
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }
}

/// A single rectangle edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    /// Anticlockwise traversal order used for stroking.
    pub const ANTICLOCKWISE: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    #[inline]
    pub fn mask(self) -> EdgeMask {
        match self {
            Edge::Top => EdgeMask::TOP,
            Edge::Left => EdgeMask::LEFT,
            Edge::Bottom => EdgeMask::BOTTOM,
            Edge::Right => EdgeMask::RIGHT,
        }
    }

    /// `(origin, destination)` corners when walking the edge anticlockwise.
    #[inline]
    pub fn anticlockwise_corners(self) -> (Corner, Corner) {
        match self {
            Edge::Top => (Corner::TopRight, Corner::TopLeft),
            Edge::Left => (Corner::TopLeft, Corner::BottomLeft),
            Edge::Bottom => (Corner::BottomLeft, Corner::BottomRight),
            Edge::Right => (Corner::BottomRight, Corner::TopRight),
        }
    }

    /// Next edge in anticlockwise order.
    #[inline]
    pub fn next_anticlockwise(self) -> Edge {
        match self {
            Edge::Top => Edge::Left,
            Edge::Left => Edge::Bottom,
            Edge::Bottom => Edge::Right,
            Edge::Right => Edge::Top,
        }
    }

    #[inline]
    pub fn prev_anticlockwise(self) -> Edge {
        match self {
            Edge::Top => Edge::Right,
            Edge::Left => Edge::Top,
            Edge::Bottom => Edge::Left,
            Edge::Right => Edge::Bottom,
        }
    }
}
