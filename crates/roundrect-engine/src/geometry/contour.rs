use core::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::{Rect, Vec2};

/// Lines shorter than this are dropped while building contours.
const MIN_SEGMENT: f32 = 1e-5;

/// Sweeps within this of a full turn are treated as empty.
const SWEEP_EPS: f32 = 1e-4;

// ── Arc ───────────────────────────────────────────────────────────────────

/// Circular arc segment.
///
/// Angles are `atan2(dy, dx)` around `center` in +Y-down space. A positive
/// `sweep` turns clockwise on screen, a negative one anticlockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
    // Exact endpoints the arc was built from, so neighbours that share a
    // point compare equal instead of drifting through sin/cos.
    from: Vec2,
    to: Vec2,
}

impl Arc {
    /// Arc around `center` from the direction of `from` to the direction of
    /// `to`, turning the requested way.
    ///
    /// Both angles come from `atan2` of the actual points, so the sweep sign
    /// never depends on which quadrant the corner sits in.
    pub fn between(center: Vec2, radius: f32, from: Vec2, to: Vec2, clockwise: bool) -> Self {
        let start_angle = (from - center).angle();
        let end_angle = (to - center).angle();
        let sweep = normalize_sweep(end_angle - start_angle, clockwise);
        Self { center, radius, start_angle, sweep, from, to }
    }

    #[inline]
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep
    }

    #[inline]
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.from
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.to
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.sweep > 0.0
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.sweep.abs() * self.radius
    }

    /// Bounding box, including any axis extremes the arc passes through.
    pub fn bounds(&self) -> Rect {
        let (lo, hi) = if self.sweep >= 0.0 {
            (self.start_angle, self.end_angle())
        } else {
            (self.end_angle(), self.start_angle)
        };
        let mut b = Rect::from_origin_size(self.start_point(), Vec2::zero()).include(self.end_point());
        // First multiple of π/2 at or above `lo`.
        let mut a = (lo / FRAC_PI_2).ceil() * FRAC_PI_2;
        while a <= hi {
            b = b.include(self.point_at(a));
            a += FRAC_PI_2;
        }
        b
    }
}

/// Folds a raw angle delta into a single turn in the requested direction:
/// `[0, 2π)` clockwise, `(-2π, 0]` anticlockwise.
pub(crate) fn normalize_sweep(delta: f32, clockwise: bool) -> f32 {
    let mut d = delta.rem_euclid(TAU);
    if d < SWEEP_EPS || d > TAU - SWEEP_EPS {
        d = 0.0;
    }
    if clockwise || d == 0.0 { d } else { d - TAU }
}

// ── Segment ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Line { to: Vec2 },
    Arc(Arc),
}

impl Segment {
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        match self {
            Segment::Line { to } => *to,
            Segment::Arc(arc) => arc.end_point(),
        }
    }
}

// ── Contour ───────────────────────────────────────────────────────────────

/// One connected run of lines and arcs.
///
/// Closed contours are fill outlines (or a stroke around every edge); open
/// contours are partial strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    start: Vec2,
    segments: Vec<Segment>,
    closed: bool,
}

impl Contour {
    #[inline]
    pub fn new(start: Vec2) -> Self {
        Self { start, segments: Vec::new(), closed: false }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Where the pen currently is.
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.segments.last().map_or(self.start, Segment::end_point)
    }

    /// Straight segment to `to`. Zero-length lines are skipped.
    pub fn line_to(&mut self, to: Vec2) {
        if self.end_point().distance(to) > MIN_SEGMENT {
            self.segments.push(Segment::Line { to });
        }
    }

    /// Appends `arc`, bridging any gap from the pen with a line. Empty arcs
    /// are skipped.
    pub fn arc(&mut self, arc: Arc) {
        if arc.radius <= 0.0 || arc.sweep == 0.0 {
            return;
        }
        self.line_to(arc.start_point());
        self.segments.push(Segment::Arc(arc));
    }

    /// Joins the end back to the start.
    pub fn close(&mut self) {
        self.line_to(self.start);
        self.closed = true;
    }

    /// Appends `other`, which must start where `self` ends.
    pub(crate) fn extend(&mut self, other: Contour) {
        debug_assert!(
            self.end_point().approx_eq(other.start, 1e-3),
            "contours do not meet: {:?} vs {:?}",
            self.end_point(),
            other.start
        );
        self.segments.extend(other.segments);
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Arc(a) => Some(a),
            Segment::Line { .. } => None,
        })
    }

    /// `(from, to)` for every straight segment.
    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        let mut pen = self.start;
        let mut out = Vec::new();
        for s in &self.segments {
            if let Segment::Line { to } = *s {
                out.push((pen, to));
            }
            pen = s.end_point();
        }
        out
    }

    /// Tight bounding box of the outline.
    pub fn bounds(&self) -> Rect {
        self.segments.iter().fold(Rect::from_origin_size(self.start, Vec2::zero()), |b, s| match s {
            Segment::Line { to } => b.include(*to),
            Segment::Arc(a) => b.union(a.bounds()),
        })
    }

    /// Total arc length of the outline.
    pub fn length(&self) -> f32 {
        let lines: f32 = self.lines().iter().map(|(a, b)| a.distance(*b)).sum();
        lines + self.arcs().map(Arc::length).sum::<f32>()
    }
}
