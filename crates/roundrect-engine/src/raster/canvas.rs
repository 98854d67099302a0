use core::f32::consts::FRAC_PI_2;

use tiny_skia::{FillRule, Mask, Paint, PathBuilder, Pixmap, Transform};

use crate::coords::{Rect, Vec2};
use crate::geometry::{Arc, Contour, Segment};
use crate::paint::{Color, LinearGradient, SpreadMode, Stroke};

use super::{RasterConfig, RasterError};

/// Offscreen drawing surface for a single tile.
///
/// Drawing happens in logical units; the canvas scales to device pixels.
/// Each call gets its own canvas, so tiles can be produced on any thread.
pub(crate) struct Canvas {
    pixmap: Pixmap,
    transform: Transform,
    anti_alias: bool,
}

impl Canvas {
    /// Transparent canvas covering `size` logical units.
    pub fn new(size: Vec2, config: &RasterConfig) -> Result<Self, RasterError> {
        config.validate();
        let (width, height) = (config.to_px(size.x), config.to_px(size.y));
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::EmptyCanvas { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::from_scale(config.scale, config.scale),
            anti_alias: config.anti_alias,
        })
    }

    #[inline]
    fn paint(&self) -> Paint<'static> {
        Paint { anti_alias: self.anti_alias, ..Paint::default() }
    }

    /// Fills the union of `contours` with nonzero winding.
    pub fn fill(&mut self, contours: &[Contour], color: Color) -> Result<(), RasterError> {
        let path = build_path(contours).ok_or(RasterError::DegeneratePath)?;
        let mut paint = self.paint();
        paint.set_color(to_skia_color(color));
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, self.transform, None);
        Ok(())
    }

    /// Strokes `contours` centered on their lines, with butt caps and miter
    /// joins. An empty list draws nothing.
    pub fn stroke(&mut self, contours: &[Contour], stroke: Stroke) -> Result<(), RasterError> {
        if contours.iter().all(Contour::is_empty) {
            return Ok(());
        }
        let path = build_path(contours).ok_or(RasterError::DegeneratePath)?;
        let mut paint = self.paint();
        paint.set_color(to_skia_color(stroke.color));
        let style = tiny_skia::Stroke {
            width: stroke.width,
            line_cap: tiny_skia::LineCap::Butt,
            line_join: tiny_skia::LineJoin::Miter,
            ..tiny_skia::Stroke::default()
        };
        self.pixmap.stroke_path(&path, &paint, &style, self.transform, None);
        Ok(())
    }

    /// Paints `rect` with `gradient`, its axis resolved against `rect`.
    pub fn fill_gradient(&mut self, rect: Rect, gradient: &LinearGradient) -> Result<(), RasterError> {
        if !gradient.is_valid() {
            return Err(RasterError::InvalidGradient);
        }
        let (start, end) = gradient.direction.resolve(rect);
        let stops = gradient
            .stops
            .iter()
            .map(|s| tiny_skia::GradientStop::new(s.t, to_skia_color(s.color)))
            .collect();
        let spread = match gradient.spread {
            SpreadMode::Pad => tiny_skia::SpreadMode::Pad,
            SpreadMode::Repeat => tiny_skia::SpreadMode::Repeat,
            SpreadMode::Reflect => tiny_skia::SpreadMode::Reflect,
        };
        let shader = tiny_skia::LinearGradient::new(
            tiny_skia::Point::from_xy(start.x, start.y),
            tiny_skia::Point::from_xy(end.x, end.y),
            stops,
            spread,
            Transform::identity(),
        )
        .ok_or(RasterError::InvalidGradient)?;

        let area = tiny_skia::Rect::from_xywh(rect.origin.x, rect.origin.y, rect.width(), rect.height())
            .ok_or(RasterError::DegeneratePath)?;
        let paint = Paint { shader, ..self.paint() };
        self.pixmap.fill_rect(area, &paint, self.transform, None);
        Ok(())
    }

    /// Keeps only what lies inside `outline`, weighted by its coverage.
    ///
    /// The outline is drawn into a separate mask layer first so the painted
    /// content never sees the clip edge.
    pub fn clip_to(&mut self, outline: &Contour) -> Result<(), RasterError> {
        let path = build_path(core::slice::from_ref(outline)).ok_or(RasterError::DegeneratePath)?;
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut mask = Mask::new(width, height).ok_or(RasterError::EmptyCanvas { width, height })?;
        mask.fill_path(&path, FillRule::Winding, self.anti_alias, self.transform);
        self.pixmap.apply_mask(&mask);
        Ok(())
    }

    #[inline]
    pub fn finish(self) -> Pixmap {
        self.pixmap
    }
}

#[inline]
fn to_skia_color(color: Color) -> tiny_skia::Color {
    let (r, g, b, a) = color.to_straight();
    tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::TRANSPARENT)
}

// ── path conversion ───────────────────────────────────────────────────────

/// Converts contours to one tiny-skia path. `None` if nothing drawable is left.
pub(crate) fn build_path(contours: &[Contour]) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for contour in contours.iter().filter(|c| !c.is_empty()) {
        let start = contour.start();
        pb.move_to(start.x, start.y);
        for segment in contour.segments() {
            match segment {
                Segment::Line { to } => pb.line_to(to.x, to.y),
                Segment::Arc(arc) => append_arc(&mut pb, arc),
            }
        }
        if contour.is_closed() {
            pb.close();
        }
    }
    pb.finish()
}

/// Cubic approximation of `arc`, at most a quarter turn per piece.
fn append_arc(pb: &mut PathBuilder, arc: &Arc) {
    let pieces = (arc.sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = arc.sweep / pieces as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan() * arc.radius;

    let mut a0 = arc.start_angle;
    let mut p0 = arc.start_point();
    for i in 0..pieces {
        let a1 = a0 + step;
        let p3 = if i + 1 == pieces { arc.end_point() } else { arc.point_at(a1) };
        let c1 = p0 + tangent(a0) * k;
        let c2 = p3 - tangent(a1) * k;
        pb.cubic_to(c1.x, c1.y, c2.x, c2.y, p3.x, p3.y);
        a0 = a1;
        p0 = p3;
    }
}

/// Unit tangent in the direction of increasing angle.
#[inline]
fn tangent(angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(-s, c)
}
