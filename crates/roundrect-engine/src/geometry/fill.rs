use crate::coords::{Corner, Edge, Rect};

use super::contour::{Arc, Contour};
use super::outline::Outline;
use super::rounding::{Rounding, radii_of};

/// Closed outline of `rect` with the corners of `rounding`.
///
/// Walks clockwise from the top-left end of the top edge: top edge, top-right
/// arc, right edge, bottom-right arc, and so on, then closes. Sharp corners
/// emit no arc, so a square rounding yields the plain rectangle as four
/// lines.
///
/// # Panics
/// If a radius is negative or two adjacent radii overflow their edge.
pub fn fill_contour(rect: Rect, rounding: Option<&Rounding>) -> Contour {
    let outline = Outline::new(rect, radii_of(rounding));
    let contour = trace_clockwise(&outline);
    log::trace!(
        "fill contour for {rect:?}: {} segments, {} arcs",
        contour.segments().len(),
        contour.arcs().count()
    );
    contour
}

fn trace_clockwise(o: &Outline) -> Contour {
    let mut contour = Contour::new(o.tangent(Corner::TopLeft, Edge::Top));
    for corner in Corner::CLOCKWISE {
        let (incoming, outgoing) = match corner {
            Corner::TopRight => (Edge::Top, Edge::Right),
            Corner::BottomRight => (Edge::Right, Edge::Bottom),
            Corner::BottomLeft => (Edge::Bottom, Edge::Left),
            Corner::TopLeft => (Edge::Left, Edge::Top),
        };
        let from = o.tangent(corner, incoming);
        contour.line_to(from);
        if o.is_rounded(corner) {
            let to = o.tangent(corner, outgoing);
            contour.arc(Arc::between(o.pivot(corner), o.radius(corner), from, to, true));
        }
    }
    contour.close();
    contour
}
