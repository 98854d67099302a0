use crate::coords::{Edge, EdgeMask, Rect};

use super::contour::{Arc, Contour};
use super::outline::Outline;
use super::rounding::{Rounding, radii_of};

/// Stroke centerlines for the edges in `edges`.
///
/// Edges are walked anticlockwise (top, left, bottom, right). Each edge owns
/// half of the arc at either end, split at the arc's 45° point, so two
/// stroked neighbours meet on exactly the same point. Consecutive stroked
/// edges are merged into one contour:
///
/// - every edge stroked: one closed contour
/// - `TOP | BOTTOM`: two open contours
/// - `TOP | LEFT | RIGHT`: one open contour running right, top, left
///
/// With a partial mask, a run that ends on a sharp corner is carried
/// `stroke_width / 2` past the corner so the butt cap squares off the corner
/// instead of leaving a notch.
///
/// # Panics
/// On a negative stroke width, or the same radius violations as
/// [`fill_contour`](super::fill_contour).
pub fn stroke_contours(rect: Rect, rounding: Option<&Rounding>, edges: EdgeMask, stroke_width: f32) -> Vec<Contour> {
    assert!(
        stroke_width.is_finite() && stroke_width >= 0.0,
        "stroke width must be >= 0, got {stroke_width}"
    );
    let outline = Outline::new(rect, radii_of(rounding));

    if edges.is_all() {
        let mut contour = edge_piece(&outline, Edge::Top, 0.0, 0.0);
        for edge in [Edge::Left, Edge::Bottom, Edge::Right] {
            contour.extend(edge_piece(&outline, edge, 0.0, 0.0));
        }
        contour.close();
        log::trace!("stroke contour for {rect:?}: closed, {} segments", contour.segments().len());
        return vec![contour];
    }

    let half = stroke_width * 0.5;
    let contours: Vec<Contour> = runs(edges)
        .into_iter()
        .filter_map(|run| {
            let last = run.len().checked_sub(1)?;
            let mut pieces = run.iter().enumerate().map(|(i, &edge)| {
                let lead = if i == 0 { half } else { 0.0 };
                let trail = if i == last { half } else { 0.0 };
                edge_piece(&outline, edge, lead, trail)
            });
            let mut contour = pieces.next()?;
            pieces.for_each(|p| contour.extend(p));
            Some(contour)
        })
        .collect();

    log::trace!("stroke contours for {rect:?} edges {edges:?}: {} runs", contours.len());
    contours
}

/// Maximal runs of stroked edges in anticlockwise order. Only called for
/// partial masks, so every run has a start whose predecessor is unstroked.
fn runs(edges: EdgeMask) -> Vec<Vec<Edge>> {
    Edge::ANTICLOCKWISE
        .into_iter()
        .filter(|e| edges.contains(e.mask()) && !edges.contains(e.prev_anticlockwise().mask()))
        .map(|start| {
            let mut run = vec![start];
            let mut e = start.next_anticlockwise();
            while edges.contains(e.mask()) && e != start {
                run.push(e);
                e = e.next_anticlockwise();
            }
            run
        })
        .collect()
}

/// Centerline of one edge, from its origin corner to its destination corner
/// (anticlockwise). `lead`/`trail` extend the ends past sharp corners.
fn edge_piece(o: &Outline, edge: Edge, lead: f32, trail: f32) -> Contour {
    let (origin, destination) = edge.anticlockwise_corners();
    let dir = (o.point(destination) - o.point(origin)).normalized();

    let mut contour = if o.is_rounded(origin) {
        let mut c = Contour::new(o.mid(origin));
        let to = o.tangent(origin, edge);
        c.arc(Arc::between(o.pivot(origin), o.radius(origin), o.mid(origin), to, false));
        c
    } else {
        Contour::new(o.point(origin) - dir * lead)
    };

    let end = o.tangent(destination, edge);
    if o.is_rounded(destination) {
        contour.line_to(end);
        contour.arc(Arc::between(o.pivot(destination), o.radius(destination), end, o.mid(destination), false));
    } else {
        contour.line_to(end + dir * trail);
    }
    contour
}
