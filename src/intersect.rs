//! Pairwise geometric intersection used for hit-testing.
//!
//! [`intersects`] is defined for every ordered pair of shape kinds. Six pairs
//! have a direct routine; line–circle, rect–circle and rect–line reuse the
//! mirrored routine with arguments flipped, so the result is commutative.
//! Rect–rect has no routine and reports `false`.
//!
//! Boundary policy: circle tests are strict (`<`), so tangency does not
//! count; point-in-rect containment is inclusive on all four sides.

#[cfg(test)]
#[path = "intersect_test.rs"]
mod intersect_test;

use crate::shape::{Circle, Geometry, Line, Rect};
use crate::vector::Vector;

/// Counter-clockwise orientation predicate for the triple `(a, b, c)`.
#[must_use]
pub fn ccw(a: Vector, b: Vector, c: Vector) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

#[must_use]
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

/// Closest point on the segment `start..end` to `p`.
///
/// A zero-length segment yields `start`.
#[must_use]
pub fn closest_point_on_segment(p: Vector, start: Vector, end: Vector) -> Vector {
    let d = end - start;
    let len_sq = d.x * d.x + d.y * d.y;
    if len_sq == 0.0 {
        return start;
    }
    let t = ((p.x - start.x) * d.x + (p.y - start.y) * d.y) / len_sq;
    start + d.scale(t.clamp(0.0, 1.0))
}

/// A zero-length line is treated as the point at its `start`.
#[must_use]
pub fn circle_line(c: &Circle, l: &Line) -> bool {
    let closest = closest_point_on_segment(c.center, l.start, l.end);
    c.center.distance(closest) < c.radius
}

/// Inclusive containment of `p` in `r`.
#[must_use]
pub fn point_rect(p: Vector, r: &Rect) -> bool {
    r.contains(p)
}

#[must_use]
pub fn circle_rect(c: &Circle, r: &Rect) -> bool {
    if c.radius == 0.0 {
        return point_rect(c.center, r);
    }
    let br = r.bottom_right();
    let closest = Vector::new(c.center.x.clamp(r.top_left.x, br.x), c.center.y.clamp(r.top_left.y, br.y));
    c.center.distance(closest) < c.radius
}

/// Segment crossing test on endpoints `(a1, a2)` and `(b1, b2)`.
///
/// Exactly collinear segments make every orientation false and so never
/// report a crossing, overlapping or not.
#[must_use]
pub fn segments_cross(a1: Vector, a2: Vector, b1: Vector, b2: Vector) -> bool {
    ccw(a1, b1, b2) != ccw(a2, b1, b2) && ccw(a1, a2, b1) != ccw(a1, a2, b2)
}

#[must_use]
pub fn line_line(a: &Line, b: &Line) -> bool {
    segments_cross(a.start, a.end, b.start, b.end)
}

#[must_use]
pub fn line_rect(l: &Line, r: &Rect) -> bool {
    let crosses_border = r
        .borders()
        .into_iter()
        .any(|(b1, b2)| segments_cross(b1, b2, l.start, l.end));
    crosses_border || point_rect(l.start, r) || point_rect(l.end, r)
}

/// Whether two shapes overlap. Total over all kind pairs and commutative.
#[must_use]
pub fn intersects(a: &Geometry, b: &Geometry) -> bool {
    match (a, b) {
        (Geometry::Circle(a), Geometry::Circle(b)) => circle_circle(a, b),
        (Geometry::Circle(c), Geometry::Line(l)) => circle_line(c, l),
        (Geometry::Circle(c), Geometry::Rect(r)) => circle_rect(c, r),
        (Geometry::Line(a), Geometry::Line(b)) => line_line(a, b),
        (Geometry::Line(l), Geometry::Rect(r)) => line_rect(l, r),
        (Geometry::Line(_), Geometry::Circle(_))
        | (Geometry::Rect(_), Geometry::Circle(_) | Geometry::Line(_)) => intersects(b, a),
        (Geometry::Rect(_), Geometry::Rect(_)) => false,
    }
}
