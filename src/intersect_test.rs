use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::shape::{self, PreShape};
use crate::vector::Size;

// =============================================================
// Helpers
// =============================================================

fn v(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

fn circle(x: f64, y: f64, r: f64) -> Geometry {
    shape::circle(v(x, y), r).geometry
}

fn point(x: f64, y: f64) -> Geometry {
    shape::point(v(x, y)).geometry
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Geometry {
    shape::line(v(x1, y1), v(x2, y2)).geometry
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Geometry {
    shape::rect(v(x, y), Size::new(w, h)).geometry
}

/// Assert the expected result in both argument orders.
fn check(a: &Geometry, b: &Geometry, expected: bool) {
    assert_eq!(intersects(a, b), expected, "intersects({a:?}, {b:?})");
    assert_eq!(intersects(b, a), expected, "intersects({b:?}, {a:?})");
}

// =============================================================
// ccw
// =============================================================

#[test]
fn ccw_distinguishes_sides() {
    let a = v(0.0, 0.0);
    let b = v(10.0, 0.0);
    assert!(ccw(a, b, v(5.0, 5.0)));
    assert!(!ccw(a, b, v(5.0, -5.0)));
}

#[test]
fn ccw_collinear_is_false() {
    assert!(!ccw(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)));
}

// =============================================================
// circle–circle
// =============================================================

#[test]
fn circles_overlapping() {
    check(&circle(0.0, 0.0, 5.0), &circle(6.0, 0.0, 2.0), true);
}

#[test]
fn circles_tangent_do_not_intersect() {
    check(&circle(0.0, 0.0, 3.0), &circle(5.0, 0.0, 2.0), false);
    check(&circle(0.0, 0.0, 3.0), &circle(3.0, 4.0, 2.0), false);
}

#[test]
fn circles_disjoint() {
    check(&circle(0.0, 0.0, 1.0), &circle(10.0, 10.0, 1.0), false);
}

#[test]
fn concentric_circles_intersect() {
    check(&circle(2.0, 2.0, 1.0), &circle(2.0, 2.0, 8.0), true);
}

#[test]
fn coincident_points_do_not_intersect() {
    check(&point(1.0, 1.0), &point(1.0, 1.0), false);
}

#[test]
fn point_inside_circle() {
    check(&point(1.0, 1.0), &circle(0.0, 0.0, 2.0), true);
}

// =============================================================
// circle–line
// =============================================================

#[test]
fn circle_far_from_line() {
    check(&circle(0.0, 0.0, 5.0), &line(10.0, 0.0, 10.0, 10.0), false);
}

#[test]
fn circle_near_line() {
    check(&circle(0.0, 0.0, 5.0), &line(4.0, 0.0, 4.0, 10.0), true);
}

#[test]
fn circle_tangent_to_line_does_not_intersect() {
    check(&circle(0.0, 0.0, 5.0), &line(5.0, -10.0, 5.0, 10.0), false);
}

#[test]
fn circle_beyond_segment_end_uses_clamped_point() {
    // The infinite line y = 0 passes through the circle center, the segment does not reach it.
    check(&circle(20.0, 0.0, 3.0), &line(0.0, 0.0, 10.0, 0.0), false);
    check(&circle(12.0, 0.0, 3.0), &line(0.0, 0.0, 10.0, 0.0), true);
}

#[test]
fn circle_before_segment_start_uses_clamped_point() {
    check(&circle(-2.0, 1.0, 3.0), &line(0.0, 0.0, 10.0, 0.0), true);
    check(&circle(-4.0, 0.0, 3.0), &line(0.0, 0.0, 10.0, 0.0), false);
}

#[test]
fn zero_length_line_is_its_start_point() {
    check(&circle(0.0, 0.0, 2.0), &line(1.0, 1.0, 1.0, 1.0), true);
    check(&circle(0.0, 0.0, 1.0), &line(1.0, 1.0, 1.0, 1.0), false);
}

#[test]
fn point_on_line_does_not_intersect() {
    // Distance 0 is not strictly less than radius 0.
    check(&point(5.0, 0.0), &line(0.0, 0.0, 10.0, 0.0), false);
}

#[test]
fn closest_point_on_segment_projects_interior() {
    let p = closest_point_on_segment(v(5.0, 7.0), v(0.0, 0.0), v(10.0, 0.0));
    assert_eq!(p, v(5.0, 0.0));
}

// =============================================================
// circle–rect
// =============================================================

#[test]
fn point_inside_rect() {
    check(&point(5.0, 5.0), &rect(0.0, 0.0, 10.0, 10.0), true);
}

#[test]
fn point_on_rect_edge_and_corner_is_inclusive() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    check(&point(0.0, 5.0), &r, true);
    check(&point(10.0, 5.0), &r, true);
    check(&point(5.0, 0.0), &r, true);
    check(&point(5.0, 10.0), &r, true);
    check(&point(10.0, 10.0), &r, true);
    check(&point(0.0, 0.0), &r, true);
}

#[test]
fn point_outside_rect() {
    check(&point(10.5, 5.0), &rect(0.0, 0.0, 10.0, 10.0), false);
}

#[test]
fn point_in_zero_size_rect() {
    check(&point(3.0, 3.0), &rect(3.0, 3.0, 0.0, 0.0), true);
}

#[test]
fn circle_overlapping_rect_edge() {
    check(&circle(12.0, 5.0, 3.0), &rect(0.0, 0.0, 10.0, 10.0), true);
}

#[test]
fn circle_tangent_to_rect_edge_does_not_intersect() {
    check(&circle(13.0, 5.0, 3.0), &rect(0.0, 0.0, 10.0, 10.0), false);
}

#[test]
fn circle_near_corner_uses_corner_distance() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    // Corner (10, 10) is at distance sqrt(8) ≈ 2.83 from (12, 12).
    check(&circle(12.0, 12.0, 3.0), &r, true);
    check(&circle(12.0, 12.0, 2.5), &r, false);
}

#[test]
fn circle_inside_rect() {
    check(&circle(5.0, 5.0, 1.0), &rect(0.0, 0.0, 10.0, 10.0), true);
}

#[test]
fn rect_inside_circle() {
    check(&circle(5.0, 5.0, 100.0), &rect(0.0, 0.0, 10.0, 10.0), true);
}

// =============================================================
// line–line
// =============================================================

#[test]
fn lines_crossing() {
    check(&line(0.0, 0.0, 10.0, 10.0), &line(0.0, 10.0, 10.0, 0.0), true);
}

#[test]
fn lines_parallel() {
    check(&line(0.0, 0.0, 10.0, 0.0), &line(0.0, 1.0, 10.0, 1.0), false);
}

#[test]
fn lines_would_cross_if_extended() {
    check(&line(0.0, 0.0, 4.0, 4.0), &line(0.0, 10.0, 10.0, 0.0), false);
}

#[test]
fn lines_t_junction_counts() {
    check(&line(0.0, 0.0, 10.0, 0.0), &line(5.0, 0.0, 5.0, 5.0), true);
}

#[test]
fn collinear_disjoint_lines() {
    check(&line(0.0, 0.0, 4.0, 0.0), &line(6.0, 0.0, 10.0, 0.0), false);
}

#[test]
fn collinear_overlap_reports_no_crossing() {
    check(&line(0.0, 0.0, 10.0, 0.0), &line(5.0, 0.0, 15.0, 0.0), false);
}

// =============================================================
// line–rect
// =============================================================

#[test]
fn line_through_rect() {
    check(&line(-5.0, 5.0, 15.0, 5.0), &rect(0.0, 0.0, 10.0, 10.0), true);
}

#[test]
fn line_crossing_one_border() {
    check(&line(5.0, 5.0, 5.0, 20.0), &rect(0.0, 0.0, 10.0, 10.0), true);
}

#[test]
fn line_fully_inside_rect() {
    check(&line(2.0, 2.0, 8.0, 8.0), &rect(0.0, 0.0, 10.0, 10.0), true);
}

#[test]
fn line_fully_outside_rect() {
    check(&line(20.0, 0.0, 20.0, 10.0), &rect(0.0, 0.0, 10.0, 10.0), false);
}

#[test]
fn line_passing_outside_corner() {
    check(&line(8.0, 14.0, 14.0, 8.0), &rect(0.0, 0.0, 10.0, 10.0), false);
}

#[test]
fn line_endpoint_on_rect_edge_is_inclusive() {
    check(&line(10.0, 5.0, 20.0, 5.0), &rect(0.0, 0.0, 10.0, 10.0), true);
}

// =============================================================
// rect–rect
// =============================================================

#[test]
fn rect_rect_is_unregistered_and_false() {
    check(&rect(0.0, 0.0, 10.0, 10.0), &rect(5.0, 5.0, 10.0, 10.0), false);
    check(&rect(0.0, 0.0, 10.0, 10.0), &rect(0.0, 0.0, 10.0, 10.0), false);
}

// =============================================================
// Scenario and properties
// =============================================================

#[test]
fn moving_line_into_circle_flips_result() {
    let c = shape::circle(v(0.0, 0.0), 5.0).with_id(crate::shape::ShapeId(0));
    let far = shape::line(v(10.0, 0.0), v(10.0, 10.0)).with_id(crate::shape::ShapeId(1));
    assert!(!c.intersects(&far));
    let near = far.translate(v(-6.0, 0.0));
    assert!(c.intersects(&near));
}

fn random_vec(rng: &mut StdRng) -> Vector {
    v(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0))
}

fn random_shape(rng: &mut StdRng) -> Geometry {
    let pre: PreShape = match rng.random_range(0..4) {
        0 => shape::circle(random_vec(rng), rng.random_range(0.0..30.0)),
        1 => shape::point(random_vec(rng)),
        2 => shape::line(random_vec(rng), random_vec(rng)),
        _ => shape::rect_from_corners(random_vec(rng), random_vec(rng)),
    };
    pre.geometry
}

#[test]
fn intersects_is_commutative() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..5_000 {
        let a = random_shape(&mut rng);
        let b = random_shape(&mut rng);
        assert_eq!(intersects(&a, &b), intersects(&b, &a), "a = {a:?}, b = {b:?}");
    }
}

#[test]
fn point_probe_matches_inclusive_containment() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5_000 {
        let p = random_vec(&mut rng);
        let r = shape::rect_from_corners(random_vec(&mut rng), random_vec(&mut rng)).geometry;
        let Geometry::Rect(inner) = &r else {
            panic!("expected rect");
        };
        let br = inner.bottom_right();
        let inside = p.x >= inner.top_left.x && p.x <= br.x && p.y >= inner.top_left.y && p.y <= br.y;
        assert_eq!(intersects(&point(p.x, p.y), &r), inside, "p = {p:?}, r = {r:?}");
    }
}
