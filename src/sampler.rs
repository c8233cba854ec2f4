//! Adaptive curve sampling: turn a radius function into the smallest
//! polyline that still looks like the curve.
//!
//! The algorithm is chord-deviation bisection. For an angular interval we
//! evaluate the midpoint and measure its perpendicular distance from the
//! chord between the interval's endpoints; if the deviation exceeds the
//! screen-space tolerance (and the depth cap allows) the interval splits in
//! two and both halves are reconsidered. Points are evaluated at the band's
//! *outer* radius, one full turn ahead of theta, because that is the widest
//! edge a band between `r(theta)` and `r(theta + TAU)` can reach; if the
//! outer edge stays within tolerance, the inner one does too.
//!
//! Subdivision runs on an explicit worklist rather than recursion, so depth
//! is bounded by `max_depth` per interval and never by the call stack. The
//! output is ascending, duplicate-free, and always contains at least the
//! two requested endpoints, even when subdivision is refused.

use crate::window::TAU;

/// Chord tolerance for stroked outlines, screen pixels.
pub const STROKE_TOLERANCE_PX: f64 = 0.75;

/// Tighter tolerance for semi-transparent band fills. Adjacent filled bands
/// share edges; a looser chord there reads as a visible seam, so fills pay
/// for three times the fidelity.
pub const FILL_TOLERANCE_PX: f64 = 0.25;

/// A pending interval on the subdivision worklist.
struct Span {
    theta_a: f64,
    theta_b: f64,
    point_a: (f64, f64),
    point_b: (f64, f64),
    depth: u32,
}

/// Evaluate the curve at theta, on the band's outer edge.
fn point_at(theta: f64, radius_fn: &impl Fn(f64) -> f64) -> (f64, f64) {
    let r = radius_fn(theta + TAU);
    return (theta.cos() * r, theta.sin() * r);
}

/// Perpendicular distance from `p` to the chord `a..b`.
fn chord_deviation(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    if len_sq < 1e-18 {
        // Degenerate chord: fall back to point distance.
        let (px, py) = (p.0 - a.0, p.1 - a.1);
        return (px * px + py * py).sqrt();
    }
    let cross = dx * (p.1 - a.1) - dy * (p.0 - a.0);
    return cross.abs() / len_sq.sqrt();
}

/// Subdivide `[theta_start, theta_end]` until every chord approximates the
/// curve to within `tolerance_px`, or the depth cap refuses further splits.
///
/// Returns an ascending sequence of theta values including both endpoints.
pub fn sample(
    theta_start: f64,
    theta_end: f64,
    radius_fn: impl Fn(f64) -> f64,
    tolerance_px: f64,
    max_depth: u32,
) -> Vec<f64> {
    if !(theta_end > theta_start) {
        return vec![theta_start, theta_end];
    }

    let mut out = vec![theta_start];
    let mut stack = vec![Span {
        theta_a: theta_start,
        theta_b: theta_end,
        point_a: point_at(theta_start, &radius_fn),
        point_b: point_at(theta_end, &radius_fn),
        depth: 0,
    }];

    // Left halves are pushed last so intervals pop in ascending order and
    // each accepted interval emits its right endpoint in sequence.
    while let Some(span) = stack.pop() {
        let mid = 0.5 * (span.theta_a + span.theta_b);
        let split = span.depth < max_depth && mid > span.theta_a && mid < span.theta_b;
        if split {
            let point_mid = point_at(mid, &radius_fn);
            if chord_deviation(point_mid, span.point_a, span.point_b) > tolerance_px {
                stack.push(Span {
                    theta_a: mid,
                    theta_b: span.theta_b,
                    point_a: point_mid,
                    point_b: span.point_b,
                    depth: span.depth + 1,
                });
                stack.push(Span {
                    theta_a: span.theta_a,
                    theta_b: mid,
                    point_a: span.point_a,
                    point_b: point_mid,
                    depth: span.depth + 1,
                });
                continue;
            }
        }
        out.push(span.theta_b);
    }

    out.dedup();
    return out;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A linear spiral: visibly curved, so flat chords must subdivide.
    fn spiral(theta: f64) -> f64 {
        return 20.0 * theta.max(0.0);
    }

    #[test]
    fn endpoints_always_present() {
        let out = sample(0.0, TAU, spiral, 0.5, 10);
        assert_eq!(out.first(), Some(&0.0));
        assert_eq!(out.last(), Some(&TAU));
        assert!(out.len() >= 2);
    }

    #[test]
    fn output_is_strictly_increasing() {
        let out = sample(0.0, 3.0 * TAU, spiral, 0.5, 12);
        for pair in out.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn depth_cap_refuses_subdivision() {
        let out = sample(0.0, TAU, spiral, 0.001, 0);
        assert_eq!(out, vec![0.0, TAU]);
    }

    #[test]
    fn tighter_tolerance_yields_more_points() {
        let loose = sample(0.0, TAU, spiral, STROKE_TOLERANCE_PX, 14);
        let tight = sample(0.0, TAU, spiral, FILL_TOLERANCE_PX, 14);
        assert!(tight.len() > loose.len());
    }

    #[test]
    fn every_chord_meets_tolerance() {
        let tol = 0.5;
        let out = sample(0.0, 2.0 * TAU, spiral, tol, 16);
        for pair in out.windows(2) {
            let mid = 0.5 * (pair[0] + pair[1]);
            let deviation = chord_deviation(
                point_at(mid, &spiral),
                point_at(pair[0], &spiral),
                point_at(pair[1], &spiral),
            );
            assert!(deviation <= tol, "chord [{}, {}] deviates {}", pair[0], pair[1], deviation);
        }
    }

    #[test]
    fn degenerate_interval_returns_both_endpoints() {
        assert_eq!(sample(1.0, 1.0, spiral, 0.5, 8), vec![1.0, 1.0]);
        assert_eq!(sample(2.0, 1.0, spiral, 0.5, 8), vec![2.0, 1.0]);
    }

    #[test]
    fn constant_radius_needs_few_points_at_loose_tolerance() {
        // A perfect circle at r=1: max chord deviation over a half-turn
        // interval is large, but over small spans it vanishes quickly.
        let out = sample(0.0, 0.1, |_| 1.0, 0.5, 10);
        assert_eq!(out, vec![0.0, 0.1]);
    }
}
