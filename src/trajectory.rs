//! Trajectory construction and line-of-sight smoothing (spec.md §4.6).
//!
//! The initial polyline is built end-first, mirroring
//! `original_source/modules/pathfinder/pathfinder_info.py`'s
//! `PathfinderInfo.__set_points` exactly: the first and last waypoints are
//! the caller's true pixel coordinates, not cell centers.
//!
//! Smoothing has no counterpart in `original_source` — it is a pure
//! distillation addition — so its segment-intersection primitive is instead
//! grounded in the teacher's `shapes/line_interval.rs`
//! (`LineInterval::relate`, itself ported from `ucarion/line_intersection`,
//! MIT), adapted here to `glam::IVec2` and to the plain "first divergent
//! intersection" question this module needs rather than `line_interval.rs`'s
//! general segment/ray/line interval relation.

use crate::{Cell, SpatialIndex};
use glam::IVec2;

/// Build the initial end-first polyline through `path`'s cell centers,
/// anchored at the caller's true `(sx, sy)`/`(tx, ty)` pixel coordinates.
pub(crate) fn anchored_centers<I: SpatialIndex>(
    index: &I,
    path: &[I::Id],
    sx: i32,
    sy: i32,
    tx: i32,
    ty: i32,
) -> Vec<IVec2> {
    let n = path.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![IVec2::new(tx, ty), IVec2::new(sx, sy)];
    }
    let mut points = Vec::with_capacity(n);
    points.push(IVec2::new(tx, ty));
    for id in &path[1..n - 1] {
        points.push(index.cell(*id).center());
    }
    points.push(IVec2::new(sx, sy));
    points
}

/// Sum of Euclidean consecutive-segment lengths.
pub(crate) fn polyline_length(points: &[IVec2]) -> f64 {
    points
        .windows(2)
        .map(|w| {
            let d = (w[1] - w[0]).as_vec2();
            (d.x as f64).hypot(d.y as f64)
        })
        .sum()
}

/// Smooth the intermediate waypoints of `points` by replacing each one with
/// where the segment leading into it first crosses a border of its own cell
/// box, per spec.md §4.6. The start (`points[0]`) and end (`points[last]`)
/// anchors are never touched.
///
/// Fuses the walk over `(points[i], points[i+1], box_of(path[i+1]))` into a
/// single iterator rather than separately zipping `points` against a
/// `path_boxes` collection built up front, resolving the off-by-one between
/// `points.len() == path.len()` and the fact that only `path[1..len-1]` has a
/// well-defined "intermediate" box.
pub(crate) fn smooth_points<I: SpatialIndex>(index: &I, path: &[I::Id], points: &[IVec2]) -> Vec<IVec2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let mut smoothed = points.to_vec();
    for i in 0..n - 2 {
        let b = index.cell(path[i + 1]);
        smoothed[i + 1] = first_border_crossing(points[i], points[i + 1], b).unwrap_or(points[i + 1]);
    }
    smoothed
}

/// Intersect segment `(p0, p1)` against `cell`'s four edges in N, E, S, W
/// order, returning the first (integer-rounded) intersection point found.
fn first_border_crossing(p0: IVec2, p1: IVec2, cell: Cell) -> Option<IVec2> {
    let x0 = cell.x();
    let y0 = cell.y();
    let x1 = cell.x() + cell.w() - 1;
    let y1 = cell.y() + cell.h() - 1;

    let edges = [
        (IVec2::new(x0, y0), IVec2::new(x1, y0)), // N
        (IVec2::new(x1, y0), IVec2::new(x1, y1)), // E
        (IVec2::new(x0, y1), IVec2::new(x1, y1)), // S
        (IVec2::new(x0, y0), IVec2::new(x0, y1)), // W
    ];

    edges
        .into_iter()
        .find_map(|(e0, e1)| segment_intersection(p0, p1, e0, e1))
}

/// Parametric cross-product intersection test for two segments, per
/// <https://stackoverflow.com/a/565282> (as adapted in the teacher's
/// `LineInterval::relate`). Returns the unique intersection point, rounded
/// to the nearest integer, or `None` if the segments are parallel,
/// collinear, or diverge without meeting within both `[0, 1]` intervals.
fn segment_intersection(p: IVec2, p_end: IVec2, q: IVec2, q_end: IVec2) -> Option<IVec2> {
    let r = (p_end - p).as_vec2();
    let s = (q_end - q).as_vec2();
    let r_cross_s = r.x * s.y - r.y * s.x;
    if r_cross_s == 0.0 {
        return None;
    }

    let qp = (q - p).as_vec2();
    let t = (qp.x * s.y - qp.y * s.x) / r_cross_s;
    let u = (qp.x * r.y - qp.y * r.x) / r_cross_s;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        let point = p.as_vec2() + r * t;
        Some(IVec2::new(point.x.round() as i32, point.y.round() as i32))
    } else {
        None
    }
}
