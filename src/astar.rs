//! A* search over an abstract [`SpatialIndex`] (spec.md §4.5).
//!
//! Adapted in shape from the teacher's own `pathfind_a_star_grid`
//! (`pathfinding.rs`) — an indexed open set, a `came_from`/`g_score`
//! reconstruction, a "considered" counter — but generalized from a
//! single concrete grid to any [`SpatialIndex`] implementation, and
//! corrected to use a true decrease-key open set (see [`crate::open_set`])
//! rather than push-duplicates-and-skip-stale.

use crate::{open_set::OpenSet, Error, PathConfig, SpatialIndex};
use fxhash::FxHashMap;
use glam::IVec2;

/// The outcome of an [`a_star_search`] call.
///
/// `path` is `None` when the open set is exhausted without reaching the end
/// element — this is data, not an error (spec.md §7, `NoPath`); `visited` is
/// still populated so a caller can render what was explored.
#[derive(Debug, Clone)]
pub struct PathResult<Id> {
    /// The sequence of elements from the end back to the start, end-first,
    /// as produced directly by predecessor-map reconstruction. `None` if no
    /// path was found.
    pub path: Option<Vec<Id>>,
    /// Every element that entered `came_from` during the search (i.e. every
    /// element for which a best-known predecessor was recorded).
    pub visited: Vec<Id>,
    /// The geometric polyline through `path`'s cell centers, anchored at the
    /// true start/end pixels. Empty when `path` is `None`.
    pub points: Vec<IVec2>,
    /// Sum of Euclidean segment lengths across `points`.
    pub trajectory_length: f64,
    /// Count of elements popped from the open set. A low-cost diagnostic
    /// companion to `visited`, carried over from the teacher's own
    /// `PathfindAStarGridResult::considered_cells`.
    pub considered: usize,
}

/// Run A* from pixel `(sx, sy)` to pixel `(tx, ty)` over `index`, under
/// `config.metric` and `config.enable_smoothing`.
///
/// `config.allow_diagonal` is not consulted here: whether diagonal moves
/// exist is baked into `index` at build time (`Grid::build`/`Quadtree::
/// build`), not re-selected per search.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if either point falls outside `index`, or
/// [`Error::UnreachableEndpoint`] if either point's element is not passable.
pub fn a_star_search<I: SpatialIndex>(
    index: &I,
    sx: i32,
    sy: i32,
    tx: i32,
    ty: i32,
    config: &PathConfig,
) -> Result<PathResult<I::Id>, Error> {
    let metric = config.metric;
    let start = index.get(sx, sy)?;
    let end = index.get(tx, ty)?;

    if !index.cell(start).state().is_passable() {
        return Err(Error::UnreachableEndpoint { x: sx as i64, y: sy as i64 });
    }
    if !index.cell(end).state().is_passable() {
        return Err(Error::UnreachableEndpoint { x: tx as i64, y: ty as i64 });
    }

    let mut came_from: FxHashMap<I::Id, Option<I::Id>> = FxHashMap::default();
    let mut g_score: FxHashMap<I::Id, f64> = FxHashMap::default();
    let mut open = OpenSet::new();

    came_from.insert(start, None);
    g_score.insert(start, 0.0);
    open.push_or_decrease(start, 0.0);

    let mut considered = 0usize;

    while let Some((u, _)) = open.pop_min() {
        considered += 1;
        if u == end {
            break;
        }

        let g_u = g_score[&u];
        for v in index.neighbors(u) {
            let tentative = g_u + index.cost(u, v, metric);
            let improves = match g_score.get(&v) {
                Some(&existing) => tentative < existing,
                None => true,
            };
            if improves {
                g_score.insert(v, tentative);
                came_from.insert(v, Some(u));
                let f = tentative + index.heuristic(v, end, metric);
                open.push_or_decrease(v, f);
            }
        }
    }

    tracing::debug!(considered, visited = came_from.len(), "a* search finished");

    if !came_from.contains_key(&end) {
        return Ok(PathResult {
            path: None,
            visited: came_from.keys().copied().collect(),
            points: Vec::new(),
            trajectory_length: 0.0,
            considered,
        });
    }

    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(id) = current {
        path.push(id);
        current = came_from[&id];
    }

    let mut points = crate::trajectory::anchored_centers(index, &path, sx, sy, tx, ty);
    if config.enable_smoothing {
        points = crate::trajectory::smooth_points(index, &path, &points);
    }
    let trajectory_length = crate::trajectory::polyline_length(&points);

    Ok(PathResult {
        path: Some(path),
        visited: came_from.keys().copied().collect(),
        points,
        trajectory_length,
        considered,
    })
}
