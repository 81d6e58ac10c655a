use crate::{Cell, Direction, Error, Metric};

/// The capability surface an A* search consumes, implemented by both
/// [`crate::Grid`] and [`crate::Quadtree`].
///
/// `Id` is an opaque, cheap-to-copy token identifying an element of the
/// index (a flat grid index for [`crate::Grid`], an arena node index for
/// [`crate::Quadtree`]) — [`crate::a_star_search`] is generic over this
/// trait and never assumes anything about `Id` beyond `Copy + Eq +
/// std::hash::Hash`.
pub trait SpatialIndex {
    /// The opaque element identifier this index hands out.
    type Id: Copy + Eq + std::hash::Hash;

    /// Look up the element containing pixel `(x, y)`.
    fn get(&self, x: i32, y: i32) -> Result<Self::Id, Error>;

    /// Enumerate the passable neighbors of `id`, in the fixed direction order
    /// N, E, S, W, NW, NE, SE, SW (diagonals omitted unless enabled).
    fn neighbors(&self, id: Self::Id) -> Vec<Self::Id>;

    /// The step cost of moving from `a` to `b` under `metric`: the distance
    /// between their cell centers.
    ///
    /// `metric` is a run-time parameter rather than a field mutated on the
    /// index (`SPEC_FULL.md` §9 design note, adopted as specified): distinct
    /// concurrent searches over one shared index may freely use different
    /// metrics.
    fn cost(&self, a: Self::Id, b: Self::Id, metric: Metric) -> f64;

    /// An admissible-or-not (see [`Metric`]) heuristic estimate of the
    /// remaining cost from `a` to `b`. Identical to [`SpatialIndex::cost`] by
    /// construction, per `SPEC_FULL.md` §9 Open Question 1.
    fn heuristic(&self, a: Self::Id, b: Self::Id, metric: Metric) -> f64;

    /// The bounding-box [`Cell`] of `id`.
    fn cell(&self, id: Self::Id) -> Cell;

    /// Whether diagonal neighbor directions are considered by
    /// [`SpatialIndex::neighbors`].
    fn allow_diagonal(&self) -> bool;

    /// Enumerate the neighbors of `id` in a single explicit direction,
    /// applying the same passability filter as [`SpatialIndex::neighbors`].
    /// Quadtree adjacency can return more than one element for a single
    /// direction (several smaller leaves may border one larger leaf); a grid
    /// direction yields at most one.
    fn neighbors_in_direction(&self, id: Self::Id, direction: Direction) -> Vec<Self::Id>;
}
