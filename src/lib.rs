//! region_pathfinding
//! ==================
//!
//! Shortest-cost pathfinding over two decompositions of a binary occupancy
//! map: a uniform [`Grid`] of fixed-size cells, and an adaptive [`Quadtree`]
//! that collapses uniform regions. Both implement [`SpatialIndex`], the
//! capability surface [`a_star_search`] consumes, so a caller picks whichever
//! decomposition suits the map's structure without touching the search.
//!
//! The quadtree's neighbor query is the "equal-or-greater neighbor, then
//! descend" algorithm: an O(log N) ascent via parent back-references to find
//! a same-or-larger adjacent node, followed by a bounded descent into
//! smaller leaves on that side.
//!
//! This crate never decodes image files or renders results — it consumes a
//! [`PixelBuffer`] the caller already has in memory, and returns a
//! [`PathResult`] of opaque element ids plus a polyline in pixel space.

mod astar;
mod cell;
mod config;
mod direction;
mod error;
mod grid;
mod jps;
mod open_set;
mod quadtree;
mod spatial_index;
mod trajectory;

pub use self::{
    astar::{a_star_search, PathResult},
    cell::{Cell, PixelBuffer, State},
    config::{Config, GridConfig, Metric, Palette, PathConfig, QuadtreeConfig},
    direction::Direction,
    error::Error,
    grid::{Grid, GridId},
    jps::{jump_point_search, NotYetImplemented},
    quadtree::{NodeId, Quadtree},
    spatial_index::SpatialIndex,
};
