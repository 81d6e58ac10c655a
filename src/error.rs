use thiserror::Error;

/// Errors reported synchronously at the call boundaries of [`crate::Grid`],
/// [`crate::Quadtree`] construction, and [`crate::a_star_search`].
///
/// `NoPath` is deliberately absent: a failed search is data, not an error —
/// see [`crate::PathResult`], whose `path` field is `None` while `visited`
/// remains populated for diagnosis or rendering.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A [`crate::Grid`] was built from an image whose width or height is not
    /// a multiple of the configured `min_size`.
    #[error("invalid dimensions: image {side} is {size}, which is not a multiple of min_size {min_size}")]
    InvalidDimensions {
        side: &'static str,
        size: u32,
        min_size: u32,
    },

    /// A point lookup fell outside the bounds of the map.
    #[error("point ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i64, y: i64 },

    /// The start or end point of a search maps to a non-passable cell.
    #[error("point ({x}, {y}) maps to a non-passable cell")]
    UnreachableEndpoint { x: i64, y: i64 },
}
