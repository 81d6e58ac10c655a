//! Jump-Point-Search: a declared extension point, left unspecified.
//!
//! Grounded directly in `original_source/modules/pathfinder/jps.py`'s
//! `JPS.search`, which is a literal `pass` — an empty method body. This
//! module preserves that framing rather than inventing an implementation:
//! [`jump_point_search`] is callable and type-checks against the same
//! [`crate::SpatialIndex`] contract as [`crate::a_star_search`], but always
//! returns [`NotYetImplemented`].

use crate::SpatialIndex;

/// Marker error returned by [`jump_point_search`]. Carries no data; its only
/// role is to make the "not implemented" outcome part of the type signature
/// instead of a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotYetImplemented;

/// Always returns `Err(NotYetImplemented)`. A placeholder for a
/// jump-point-search variant of [`crate::a_star_search`], matching the
/// extension point the source system declared but never filled in.
pub fn jump_point_search<I: SpatialIndex>(
    _index: &I,
    _sx: i32,
    _sy: i32,
    _tx: i32,
    _ty: i32,
) -> Result<crate::PathResult<I::Id>, NotYetImplemented> {
    Err(NotYetImplemented)
}
