//! Property-based tests for quadtree tiling and cardinal neighbor adjacency.
//!
//! Validates, across randomly generated occupancy maps:
//! - Q1: internal nodes tile their parent's rectangle without gaps or overlap
//! - Q2: every returned neighbor shares a positive-length boundary segment
//!   on the queried side
//! - Q3: the cardinal neighbor relation is symmetric under `opposite()`

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use region_pathfinding::{Cell, Direction, NodeId, PixelBuffer, Quadtree, QuadtreeConfig, SpatialIndex, State};

const PASSABLE: [u8; 3] = [255, 255, 255];
const BLOCKED: [u8; 3] = [0, 0, 0];

/// Build a `size x size` map with a handful of axis-aligned blocked
/// rectangles scattered across it.
fn map_with_blocks(size: u32, blocks: &[(u32, u32, u32, u32)]) -> PixelBuffer {
    let mut buf = PixelBuffer::filled(size, size, PASSABLE);
    for &(x, y, w, h) in blocks {
        let x1 = (x + w).min(size);
        let y1 = (y + h).min(size);
        for row in y..y1 {
            for col in x..x1 {
                buf.set(col, row, BLOCKED);
            }
        }
    }
    buf
}

fn rect_strategy(bound: u32) -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (0..bound, 0..bound, 1..bound / 2, 1..bound / 2)
}

/// Whether `a` and `b` overlap on a half-open interval of positive length.
fn overlaps(a0: i32, a1: i32, b0: i32, b1: i32) -> bool {
    a0.max(b0) < a1.min(b1)
}

/// Whether `m` touches `l`'s boundary on side `direction`, sharing a
/// positive-length segment.
fn shares_border(l: Cell, m: Cell, direction: Direction) -> bool {
    match direction {
        Direction::North => m.y() + m.h() == l.y() && overlaps(l.x(), l.x() + l.w(), m.x(), m.x() + m.w()),
        Direction::South => l.y() + l.h() == m.y() && overlaps(l.x(), l.x() + l.w(), m.x(), m.x() + m.w()),
        Direction::East => l.x() + l.w() == m.x() && overlaps(l.y(), l.y() + l.h(), m.y(), m.y() + m.h()),
        Direction::West => m.x() + m.w() == l.x() && overlaps(l.y(), l.y() + l.h(), m.y(), m.y() + m.h()),
        _ => unreachable!("only cardinal directions are checked for border sharing"),
    }
}

/// Recursively verify that every internal node's children exactly tile its
/// rectangle: each child's bounds fall within the parent's, and the four
/// children's combined area equals the parent's area (no gaps, no overlap).
fn check_tiles(qt: &Quadtree, id: NodeId) -> TestCaseResult {
    let parent = qt.cell(id);
    if let Some(children) = qt.children_of(id) {
        let mut area = 0i64;
        for child in children {
            let r = qt.cell(child);
            prop_assert!(r.x() >= parent.x() && r.y() >= parent.y());
            prop_assert!(r.x() + r.w() <= parent.x() + parent.w());
            prop_assert!(r.y() + r.h() <= parent.y() + parent.h());
            area += r.w() as i64 * r.h() as i64;
            check_tiles(qt, child)?;
        }
        prop_assert_eq!(area, parent.w() as i64 * parent.h() as i64);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Q1: children exactly tile their parent's rectangle, recursively,
    /// across the whole tree.
    #[test]
    fn quadtree_children_tile_parent_exactly(
        blocks in prop::collection::vec(rect_strategy(64), 0..3),
    ) {
        let pixels = map_with_blocks(64, &blocks);
        let qt = Quadtree::build(&pixels, &QuadtreeConfig { min_size: 4 }, true, PASSABLE, BLOCKED);
        check_tiles(&qt, qt.root())?;
    }

    /// Q2: every neighbor a cardinal query returns shares a positive-length
    /// boundary segment with the queried leaf on that side.
    #[test]
    fn cardinal_neighbors_share_a_border(
        blocks in prop::collection::vec(rect_strategy(64), 0..3),
    ) {
        let pixels = map_with_blocks(64, &blocks);
        let qt = Quadtree::build(&pixels, &QuadtreeConfig { min_size: 4 }, false, PASSABLE, BLOCKED);

        for leaf in qt.leaves() {
            let l = qt.cell(leaf);
            for direction in Direction::CARDINAL {
                for m in qt.neighbors_in_direction(leaf, direction) {
                    prop_assert!(shares_border(l, qt.cell(m), direction));
                }
            }
        }
    }

    /// Q3: the cardinal neighbor relation is symmetric under `opposite()`.
    ///
    /// `neighbors_in_direction` filters its results to `State::Passable`
    /// (`quadtree/neighbor.rs::cardinal_neighbors`), so the relation is only
    /// guaranteed symmetric between two Passable leaves — a Blocked leaf
    /// never appears as anyone's neighbor, so it can't be expected to see
    /// its own Passable neighbors reflected back.
    #[test]
    fn cardinal_neighbor_relation_is_symmetric(
        blocks in prop::collection::vec(rect_strategy(64), 0..3),
    ) {
        let pixels = map_with_blocks(64, &blocks);
        let qt = Quadtree::build(&pixels, &QuadtreeConfig { min_size: 4 }, false, PASSABLE, BLOCKED);

        for leaf in qt.leaves().filter(|l| qt.cell(*l).state() == State::Passable) {
            for direction in Direction::CARDINAL {
                for m in qt.neighbors_in_direction(leaf, direction) {
                    let back = qt.neighbors_in_direction(m, direction.opposite());
                    prop_assert!(back.contains(&leaf));
                }
            }
        }
    }
}
