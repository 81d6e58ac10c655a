//! Quadtree adjacency: the "equal-or-greater neighbor, then descend" algorithm
//! (spec.md §4.4.1) and the single-pixel diagonal corner probe (§4.4.2).
//!
//! Grounded directly in `original_source/modules/data/qtree.py`'s
//! `__get_equal_or_greater_neighbour` / `__get_smaller_neighbours` /
//! `__diagonal_neighbour`: the ascent recursion below mirrors the Python
//! per-direction child-identity dispatch one-for-one, substituting arena
//! [`NodeId`] equality for Python object identity.

use super::{NodeId, Quadrant, Quadtree};
use crate::{Direction, State};
use std::collections::VecDeque;

// `Quadtree::node` is private to the `quadtree` module, but private items are
// visible to descendant modules, so this sibling submodule can call it
// directly as `tree.node(id)`.

fn quadrant_of(children: [NodeId; 4], id: NodeId) -> Quadrant {
    [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ]
    .into_iter()
    .zip(children)
    .find(|(_, c)| *c == id)
    .map(|(q, _)| q)
    .expect("id must be a child of its own parent")
}

/// The smallest ancestor-reached node in direction `D` that is at least as
/// large as `id` (spec.md §4.4.1, "Step A"). `None` means the query reached
/// the map boundary.
fn equal_or_greater_neighbor(tree: &Quadtree, id: NodeId, direction: Direction) -> Option<NodeId> {
    let parent_id = tree.node(id).parent?;
    let children = tree.node(parent_id).children.unwrap();
    let quadrant = quadrant_of(children, id);

    use Quadrant::*;
    let sibling = match direction {
        Direction::North => match quadrant {
            SouthWest => Some(children[NorthWest as usize]),
            SouthEast => Some(children[NorthEast as usize]),
            _ => None,
        },
        Direction::East => match quadrant {
            NorthWest => Some(children[NorthEast as usize]),
            SouthWest => Some(children[SouthEast as usize]),
            _ => None,
        },
        Direction::South => match quadrant {
            NorthWest => Some(children[SouthWest as usize]),
            NorthEast => Some(children[SouthEast as usize]),
            _ => None,
        },
        Direction::West => match quadrant {
            NorthEast => Some(children[NorthWest as usize]),
            SouthEast => Some(children[SouthWest as usize]),
            _ => None,
        },
        _ => unreachable!("equal_or_greater_neighbor is only defined for cardinal directions"),
    };
    if let Some(sibling) = sibling {
        return Some(sibling);
    }

    // `id` sits on the far side from `direction` within its parent: climb
    // one level and come back down into the appropriate child of whatever
    // was found there.
    let ancestor = equal_or_greater_neighbor(tree, parent_id, direction)?;
    if tree.node(ancestor).is_leaf() {
        return Some(ancestor);
    }
    let ancestor_children = tree.node(ancestor).children.unwrap();
    let near_child = match (direction, quadrant) {
        (Direction::North, NorthWest) => SouthWest,
        (Direction::North, NorthEast) => SouthEast,
        (Direction::East, NorthEast) => NorthWest,
        (Direction::East, SouthEast) => SouthWest,
        (Direction::South, SouthWest) => NorthWest,
        (Direction::South, SouthEast) => NorthEast,
        (Direction::West, NorthWest) => NorthEast,
        (Direction::West, SouthWest) => SouthEast,
        _ => unreachable!(),
    };
    Some(ancestor_children[near_child as usize])
}

/// Step B: BFS-descend from the equal-or-greater neighbor, replacing each
/// internal node by its two children on the side opposite `direction`, until
/// only leaves remain.
fn smaller_neighbors(tree: &Quadtree, start: Option<NodeId>, direction: Direction) -> Vec<NodeId> {
    let mut leaves = Vec::new();
    let mut queue = VecDeque::new();
    if let Some(id) = start {
        queue.push_back(id);
    }

    use Quadrant::*;
    while let Some(candidate) = queue.pop_front() {
        let node = tree.node(candidate);
        match node.children {
            None => leaves.push(candidate),
            Some(children) => {
                let (a, b) = match direction {
                    Direction::North => (SouthWest, SouthEast),
                    Direction::East => (NorthWest, SouthWest),
                    Direction::South => (NorthWest, NorthEast),
                    Direction::West => (NorthEast, SouthEast),
                    _ => unreachable!(),
                };
                queue.push_back(children[a as usize]);
                queue.push_back(children[b as usize]);
            }
        }
    }
    leaves
}

/// All passable leaves adjacent to `id` on cardinal side `direction`.
pub(super) fn cardinal_neighbors(tree: &Quadtree, id: NodeId, direction: Direction) -> Vec<NodeId> {
    let egn = equal_or_greater_neighbor(tree, id, direction);
    smaller_neighbors(tree, egn, direction)
        .into_iter()
        .filter(|n| tree.node(*n).region.state() == State::Passable)
        .collect()
}

/// The single diagonal neighbor in `direction` (one of NW/NE/SE/SW), found by
/// probing the pixel one unit outside the corresponding corner.
pub(super) fn diagonal_neighbor(tree: &Quadtree, id: NodeId, direction: Direction) -> Option<NodeId> {
    let b = tree.node(id).region;
    let (px, py) = match direction {
        Direction::NorthWest => (b.x() - 1, b.y() - 1),
        Direction::NorthEast => (b.x() + b.w(), b.y() - 1),
        Direction::SouthEast => (b.x() + b.w(), b.y() + b.h()),
        Direction::SouthWest => (b.x() - 1, b.y() + b.h()),
        _ => unreachable!("diagonal_neighbor is only defined for diagonal directions"),
    };
    let candidate = tree.get_node(px, py).ok()?;
    if tree.node(candidate).region.state() == State::Passable {
        Some(candidate)
    } else {
        None
    }
}
