mod neighbor;

use crate::{Cell, Direction, Error, Metric, PixelBuffer, QuadtreeConfig, SpatialIndex, State};
use std::collections::HashSet;

/// An opaque handle to a [`Quadtree`] node: its index into the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Position of a child within its parent's fixed `[NW, NE, SW, SE]` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quadrant {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

#[derive(Debug, Clone)]
struct QNode {
    region: Cell,
    #[allow(dead_code)]
    depth: u32,
    parent: Option<NodeId>,
    children: Option<[NodeId; 4]>,
}

impl QNode {
    #[inline]
    fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// A region quadtree: an adaptive subdivision of a rectangular pixel region,
/// collapsing uniform areas into larger leaves.
///
/// Internal nodes are always [`State::Mixed`] with exactly four children, in
/// fixed `[NW, NE, SW, SE]` order; leaves are [`State::Passable`],
/// [`State::Blocked`], or [`State::Mixed`] when subdivision bottomed out at
/// `min_size`. Represented as a flat arena (`Vec<QNode>`) of nodes addressed
/// by [`NodeId`] index rather than owned pointers, so that parent
/// back-references (needed by the neighbor-query ascent in
/// [`crate::spatial_index::SpatialIndex::neighbors`]) are plain indices with
/// no risk of a reference cycle — the whole tree drops when the arena drops.
#[derive(Debug, Clone)]
pub struct Quadtree {
    nodes: Vec<QNode>,
    root: NodeId,
    allow_diagonal: bool,
}

impl Quadtree {
    /// Build a quadtree over the full extent of `pixels`, recursively
    /// subdividing [`State::Mixed`] regions down to `config.min_size`.
    pub fn build(
        pixels: &PixelBuffer,
        config: &QuadtreeConfig,
        allow_diagonal: bool,
        passable: [u8; 3],
        blocked: [u8; 3],
    ) -> Self {
        let mut nodes = Vec::new();
        let root = build_node(
            &mut nodes,
            pixels,
            0,
            0,
            pixels.width() as i32,
            pixels.height() as i32,
            0,
            None,
            config.min_size as i32,
            passable,
            blocked,
        );

        tracing::debug!(
            leaves = nodes.iter().filter(|n| n.is_leaf()).count(),
            total_nodes = nodes.len(),
            "quadtree built"
        );

        Self {
            nodes,
            root,
            allow_diagonal,
        }
    }

    /// The root node, covering the whole map.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total number of nodes in the arena (internal nodes and leaves).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The four children of `id` in fixed `[NW, NE, SW, SE]` order, or `None`
    /// if `id` is a leaf. Exposed for callers that need to walk internal
    /// structure directly (property tests verifying tiling; a renderer that
    /// wants to draw internal split lines).
    #[inline]
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> Option<[NodeId; 4]> {
        self.node(id).children
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaf nodes in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Every leaf node id in the tree, in arena order.
    ///
    /// Grounded in the teacher's own `PNode::visit_leaves`; exposed as a
    /// direct iterator here rather than a visitor callback, since every
    /// caller (a full-map renderer, or a property test walking the whole
    /// tree) just wants the set of leaves, not a traversal hook.
    #[must_use]
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_leaf())
            .map(|(i, _)| NodeId(i as u32))
    }

    #[inline]
    fn node(&self, id: NodeId) -> &QNode {
        &self.nodes[id.0 as usize]
    }

    /// Root-to-leaf point lookup: the leaf whose region contains `(x, y)`.
    pub fn get_node(&self, x: i32, y: i32) -> Result<NodeId, Error> {
        if !self.node(self.root).region.contains(x, y) {
            return Err(Error::OutOfBounds { x: x as i64, y: y as i64 });
        }
        let mut current = self.root;
        loop {
            let node = self.node(current);
            match node.children {
                None => return Ok(current),
                Some(children) => {
                    current = *children
                        .iter()
                        .find(|c| self.node(**c).region.contains(x, y))
                        .expect("quadtree children must tile the parent without gaps");
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build_node(
    nodes: &mut Vec<QNode>,
    pixels: &PixelBuffer,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    depth: u32,
    parent: Option<NodeId>,
    min_size: i32,
    passable: [u8; 3],
    blocked: [u8; 3],
) -> NodeId {
    let idx = nodes.len() as u32;
    // Reserve the slot so children link back to a stable parent id.
    nodes.push(QNode {
        region: Cell::new(x, y, w, h, State::Mixed),
        depth,
        parent,
        children: None,
    });
    let id = NodeId(idx);

    let state = pixels.classify(x, y, w, h, passable, blocked);
    if state != State::Mixed {
        nodes[idx as usize].region = Cell::new(x, y, w, h, state);
        return id;
    }

    let half_w = w / 2;
    let half_h = h / 2;
    if half_w < min_size || half_h < min_size {
        // Remains Mixed at minimum resolution.
        return id;
    }

    let nw = build_node(
        nodes, pixels, x, y, half_w, half_h, depth + 1, Some(id), min_size, passable, blocked,
    );
    let ne = build_node(
        nodes,
        pixels,
        x + half_w,
        y,
        half_w + w % 2,
        half_h,
        depth + 1,
        Some(id),
        min_size,
        passable,
        blocked,
    );
    let sw = build_node(
        nodes,
        pixels,
        x,
        y + half_h,
        half_w,
        half_h + h % 2,
        depth + 1,
        Some(id),
        min_size,
        passable,
        blocked,
    );
    let se = build_node(
        nodes,
        pixels,
        x + half_w,
        y + half_h,
        half_w + w % 2,
        half_h + h % 2,
        depth + 1,
        Some(id),
        min_size,
        passable,
        blocked,
    );

    nodes[idx as usize].children = Some([nw, ne, sw, se]);
    id
}

impl SpatialIndex for Quadtree {
    type Id = NodeId;

    fn get(&self, x: i32, y: i32) -> Result<NodeId, Error> {
        self.get_node(x, y)
    }

    fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for direction in Direction::iter() {
            if direction.is_diagonal() && !self.allow_diagonal {
                continue;
            }
            for n in self.neighbors_in_direction(id, direction) {
                if seen.insert(n) {
                    result.push(n);
                }
            }
        }
        result
    }

    fn cost(&self, a: NodeId, b: NodeId, metric: Metric) -> f64 {
        let ca = self.node(a).region.center();
        let cb = self.node(b).region.center();
        metric.distance((ca.x - cb.x) as f64, (ca.y - cb.y) as f64)
    }

    fn heuristic(&self, a: NodeId, b: NodeId, metric: Metric) -> f64 {
        self.cost(a, b, metric)
    }

    fn cell(&self, id: NodeId) -> Cell {
        self.node(id).region
    }

    fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    fn neighbors_in_direction(&self, id: NodeId, direction: Direction) -> Vec<NodeId> {
        if direction.is_diagonal() {
            if !self.allow_diagonal {
                return Vec::new();
            }
            return neighbor::diagonal_neighbor(self, id, direction)
                .into_iter()
                .collect();
        }
        neighbor::cardinal_neighbors(self, id, direction)
    }
}
