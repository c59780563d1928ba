//! Bounded flood fills over the voxel world.
//!
//! Everything here is read-only over [`BlockAccess`]; callers decide what
//! to do with the returned cells. All traversals are capped so a
//! pathological world (an ocean, a log wall) cannot stall the tick.

use std::collections::{HashSet, VecDeque};

use relictools_core::{is_leaf, is_log, BlockAccess, BlockId, BlockPos};

/// Trunk scan ceiling for the tree chopper.
pub const TRUNK_CAP: usize = 1_000;
/// How many hops a leaf may be from the nearest trunk block.
const LEAF_MAX_HOPS: u32 = 4;
/// Canopy candidates stay within this box radius of the felled block.
const LEAF_RADIUS: i32 = 5;

/// Which cells count as adjacent during a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// The six axis-aligned neighbors.
    Axis,
    /// The six axis neighbors plus the same-plane diagonals.
    WithPlanarDiagonals,
}

impl Neighborhood {
    fn push_neighbors(self, pos: BlockPos, out: &mut Vec<BlockPos>) {
        out.extend(pos.neighbors6());
        if self == Neighborhood::WithPlanarDiagonals {
            out.extend(pos.planar_ring());
        }
    }
}

/// Breadth-first fill from `seed` over cells matching `accept`, visiting
/// at most `cap` cells. Returns cells in discovery order, seed first.
/// Empty when the seed itself does not match.
pub fn flood_fill(
    world: &dyn BlockAccess,
    seed: BlockPos,
    accept: impl Fn(BlockId) -> bool,
    cap: usize,
    neighborhood: Neighborhood,
) -> Vec<BlockPos> {
    if cap == 0 || !accept(world.block_at(seed)) {
        return Vec::new();
    }

    let mut found = Vec::with_capacity(cap.min(64));
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut scratch = Vec::with_capacity(14);

    visited.insert(seed);
    queue.push_back(seed);

    while let Some(pos) = queue.pop_front() {
        found.push(pos);
        if found.len() >= cap {
            break;
        }
        scratch.clear();
        neighborhood.push_neighbors(pos, &mut scratch);
        for &next in &scratch {
            if visited.insert(next) && accept(world.block_at(next)) {
                queue.push_back(next);
            }
        }
    }
    found
}

/// Keep the `n` cells nearest to `origin`, nearest first. Ties keep
/// their input order.
pub fn nearest(origin: BlockPos, mut cells: Vec<BlockPos>, n: usize) -> Vec<BlockPos> {
    cells.sort_by_key(|&pos| origin.distance_sq(pos));
    cells.truncate(n);
    cells
}

/// A felled tree: the connected trunk plus its attached canopy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSelection {
    pub logs: Vec<BlockPos>,
    pub leaves: Vec<BlockPos>,
}

impl TreeSelection {
    pub fn block_count(&self) -> usize {
        self.logs.len() + self.leaves.len()
    }
}

/// Identify the tree rooted at `seed`: the axis-connected trunk (capped
/// at [`TRUNK_CAP`]) and every leaf reachable from it within
/// [`LEAF_MAX_HOPS`] hops through leaf cells. Canopy candidates are
/// limited to a [`LEAF_RADIUS`] box around the seed. `None` when the
/// seed is not a log.
pub fn find_tree(world: &dyn BlockAccess, seed: BlockPos) -> Option<TreeSelection> {
    let logs = flood_fill(world, seed, is_log, TRUNK_CAP, Neighborhood::Axis);
    if logs.is_empty() {
        return None;
    }

    let in_window = |pos: BlockPos| {
        (pos.x - seed.x).abs() <= LEAF_RADIUS
            && (pos.y - seed.y).abs() <= LEAF_RADIUS
            && (pos.z - seed.z).abs() <= LEAF_RADIUS
    };

    // Multi-source BFS out of the trunk, expanding through leaf and log
    // cells alike. Hop-bounding keeps detached canopies (a neighboring
    // tree's leaves) out of the selection; the window keeps a tall
    // trunk from reaching leaves far above the felled block.
    let mut leaves = Vec::new();
    let mut visited: HashSet<BlockPos> = logs.iter().copied().collect();
    let mut queue: VecDeque<(BlockPos, u32)> = logs.iter().map(|&p| (p, 0)).collect();
    let mut scratch = Vec::with_capacity(14);

    while let Some((pos, hops)) = queue.pop_front() {
        if hops >= LEAF_MAX_HOPS {
            continue;
        }
        scratch.clear();
        Neighborhood::WithPlanarDiagonals.push_neighbors(pos, &mut scratch);
        for &next in &scratch {
            if !in_window(next) || !visited.insert(next) {
                continue;
            }
            let id = world.block_at(next);
            if is_leaf(id) {
                leaves.push(next);
                queue.push_back((next, hops + 1));
            } else if is_log(id) {
                // A diagonally attached log is not part of the trunk,
                // but the canopy is still connected through it.
                queue.push_back((next, hops + 1));
            }
        }
    }

    Some(TreeSelection { logs, leaves })
}

/// The 3x3x3 cube centered on `center`, filtered by `include`. The
/// center cell is subject to the same filter as the rest.
pub fn cube_selection(
    world: &dyn BlockAccess,
    center: BlockPos,
    include: impl Fn(BlockId) -> bool,
) -> Vec<BlockPos> {
    let mut cells = Vec::with_capacity(27);
    for dy in -1..=1 {
        for dx in -1..=1 {
            for dz in -1..=1 {
                let pos = center.offset(dx, dy, dz);
                if include(world.block_at(pos)) {
                    cells.push(pos);
                }
            }
        }
    }
    cells
}
