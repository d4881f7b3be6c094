//! Best-first shortest-path search over block configurations.
//!
//! Classic A*: an open set ordered by `f = g + h`, a closed set of
//! already-expanded configurations, and parent links for reconstructing
//! the move sequence once the goal configuration is popped.
//!
//! The heuristic is a quarter of the Chebyshev distance between
//! corresponding cells of the two configurations. A single roll moves any
//! coordinate by at most 2, so the estimate never exceeds the true
//! remaining roll count and the first goal pop is optimal. Every estimate
//! is an exact multiple of 1/4, so `f` is carried in integer quarter-move
//! units (`4*g + h_quarters`) and the comparison needs no floating point.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::block::{Block, Direction};
use crate::grid::Grid;

/// A discovered configuration in the search tree.
///
/// Nodes live in one arena `Vec` per `solve` call; `came_from` holds the
/// arena index of the parent and the move that produced this node, absent
/// for the start node. The links form a tree rooted at the start and are
/// never mutated after creation.
struct Node {
    block: Block,
    came_from: Option<(u32, Direction)>,
    /// Moves from the start.
    g: u32,
}

/// Open-set entry: lowest `f` pops first, ties break on insertion order.
struct OpenEntry {
    /// Priority in quarter-move units: `4*g + heuristic`.
    f: u32,
    /// Monotone insertion counter, for a deterministic tie-break.
    seq: u32,
    /// Arena index of the node.
    node: u32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so invert both comparisons
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

/// Remaining-distance estimate in quarter-move units.
///
/// `4 * heuristic` of the classic formula
/// `1/4 * max(max(|dx1|, |dy1|), max(|dx2|, |dy2|))`, kept in integers.
fn heuristic(block: Block, goal: Block) -> u32 {
    let first = (block.x1 - goal.x1).abs().max((block.y1 - goal.y1).abs());
    let second = (block.x2 - goal.x2).abs().max((block.y2 - goal.y2).abs());
    first.max(second) as u32
}

/// Finds a shortest roll sequence taking `start` to `goal` on `grid`.
///
/// Returns the moves in start-to-goal order. An empty vector means the
/// goal is unreachable, or that the start already equals the goal; neither
/// is an error. The search owns every node it creates and leaves `grid`
/// untouched, so a grid can be reused across calls.
pub fn solve(grid: &Grid, start: Block, goal: Block) -> Vec<Direction> {
    let mut arena = vec![Node {
        block: start,
        came_from: None,
        g: 0,
    }];
    let mut open = BinaryHeap::new();
    let mut closed: FxHashSet<Block> = FxHashSet::default();
    let mut seq = 0u32;

    open.push(OpenEntry {
        f: heuristic(start, goal),
        seq,
        node: 0,
    });

    while let Some(entry) = open.pop() {
        let block = arena[entry.node as usize].block;
        if block == goal {
            return reconstruct(&arena, entry.node);
        }
        // duplicates of an expanded configuration are stale; drop them
        if !closed.insert(block) {
            continue;
        }

        let g = arena[entry.node as usize].g + 1;
        for (dir, next) in block.successors(grid) {
            if closed.contains(&next) {
                continue;
            }
            // pushed unconditionally: a duplicate with worse f sits in the
            // open set until the closed-set check above discards it
            let node = arena.len() as u32;
            arena.push(Node {
                block: next,
                came_from: Some((entry.node, dir)),
                g,
            });
            seq += 1;
            open.push(OpenEntry {
                f: 4 * g + heuristic(next, goal),
                seq,
                node,
            });
        }
    }

    // open set exhausted: the goal is unreachable
    Vec::new()
}

/// Walks parent links from the goal node back to the start, then reverses
/// the collected moves into start-to-goal order.
fn reconstruct(arena: &[Node], goal_index: u32) -> Vec<Direction> {
    let mut path = Vec::with_capacity(arena[goal_index as usize].g as usize);
    let mut node = &arena[goal_index as usize];
    while let Some((parent, dir)) = node.came_from {
        path.push(dir);
        node = &arena[parent as usize];
    }
    path.reverse();
    path
}
