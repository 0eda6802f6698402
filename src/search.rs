//! This module implements the priority-driven search underneath the maze solver. It follows
//! [pathfinding's dijkstra function](https://docs.rs/pathfinding/latest/pathfinding/directed/dijkstra/index.html)
//! but keeps the search state inside the searched structure, so the grid can expose distances
//! and predecessors per cell once the search is done.
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A graph the search can run over. The implementor owns the tentative costs, the settled
/// markers and the predecessor links; the search only drives them.
pub trait SearchSpace {
    type Node: Copy;
    type Cost: Zero + Ord + Copy;
    type Successors: IntoIterator<Item = (Self::Node, Self::Cost)>;

    fn successors(&self, node: &Self::Node) -> Self::Successors;
    /// Best known cost of a node, [None] standing for infinity.
    fn cost(&self, node: &Self::Node) -> Option<Self::Cost>;
    fn is_settled(&self, node: &Self::Node) -> bool;
    fn settle(&mut self, node: &Self::Node);
    fn record(&mut self, node: &Self::Node, cost: Self::Cost, parent: Option<Self::Node>);
}

/// Counters describing one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the heap, the start included.
    pub pushed: usize,
    pub popped: usize,
    /// Popped entries discarded because their node was already settled.
    pub stale: usize,
    pub settled: usize,
    pub relaxations: usize,
}

struct SmallestCostHolder<N, K> {
    cost: K,
    sequence: usize,
    node: N,
}

impl<N, K: PartialEq> Eq for SmallestCostHolder<N, K> {}

impl<N, K: PartialEq> PartialEq for SmallestCostHolder<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.sequence == other.sequence
    }
}

impl<N, K: Ord> PartialOrd for SmallestCostHolder<N, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, K: Ord> Ord for SmallestCostHolder<N, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest cost; equal costs come out in the order
        // they were pushed
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Runs a single-source search from `start` until the queue is exhausted. Superseded heap
/// entries are not removed when a node is relaxed again; they are dropped when popped after
/// their node has been settled. A node is only relaxed on a strict improvement, so the first
/// relaxation reaching the final cost decides the predecessor.
pub fn dijkstra<S: SearchSpace>(space: &mut S, start: S::Node) -> SearchStats {
    let mut stats = SearchStats::default();
    let mut to_see = BinaryHeap::new();
    space.record(&start, Zero::zero(), None);
    to_see.push(SmallestCostHolder {
        cost: S::Cost::zero(),
        sequence: 0,
        node: start,
    });
    stats.pushed += 1;
    while let Some(SmallestCostHolder { cost, node, .. }) = to_see.pop() {
        stats.popped += 1;
        if space.is_settled(&node) {
            stats.stale += 1;
            continue;
        }
        space.settle(&node);
        stats.settled += 1;
        for (successor, move_cost) in space.successors(&node) {
            let new_cost = cost + move_cost;
            let improves = space
                .cost(&successor)
                .map_or(true, |known| new_cost < known);
            if !improves {
                continue;
            }
            space.record(&successor, new_cost, Some(node));
            stats.relaxations += 1;
            to_see.push(SmallestCostHolder {
                cost: new_cost,
                sequence: stats.pushed,
                node: successor,
            });
            stats.pushed += 1;
        }
    }
    stats
}
