//! Frontiers: a FIFO queue for breadth-first expansion and a min-heap for
//! best-first expansion.
//!
//! Both track the high-water mark of their size, which ends up in
//! [`crate::report::SearchStats`].

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::rc::Rc;

use strider_kernel::model::State;

use crate::node::{FrontierKey, SearchNode};

/// FIFO frontier with a seen-set marked at insertion time.
///
/// A state is enqueued at most once over the lifetime of the frontier, so
/// the first node to reach a state is the shallowest one.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Rc<SearchNode>>,
    seen: HashSet<State>,
    high_water: u64,
}

impl FifoFrontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `node` unless its state has been seen.
    ///
    /// Returns `false` (and drops the node) for an already-seen state.
    pub fn push(&mut self, node: Rc<SearchNode>) -> bool {
        if !self.seen.insert(node.state().clone()) {
            return false;
        }
        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len() as u64);
        true
    }

    /// Dequeue the oldest node.
    pub fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.queue.pop_front()
    }

    /// Current queue length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of queue length.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: Rc<SearchNode>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier keyed by `(f_cost, creation_order)`.
///
/// The frontier assigns `creation_order` itself from a monotone counter, so
/// callers only supply `f_cost`. Duplicate suppression is the caller's job:
/// stale entries are skipped lazily on pop against a best-g table.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_order: u64,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `node` with priority `f_cost`.
    pub fn push(&mut self, f_cost: u64, node: Rc<SearchNode>) {
        let key = FrontierKey {
            f_cost,
            creation_order: self.next_order,
        };
        self.next_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
    }

    /// Pop the best (lowest `f_cost`, then oldest) node.
    pub fn pop(&mut self) -> Option<(FrontierKey, Rc<SearchNode>)> {
        self.heap.pop().map(|e| (e.key.0, e.node))
    }

    /// Current frontier size, stale entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
