//! Frontier disciplines: LIFO stack, FIFO queue, and priority queue with
//! update-on-improve.
//!
//! Every frontier tracks its high-water mark (largest simultaneous size),
//! which searches report as `max_fringe_size`.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::contract::Cost;
use crate::node::{FrontierKey, SearchNode};

/// An unprioritized frontier: the order items come back out is the discipline.
pub trait Frontier<T> {
    /// Add an item.
    fn push(&mut self, item: T);

    /// Remove the next item under this discipline.
    fn pop(&mut self) -> Option<T>;

    /// Current number of items.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;
}

/// Last-in-first-out frontier (depth-first discipline).
#[derive(Debug)]
pub struct LifoFrontier<T> {
    items: Vec<T>,
    high_water: usize,
}

impl<T> LifoFrontier<T> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for LifoFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// First-in-first-out frontier (breadth-first discipline).
#[derive(Debug)]
pub struct FifoFrontier<T> {
    items: VecDeque<T>,
    high_water: usize,
}

impl<T> FifoFrontier<T> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// A heap entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct PriorityEntry<S, A> {
    key: Reverse<FrontierKey>,
    node: SearchNode<S, A>,
}

impl<S, A> PartialEq for PriorityEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, A> Eq for PriorityEntry<S, A> {}

impl<S, A> PartialOrd for PriorityEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for PriorityEntry<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier with state-matched update.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the lowest-priority node
/// - A per-state index of every live entry, used by `update`
/// - A set of entries superseded by `update`, dropped lazily at pop time
///
/// Ties pop in insertion order, so results are reproducible.
#[derive(Debug)]
pub struct PriorityFrontier<S, A> {
    heap: BinaryHeap<PriorityEntry<S, A>>,
    queued: HashMap<S, Vec<FrontierKey>>,
    superseded: HashSet<u64>,
    next_creation_order: u64,
    live: usize,
    high_water: usize,
}

impl<S: Clone + Eq + Hash, A> PriorityFrontier<S, A> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued: HashMap::new(),
            superseded: HashSet::new(),
            next_creation_order: 0,
            live: 0,
            high_water: 0,
        }
    }

    /// Insert a node unconditionally, even if its state is already queued.
    pub fn push(&mut self, node: SearchNode<S, A>, priority: Cost) {
        let key = FrontierKey {
            priority,
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;

        self.queued.entry(node.state.clone()).or_default().push(key);

        self.heap.push(PriorityEntry {
            key: Reverse(key),
            node,
        });
        self.live += 1;
        self.high_water = self.high_water.max(self.live);
    }

    /// Insert or lower the entry for `node.state`.
    ///
    /// - Every queued entry has a higher priority: they are all replaced by
    ///   `node`.
    /// - Some queued entry has an equal or lower priority: no change.
    /// - Not queued: `node` is inserted.
    ///
    /// Returns `true` if `node` was queued.
    pub fn update(&mut self, node: SearchNode<S, A>, priority: Cost) -> bool {
        if let Some(keys) = self.queued.remove(&node.state) {
            if keys
                .iter()
                .any(|key| key.priority.total_cmp(&priority) != Ordering::Greater)
            {
                self.queued.insert(node.state, keys);
                return false;
            }
            self.live -= keys.len();
            self.superseded.extend(keys.iter().map(|key| key.creation_order));
        }
        self.push(node, priority);
        true
    }

    /// Pop the lowest-priority node, skipping superseded entries.
    pub fn pop(&mut self) -> Option<SearchNode<S, A>> {
        while let Some(entry) = self.heap.pop() {
            let key = entry.key.0;
            if self.superseded.remove(&key.creation_order) {
                continue;
            }
            self.live -= 1;
            if let Some(keys) = self.queued.get_mut(&entry.node.state) {
                keys.retain(|k| k.creation_order != key.creation_order);
                if keys.is_empty() {
                    self.queued.remove(&entry.node.state);
                }
            }
            return Some(entry.node);
        }
        None
    }

    /// Lowest priority among the queued entries for `state`, if any.
    #[must_use]
    pub fn priority_of(&self, state: &S) -> Option<Cost> {
        self.queued
            .get(state)?
            .iter()
            .map(|key| key.priority)
            .min_by(f64::total_cmp)
    }

    /// Current number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// High-water mark of live entries.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S: Clone + Eq + Hash, A> Default for PriorityFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
