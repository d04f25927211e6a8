use crate::heap::{HeapError, IndexedMinHeap};
use std::hash::Hash;

/// Min-priority queue for relaxation-style searches: enqueueing an item that is already queued
/// lowers its priority instead of adding a second entry.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P> {
    heap: IndexedMinHeap<T, P>,
}

impl<T, P> PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Copy,
{
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: IndexedMinHeap::with_capacity(capacity),
        }
    }

    /// Queues `item`, or lowers its priority if it is already queued. The priority of a queued
    /// item must never be raised.
    pub fn enqueue(&mut self, item: T, priority: P) -> Result<(), HeapError> {
        if self.heap.contains(&item) {
            self.heap.decrease_key(&item, priority)
        } else {
            self.heap.insert(item, priority)
        }
    }
    pub fn dequeue(&mut self) -> Result<T, HeapError> {
        self.heap.extract_min()
    }
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.heap.find_min()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn contains(&self, item: &T) -> bool {
        self.heap.contains(item)
    }
    pub fn priority_of(&self, item: &T) -> Option<P> {
        self.heap.priority_of(item)
    }
}
