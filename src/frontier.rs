//! Pending-node collections for the search loop.

use std::collections::VecDeque;

use crate::error::{DegreesError, Result};

/// Discovered-but-unexpanded items. The removal order decides the traversal.
pub trait Frontier<T>: Default {
    fn add(&mut self, item: T);

    /// Takes the next item, failing with `EmptyFrontier` when nothing is held.
    fn remove(&mut self) -> Result<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out: breadth-first order.
#[derive(Debug, Clone)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T: PartialEq> QueueFrontier<T> {
    /// Linear scan over the pending items.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn remove(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(DegreesError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Last in, first out: depth-first order.
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> StackFrontier<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self) -> Result<T> {
        self.items.pop().ok_or(DegreesError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut frontier = QueueFrontier::default();
        frontier.add("a");
        frontier.add("b");
        frontier.add("c");
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.remove().unwrap(), "a");
        assert_eq!(frontier.remove().unwrap(), "b");
        frontier.add("d");
        assert_eq!(frontier.remove().unwrap(), "c");
        assert_eq!(frontier.remove().unwrap(), "d");
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut frontier = StackFrontier::default();
        frontier.add(1);
        frontier.add(2);
        assert_eq!(frontier.remove().unwrap(), 2);
        frontier.add(3);
        assert_eq!(frontier.remove().unwrap(), 3);
        assert_eq!(frontier.remove().unwrap(), 1);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_remove_from_empty_frontier() {
        let mut queue: QueueFrontier<u32> = QueueFrontier::default();
        assert!(matches!(queue.remove(), Err(DegreesError::EmptyFrontier)));

        let mut stack: StackFrontier<u32> = StackFrontier::default();
        assert!(matches!(stack.remove(), Err(DegreesError::EmptyFrontier)));
    }

    #[test]
    fn test_no_deduplication() {
        let mut frontier = QueueFrontier::default();
        frontier.add(7);
        frontier.add(7);
        assert!(frontier.contains(&7));
        assert_eq!(frontier.len(), 2);
        assert!(!frontier.contains(&8));
    }
}
