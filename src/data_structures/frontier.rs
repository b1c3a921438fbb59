use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-ordered working set of (candidate, tentative distance) pairs for
/// shortest-path searches.
///
/// Re-inserting a candidate with an improved distance is the intended way to
/// update it; the superseded entry stays in the heap and is discarded by the
/// caller when popped (lazy invalidation).
#[derive(Debug, Default)]
pub struct Frontier<V, D>
where
    V: Copy + Eq + Ord + Debug,
    D: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(D, V)>>,
}

impl<V, D> Frontier<V, D>
where
    V: Copy + Eq + Ord + Debug,
    D: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier holds no candidates
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a candidate with its tentative distance
    pub fn push(&mut self, candidate: V, distance: D) {
        self.heap.push(Reverse((distance, candidate)));
    }

    /// Removes and returns the candidate with the smallest tentative distance
    pub fn pop(&mut self) -> Option<(V, D)> {
        self.heap
            .pop()
            .map(|Reverse((distance, candidate))| (candidate, distance))
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<(V, D)> {
        self.heap
            .peek()
            .map(|Reverse((distance, candidate))| (*candidate, *distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_distance_order() {
        let mut frontier = Frontier::new();
        frontier.push(7u32, 30u32);
        frontier.push(2, 10);
        frontier.push(5, 20);

        assert_eq!(frontier.pop(), Some((2, 10)));
        assert_eq!(frontier.pop(), Some((5, 20)));
        assert_eq!(frontier.pop(), Some((7, 30)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn peek_reports_the_minimum_without_removing_it() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.peek(), None);

        frontier.push(4u32, 40u32);
        frontier.push(9, 15);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.peek(), Some((9, 15)));
        assert_eq!(frontier.len(), 2);

        assert_eq!(frontier.pop(), Some((9, 15)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn reinsertion_surfaces_the_improved_entry_first() {
        let mut frontier = Frontier::new();
        frontier.push(1u32, 50u32);
        frontier.push(1, 5);

        assert_eq!(frontier.pop(), Some((1, 5)));
        // the stale entry is still present for the caller to skip
        assert_eq!(frontier.pop(), Some((1, 50)));
    }
}
