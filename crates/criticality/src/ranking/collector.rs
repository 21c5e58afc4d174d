use std::cmp::Ordering;

#[derive(Debug)]
struct Entry<T> {
    score: f64,
    sequence: u64,
    row: T,
}

impl<T> Entry<T> {
    /// Higher score wins; among equal scores the earlier insertion wins.
    fn outranks(&self, other: &Self) -> bool {
        match self.score.total_cmp(&other.score) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.sequence < other.sequence,
        }
    }
}

/// Max-heap over `(score, -insertion sequence)` stored in a flat buffer.
///
/// Rows come back highest score first, and rows with equal scores come back
/// in the order they were inserted. Everything is held in memory until drained.
#[derive(Debug)]
pub struct RankedCollector<T> {
    heap: Vec<Entry<T>>,
    next_sequence: u64,
}

impl<T> Default for RankedCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RankedCollector<T> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn insert(&mut self, row: T, score: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry {
            score,
            sequence,
            row,
        });
        self.sift_up(self.heap.len() - 1);
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Score of the row the next [`pop_highest`](Self::pop_highest) returns.
    pub fn peek_score(&self) -> Option<f64> {
        self.heap.first().map(|entry| entry.score)
    }

    /// Removes the best-ranked row, or `None` once the collector is empty.
    pub fn pop_highest(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top.row)
    }

    /// Consumes the collector, yielding rows in rank order.
    pub fn drain(self) -> Drain<T> {
        Drain { collector: self }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.heap[index].outranks(&self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;

            if left < len && self.heap[left].outranks(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].outranks(&self.heap[best]) {
                best = right;
            }
            if best == index {
                break;
            }
            self.heap.swap(index, best);
            index = best;
        }
    }
}

/// Iterator returned by [`RankedCollector::drain`].
#[derive(Debug)]
pub struct Drain<T> {
    collector: RankedCollector<T>,
}

impl<T> Iterator for Drain<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.collector.pop_highest()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.collector.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<T> {}
