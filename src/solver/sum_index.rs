use std::collections::HashMap;

use crate::snake::SnakePath;

/// Complete snakes seen so far, bucketed by sum.
///
/// Buckets only grow; snakes inside a bucket keep discovery order.
#[derive(Debug, Default)]
pub struct SumIndex {
    buckets: HashMap<u32, Vec<SnakePath>>,
    len: usize,
}

impl SumIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the earliest stored snake with the same sum as `snake` that
    /// shares no cell with it.
    pub fn find_disjoint(&self, snake: &SnakePath) -> Option<&SnakePath> {
        self.buckets
            .get(&snake.sum())?
            .iter()
            .find(|stored| !stored.overlaps(snake))
    }

    /// Appends `snake` to the bucket for its sum.
    pub fn insert(&mut self, snake: SnakePath) {
        self.buckets.entry(snake.sum()).or_default().push(snake);
        self.len += 1;
    }

    /// Looks for a disjoint partner of `snake`; stores `snake` when there is none.
    ///
    /// Returns the pair `(snake, partner)` on a match. The index is left
    /// unchanged in that case.
    pub fn match_or_insert(&mut self, snake: SnakePath) -> Option<(SnakePath, SnakePath)> {
        if let Some(partner) = self.find_disjoint(&snake) {
            let partner = partner.clone();
            return Some((snake, partner));
        }
        self.insert(snake);
        None
    }

    /// Total snakes stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct sums stored.
    pub fn distinct_sums(&self) -> usize {
        self.buckets.len()
    }

    /// Snakes stored under `sum`, in insertion order.
    pub fn bucket(&self, sum: u32) -> &[SnakePath] {
        self.buckets.get(&sum).map(Vec::as_slice).unwrap_or(&[])
    }
}
