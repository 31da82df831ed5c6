use std::cmp::Ordering;

use crate::entities::{ContainerStackValue, Stack};

/// Outcome of packing a set of items into one orientation of one container.
#[derive(Clone, Debug)]
pub struct PackResult {
    /// Index of the container in the candidate list
    pub container_index: usize,
    /// Index of the container orientation used
    pub stack_value_index: usize,
    pub stack: Stack,
    /// Residual count per item template which could not be placed
    pub remaining: Vec<usize>,
    load_volume: u64,
}

impl PackResult {
    pub fn new(
        container_index: usize,
        stack_value_index: usize,
        csv: &ContainerStackValue,
        stack: Stack,
        remaining: Vec<usize>,
    ) -> Self {
        PackResult {
            container_index,
            stack_value_index,
            stack,
            remaining,
            load_volume: csv.max_load_volume(),
        }
    }

    /// True if every requested item was placed
    pub fn contains_last_stackable(&self) -> bool {
        self.remaining.iter().all(|&qty| qty == 0)
    }

    /// True if no item was placed
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn placed_count(&self) -> usize {
        self.stack.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.iter().sum()
    }

    /// Load volume of the container orientation
    pub fn container_volume(&self) -> u64 {
        self.load_volume
    }
}

/// Total order over [`PackResult`]s used to pick the best among several attempts.
pub trait PackResultComparator: Send + Sync {
    /// [`Ordering::Greater`] if `a` is preferable to `b`, [`Ordering::Less`] if `b` is preferable.
    fn compare(&self, a: &PackResult, b: &PackResult) -> Ordering;
}

/// Prefers complete results, then more placed items, then more loaded volume,
/// then more loaded weight, and finally the smaller container.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPackResultComparator;

impl PackResultComparator for DefaultPackResultComparator {
    fn compare(&self, a: &PackResult, b: &PackResult) -> Ordering {
        a.contains_last_stackable()
            .cmp(&b.contains_last_stackable())
            .then(a.placed_count().cmp(&b.placed_count()))
            .then(a.stack.volume().cmp(&b.stack.volume()))
            .then(a.stack.weight().cmp(&b.stack.weight()))
            .then(b.container_volume().cmp(&a.container_volume()))
    }
}
