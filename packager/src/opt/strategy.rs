use anyhow::Result;
use boxstack::entities::{Container, ContainerStackValue, PackResult, Stack, StackableItem};

use crate::interrupt::Interrupt;

/// One packing attempt: the remaining copies of `items` into one orientation of one container.
#[derive(Debug, Clone, Copy)]
pub struct Attempt<'a> {
    pub items: &'a [StackableItem],
    /// Number of copies still to be packed, per item template
    pub counts: &'a [usize],
    /// Index of the container in the caller's candidate list
    pub container_index: usize,
    pub container: &'a Container,
    pub stack_value_index: usize,
}

impl Attempt<'_> {
    pub fn stack_value(&self) -> &ContainerStackValue {
        self.container.stack_value(self.stack_value_index)
    }

    pub fn n_copies(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Wraps a stack built for this attempt into a [`PackResult`], deriving the unplaced copies
    pub fn result(&self, stack: Stack) -> PackResult {
        let placed = stack.placed_counts(self.items.len());
        let remaining = self
            .counts
            .iter()
            .zip(placed)
            .map(|(&count, placed)| count - placed)
            .collect();
        PackResult::new(
            self.container_index,
            self.stack_value_index,
            self.stack_value(),
            stack,
            remaining,
        )
    }
}

/// Fills a single container orientation.
pub trait PackStrategy: Sync {
    /// Packs as many copies as possible.
    /// Returns `Ok(None)` if the interrupt tripped before any result was available.
    fn pack(&self, attempt: &Attempt, interrupt: &Interrupt) -> Result<Option<PackResult>>;
}
