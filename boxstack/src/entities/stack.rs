use crate::entities::{Container, ContainerStackValue, Placement};
use crate::util::assertions;

/// Ordered collection of [`Placement`]s within one container.
/// Placements never overlap pairwise and their summed weight stays within the container's limit.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    placements: Vec<Placement>,
    weight: u64,
    volume: u64,
}

impl Stack {
    pub fn new() -> Self {
        Stack::default()
    }

    pub fn add(&mut self, placement: Placement) {
        debug_assert!(assertions::placement_is_disjoint(self, &placement));
        self.weight += placement.weight();
        self.volume += placement.volume();
        self.placements.push(placement);
    }

    /// Removes the most recently added placement
    pub fn pop(&mut self) -> Option<Placement> {
        let placement = self.placements.pop()?;
        self.weight -= placement.weight();
        self.volume -= placement.volume();
        Some(placement)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Sum of the weights of all placed items
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Sum of the volumes of all placed items
    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// Weight that can still be loaded before reaching `csv`'s limit
    pub fn free_weight(&self, csv: &ContainerStackValue) -> u64 {
        csv.max_load_weight.saturating_sub(self.weight)
    }

    /// Number of placements per item template, indexed by `item_index`
    pub fn placed_counts(&self, n_items: usize) -> Vec<usize> {
        let mut counts = vec![0; n_items];
        for p in &self.placements {
            counts[p.item_index] += 1;
        }
        counts
    }
}

/// A container together with the [`Stack`] loaded into it.
/// The container owns its stack; the stack refers back to the request only by item index.
#[derive(Clone, Debug)]
pub struct PackedContainer {
    /// Index of the container in the candidate list it was chosen from
    pub container_index: usize,
    pub container: Container,
    /// Index of the container orientation that was used
    pub stack_value_index: usize,
    pub stack: Stack,
}

impl PackedContainer {
    pub fn stack_value(&self) -> &ContainerStackValue {
        self.container.stack_value(self.stack_value_index)
    }

    /// Total weight: the empty container plus its load
    pub fn gross_weight(&self) -> u64 {
        self.container.empty_weight + self.stack.weight()
    }

    /// Loaded volume divided by the load volume of the used orientation
    pub fn density(&self) -> f32 {
        self.stack.volume() as f32 / self.stack_value().max_load_volume() as f32
    }
}
