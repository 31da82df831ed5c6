use anyhow::{Result, ensure};

use crate::entities::{Container, StackableItem};

#[derive(Debug, Clone)]
/// Packing instance: a set of items and the candidate containers, ranked from most to least desirable.
pub struct Instance {
    pub name: String,
    /// The items to be packed, with their counts
    pub items: Vec<StackableItem>,
    pub containers: Vec<Container>,
}

impl Instance {
    pub fn new(name: String, items: Vec<StackableItem>, containers: Vec<Container>) -> Result<Self> {
        ensure!(!containers.is_empty(), "an instance needs at least one container");
        Ok(Instance {
            name,
            items,
            containers,
        })
    }

    /// Total number of item copies
    pub fn total_item_qty(&self) -> usize {
        self.items.iter().map(|item| item.count).sum()
    }

    pub fn item_volume(&self) -> u64 {
        self.items.iter().map(|item| item.volume()).sum()
    }

    pub fn item_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight()).sum()
    }
}
