use std::sync::Arc;

use crate::entities::{StackValue, Stackable};

/// An item bound to one orientation and an absolute origin within a container.
#[derive(Clone, Debug)]
pub struct Placement {
    /// Index of the item template in the request, used as a back-reference
    pub item_index: usize,
    pub stackable: Arc<Stackable>,
    pub value: StackValue,
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Placement {
    pub fn new(
        item_index: usize,
        stackable: Arc<Stackable>,
        value: StackValue,
        x: u32,
        y: u32,
        z: u32,
    ) -> Self {
        Placement {
            item_index,
            stackable,
            value,
            x,
            y,
            z,
        }
    }

    /// Exclusive upper x bound of the occupied region
    pub fn end_x(&self) -> u32 {
        self.x + self.value.dx
    }

    pub fn end_y(&self) -> u32 {
        self.y + self.value.dy
    }

    pub fn end_z(&self) -> u32 {
        self.z + self.value.dz
    }

    /// True if the occupied regions share a volume (touching faces do not intersect)
    pub fn intersects(&self, other: &Placement) -> bool {
        self.x < other.end_x()
            && other.x < self.end_x()
            && self.y < other.end_y()
            && other.y < self.end_y()
            && self.z < other.end_z()
            && other.z < self.end_z()
    }

    pub fn weight(&self) -> u64 {
        self.stackable.weight
    }

    pub fn volume(&self) -> u64 {
        self.value.volume()
    }
}
