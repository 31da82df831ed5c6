use std::sync::Arc;

use anyhow::{Result, ensure};
use itertools::Itertools;

/// Rotations in which a [`Stackable`] may be placed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AllowedRotation {
    /// Only the orientation as defined
    None,
    /// Rotation around the vertical axis: the footprint may be swapped, the height is fixed
    TwoD,
    /// All six axis-aligned orientations
    #[default]
    ThreeD,
}

/// One axis-aligned orientation of a box, with its derived footprint area and volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StackValue {
    pub dx: u32,
    pub dy: u32,
    pub dz: u32,
    area: u64,
    volume: u64,
}

impl StackValue {
    pub fn new(dx: u32, dy: u32, dz: u32) -> Self {
        let area = dx as u64 * dy as u64;
        StackValue {
            dx,
            dy,
            dz,
            area,
            volume: area * dz as u64,
        }
    }

    /// Footprint area (`dx * dy`)
    pub fn area(&self) -> u64 {
        self.area
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// True if this orientation fits within the given extents on every axis
    pub fn fits_within(&self, dx: u32, dy: u32, dz: u32) -> bool {
        self.dx <= dx && self.dy <= dy && self.dz <= dz
    }
}

/// Box-shaped item to be placed in a [`Container`](crate::entities::Container).
/// Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Stackable {
    /// Opaque identifier, passed through to the output
    pub id: Option<String>,
    /// Opaque description, passed through to the output
    pub description: Option<String>,
    pub weight: u64,
    /// All admissible orientations, duplicates removed
    stack_values: Vec<StackValue>,
    volume: u64,
    min_area: u64,
}

impl Stackable {
    pub fn new(dx: u32, dy: u32, dz: u32, weight: u64, rotation: AllowedRotation) -> Result<Self> {
        ensure!(
            dx > 0 && dy > 0 && dz > 0,
            "invalid box dimensions, dx: {dx}, dy: {dy}, dz: {dz}"
        );
        let stack_values = match rotation {
            AllowedRotation::None => vec![StackValue::new(dx, dy, dz)],
            AllowedRotation::TwoD => vec![StackValue::new(dx, dy, dz), StackValue::new(dy, dx, dz)],
            AllowedRotation::ThreeD => vec![
                StackValue::new(dx, dy, dz),
                StackValue::new(dy, dx, dz),
                StackValue::new(dx, dz, dy),
                StackValue::new(dz, dx, dy),
                StackValue::new(dy, dz, dx),
                StackValue::new(dz, dy, dx),
            ],
        };
        Ok(Self::from_stack_values(stack_values, weight))
    }

    /// Creates a box from an explicit list of orientations.
    /// All orientations should describe the same box.
    pub fn with_stack_values(stack_values: Vec<StackValue>, weight: u64) -> Result<Self> {
        ensure!(!stack_values.is_empty(), "a box needs at least one orientation");
        ensure!(
            stack_values.iter().map(|sv| sv.volume()).all_equal(),
            "all orientations of a box must have the same volume"
        );
        ensure!(
            stack_values.iter().all(|sv| sv.volume() > 0),
            "orientations must have non-zero dimensions"
        );
        Ok(Self::from_stack_values(stack_values, weight))
    }

    fn from_stack_values(stack_values: Vec<StackValue>, weight: u64) -> Self {
        let stack_values = stack_values.into_iter().unique().collect_vec();
        let volume = stack_values[0].volume();
        let min_area = stack_values.iter().map(|sv| sv.area()).min().unwrap_or(0);
        Stackable {
            id: None,
            description: None,
            weight,
            stack_values,
            volume,
            min_area,
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        Stackable {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Stackable {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn stack_values(&self) -> &[StackValue] {
        &self.stack_values
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// Smallest footprint area over all orientations
    pub fn minimum_area(&self) -> u64 {
        self.min_area
    }
}

/// A [`Stackable`] template together with the number of copies to pack.
/// Copies of the same template are interchangeable.
#[derive(Clone, Debug)]
pub struct StackableItem {
    pub stackable: Arc<Stackable>,
    pub count: usize,
}

impl StackableItem {
    pub fn new(stackable: Stackable, count: usize) -> Result<Self> {
        ensure!(count >= 1, "item count must be at least 1");
        Ok(StackableItem {
            stackable: Arc::new(stackable),
            count,
        })
    }

    pub fn volume(&self) -> u64 {
        self.stackable.volume() * self.count as u64
    }

    pub fn weight(&self) -> u64 {
        self.stackable.weight * self.count as u64
    }
}
