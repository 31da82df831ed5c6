use std::sync::Arc;

use anyhow::{Result, ensure};

use crate::entities::{StackConstraint, StackValue, Stackable};

/// One orientation of a [`Container`]: the dimensions of its load space and its load limits.
#[derive(Clone, Debug)]
pub struct ContainerStackValue {
    pub load_dx: u32,
    pub load_dy: u32,
    pub load_dz: u32,
    pub max_load_weight: u64,
    /// Optional structural rules for this orientation
    pub constraint: Option<Arc<dyn StackConstraint>>,
}

impl ContainerStackValue {
    pub fn new(load_dx: u32, load_dy: u32, load_dz: u32, max_load_weight: u64) -> Result<Self> {
        ensure!(
            load_dx > 0 && load_dy > 0 && load_dz > 0,
            "invalid load space, dx: {load_dx}, dy: {load_dy}, dz: {load_dz}"
        );
        Ok(ContainerStackValue {
            load_dx,
            load_dy,
            load_dz,
            max_load_weight,
            constraint: None,
        })
    }

    pub fn with_constraint(self, constraint: Arc<dyn StackConstraint>) -> Self {
        ContainerStackValue {
            constraint: Some(constraint),
            ..self
        }
    }

    pub fn max_load_volume(&self) -> u64 {
        self.load_dx as u64 * self.load_dy as u64 * self.load_dz as u64
    }

    /// True if the orientation of an item fits within the load space
    pub fn fits(&self, value: &StackValue) -> bool {
        value.fits_within(self.load_dx, self.load_dy, self.load_dz)
    }

    /// True if the item can be loaded in this orientation of the container on its own
    pub fn can_load(&self, stackable: &Stackable) -> bool {
        stackable.weight <= self.max_load_weight
            && stackable.volume() <= self.max_load_volume()
            && self.constraint.as_ref().is_none_or(|c| c.can_accept(stackable))
            && stackable.stack_values().iter().any(|sv| self.fits(sv))
    }
}

/// A container in which [`Stackable`]s can be loaded.
/// Immutable once constructed and shared read-only between packing attempts.
#[derive(Clone, Debug)]
pub struct Container {
    /// Opaque identifier, passed through to the output
    pub id: Option<String>,
    /// Opaque description, passed through to the output
    pub description: Option<String>,
    /// Weight of the empty container
    pub empty_weight: u64,
    stack_values: Vec<ContainerStackValue>,
}

impl Container {
    pub fn new(stack_values: Vec<ContainerStackValue>, empty_weight: u64) -> Result<Self> {
        ensure!(
            !stack_values.is_empty(),
            "a container needs at least one orientation"
        );
        Ok(Container {
            id: None,
            description: None,
            empty_weight,
            stack_values,
        })
    }

    /// Container with a single, unconstrained orientation
    pub fn with_load_space(dx: u32, dy: u32, dz: u32, max_load_weight: u64) -> Result<Self> {
        Container::new(vec![ContainerStackValue::new(dx, dy, dz, max_load_weight)?], 0)
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        Container {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Container {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn stack_values(&self) -> &[ContainerStackValue] {
        &self.stack_values
    }

    pub fn stack_value(&self, index: usize) -> &ContainerStackValue {
        &self.stack_values[index]
    }

    /// Largest load volume over all orientations
    pub fn max_load_volume(&self) -> u64 {
        self.stack_values
            .iter()
            .map(|sv| sv.max_load_volume())
            .max()
            .unwrap_or(0)
    }

    /// Largest load weight over all orientations
    pub fn max_load_weight(&self) -> u64 {
        self.stack_values
            .iter()
            .map(|sv| sv.max_load_weight)
            .max()
            .unwrap_or(0)
    }

    /// True if at least one orientation of the container can hold the item on its own
    pub fn can_load(&self, stackable: &Stackable) -> bool {
        self.stack_values.iter().any(|sv| sv.can_load(stackable))
    }
}
