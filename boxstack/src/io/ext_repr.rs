use serde::{Deserialize, Serialize};

/// Packing instance: items to be packed and the candidate containers, ranked best-to-worst
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub items: Vec<ExtItem>,
    pub containers: Vec<ExtContainer>,
}

/// External representation of a [`StackableItem`](crate::entities::StackableItem)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Dimensions `[dx, dy, dz]` as defined
    pub dimensions: [u32; 3],
    pub weight: u64,
    /// Allowed rotations, all six orientations if not specified
    #[serde(default)]
    pub rotation: ExtRotation,
    /// Number of copies to pack
    pub count: usize,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtRotation {
    None,
    TwoD,
    #[default]
    ThreeD,
}

/// External representation of a [`Container`](crate::entities::Container)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Load space `[dx, dy, dz]`
    pub load_dimensions: [u32; 3],
    pub max_load_weight: u64,
    #[serde(default)]
    pub empty_weight: u64,
    /// Also allow the load space with its footprint rotated by 90 degrees
    #[serde(default)]
    pub rotatable: bool,
}

/// Packing solution: the containers used, in order
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub containers: Vec<ExtPackedContainer>,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`PackedContainer`](crate::entities::PackedContainer)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackedContainer {
    pub container_id: String,
    /// Load space `[dx, dy, dz]` of the orientation used
    pub load_dimensions: [u32; 3],
    pub placements: Vec<ExtPlacement>,
    pub load_weight: u64,
    pub gross_weight: u64,
    /// Loaded volume divided by the load volume
    pub density: f32,
}

/// External representation of a [`Placement`](crate::entities::Placement)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub item_id: String,
    /// Origin `[x, y, z]`
    pub position: [u32; 3],
    /// Oriented dimensions `[dx, dy, dz]`
    pub dimensions: [u32; 3],
}
