use boxstack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::PackagerConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackagerOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    /// Absent if the items could not be packed
    pub solution: Option<ExtSolution>,
    pub config: PackagerConfig,
}
