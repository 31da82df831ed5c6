use std::time::Instant;

use crate::entities::PackedContainer;
use crate::io::ext_repr::{ExtPackedContainer, ExtPlacement, ExtSolution};

/// Exports a solution out of the library
pub fn export(packed: &[PackedContainer], start: Instant) -> ExtSolution {
    ExtSolution {
        containers: packed.iter().map(export_packed_container).collect(),
        run_time_ms: start.elapsed().as_millis() as u64,
    }
}

pub fn export_packed_container(pc: &PackedContainer) -> ExtPackedContainer {
    let csv = pc.stack_value();
    let placements = pc
        .stack
        .placements()
        .iter()
        .map(|p| ExtPlacement {
            item_id: p
                .stackable
                .id
                .clone()
                .unwrap_or_else(|| p.item_index.to_string()),
            position: [p.x, p.y, p.z],
            dimensions: [p.value.dx, p.value.dy, p.value.dz],
        })
        .collect();

    ExtPackedContainer {
        container_id: pc
            .container
            .id
            .clone()
            .unwrap_or_else(|| pc.container_index.to_string()),
        load_dimensions: [csv.load_dx, csv.load_dy, csv.load_dz],
        placements,
        load_weight: pc.stack.weight(),
        gross_weight: pc.gross_weight(),
        density: pc.density(),
    }
}
