use itertools::Itertools;
use log::error;

use crate::entities::{ContainerStackValue, Placement, Stack};
use crate::geometry::ExtremePoints;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn placement_is_disjoint(stack: &Stack, placement: &Placement) -> bool {
    match stack.placements().iter().find(|p| p.intersects(placement)) {
        Some(p) => {
            error!("placement {placement:?} intersects {p:?}");
            false
        }
        None => true,
    }
}

/// No two placements overlap, all lie within the load space and the weight limit is respected
pub fn stack_is_feasible(stack: &Stack, csv: &ContainerStackValue) -> bool {
    let within_bounds = stack.placements().iter().all(|p| {
        p.end_x() <= csv.load_dx && p.end_y() <= csv.load_dy && p.end_z() <= csv.load_dz
    });
    let disjoint = stack
        .placements()
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.intersects(b));
    let weight: u64 = stack.placements().iter().map(|p| p.weight()).sum();

    within_bounds && disjoint && weight == stack.weight() && weight <= csv.max_load_weight
}

/// No free box overlaps a registered placement, and all free boxes lie within the extents
pub fn extreme_points_are_free(eps: &ExtremePoints) -> bool {
    let (dx, dy, dz) = eps.extents();
    for point in eps.values() {
        if point.max_x > dx || point.max_y > dy || point.max_z > dz {
            error!("point {point:?} exceeds extents {:?}", eps.extents());
            return false;
        }
        if let Some(p) = eps.placements().iter().find(|p| point.intersects(p)) {
            error!("point {point:?} overlaps placement {p:?}");
            return false;
        }
    }
    true
}

/// No free box is contained in another
pub fn extreme_points_are_maximal(eps: &ExtremePoints) -> bool {
    eps.values()
        .iter()
        .enumerate()
        .cartesian_product(eps.values().iter().enumerate())
        .all(|((i, a), (j, b))| i == j || !a.contains(b))
}
