use anyhow::Result;
use boxstack::entities::{PackResult, Placement, Stack, StackValue, StackableItem};
use boxstack::geometry::ExtremePoints;
use boxstack::util::assertions;
use itertools::Itertools;
use log::debug;

use crate::config::PackagerConfig;
use crate::interrupt::{Checkpoint, Interrupt};
use crate::opt::filter::{min_stackable_area, min_stackable_volume};
use crate::opt::policy::{Candidate, CandidatePolicy};
use crate::opt::strategy::{Attempt, PackStrategy};

/// Largest-area-fit-first (LAFF) packer: a single greedy pass which fills the container
/// level by level, without backtracking.
///
/// Every level is opened by the item with the largest footprint, which fixes the level's height.
/// The level is then filled by repeatedly placing the best candidate at one of the level's
/// extreme points, until nothing fits anymore.
pub struct LaffPackager {
    policy: Box<dyn CandidatePolicy>,
    checkpoints_per_deadline_check: usize,
}

impl LaffPackager {
    pub fn new(policy: Box<dyn CandidatePolicy>, checkpoints_per_deadline_check: usize) -> Self {
        Self {
            policy,
            checkpoints_per_deadline_check,
        }
    }

    pub fn from_config(config: &PackagerConfig) -> Self {
        Self::new(
            config.laff_policy.policy(),
            config.checkpoints_per_deadline_check,
        )
    }
}

impl PackStrategy for LaffPackager {
    fn pack(&self, attempt: &Attempt, interrupt: &Interrupt) -> Result<Option<PackResult>> {
        let items = attempt.items;
        let csv = attempt.stack_value();
        let constraint = csv.constraint.as_deref();

        // copies still in scope, per item template
        let mut scoped = items
            .iter()
            .zip(attempt.counts)
            .map(|(item, &count)| {
                let s = &item.stackable;
                let admissible = s.volume() <= csv.max_load_volume()
                    && s.weight <= csv.max_load_weight
                    && constraint.is_none_or(|c| c.can_accept(s));
                if admissible { count } else { 0 }
            })
            .collect::<Vec<_>>();

        let mut stack = Stack::new();
        let mut eps = ExtremePoints::new(csv.load_dx, csv.load_dy, csv.load_dz);
        let (min_area, min_volume) = scoped_limits(items, &scoped);
        eps.set_minimum_area_and_volume_limit(min_area, min_volume);

        let mut checkpoint = Checkpoint::new(interrupt, self.checkpoints_per_deadline_check);
        let mut level_offset = 0;
        let mut n_levels = 0;

        while scoped.iter().any(|&c| c > 0) {
            if checkpoint.check() {
                return Ok(None);
            }
            // a fresh level has a single point, spanning all of its free space
            let Some(&level_point) = eps.values().first() else {
                break;
            };
            let max_weight = stack.free_weight(csv);

            let mut first: Option<(usize, StackValue)> = None;
            for (item_index, _) in scoped.iter().enumerate().filter(|(_, c)| **c > 0) {
                let stackable = items[item_index].stackable.as_ref();
                if stackable.weight > max_weight
                    || !constraint.is_none_or(|c| c.accepts(&stack, stackable))
                {
                    continue;
                }
                for value in stackable.stack_values() {
                    if !level_point.fits_3d(value) {
                        continue;
                    }
                    if let Some((best_index, best_value)) = &first {
                        let incumbent = Candidate {
                            stackable: &items[*best_index].stackable,
                            value: best_value,
                            point: &level_point,
                        };
                        let candidate = Candidate {
                            stackable,
                            value,
                            point: &level_point,
                        };
                        if !self.policy.better_first(&incumbent, &candidate) {
                            continue;
                        }
                    }
                    if !constraint
                        .is_none_or(|c| c.supports(&stack, stackable, value, 0, 0, level_offset))
                    {
                        continue;
                    }
                    first = Some((item_index, *value));
                }
            }

            let Some((first_index, first_value)) = first else {
                break;
            };
            let level_dz = first_value.dz;

            eps.reset(csv.load_dx, csv.load_dy, level_dz);
            place(
                &mut stack,
                &mut eps,
                &mut scoped,
                attempt,
                level_offset,
                0,
                first_index,
                first_value,
            );

            while !eps.is_empty() && any_affordable(items, &scoped, stack.free_weight(csv)) {
                if checkpoint.check() {
                    return Ok(None);
                }
                let max_point_volume = eps.max_volume();
                let max_point_area = eps.max_area();
                let max_weight = stack.free_weight(csv);

                // (item index, orientation, point index)
                let mut best: Option<(usize, StackValue, usize)> = None;
                for (item_index, _) in scoped.iter().enumerate().filter(|(_, c)| **c > 0) {
                    let stackable = items[item_index].stackable.as_ref();
                    if stackable.volume() > max_point_volume
                        || stackable.weight > max_weight
                        || !constraint.is_none_or(|c| c.accepts(&stack, stackable))
                    {
                        continue;
                    }
                    for value in stackable.stack_values() {
                        if value.area() > max_point_area || value.dz > level_dz {
                            continue;
                        }
                        for (point_index, point) in eps.values().iter().enumerate() {
                            if !point.fits_3d(value) {
                                continue;
                            }
                            if let Some((best_item, best_value, best_point)) = &best {
                                let incumbent = Candidate {
                                    stackable: &items[*best_item].stackable,
                                    value: best_value,
                                    point: eps.value(*best_point),
                                };
                                let candidate = Candidate {
                                    stackable,
                                    value,
                                    point,
                                };
                                if !self.policy.better_next(&incumbent, &candidate) {
                                    continue;
                                }
                            }
                            if !constraint.is_none_or(|c| {
                                c.supports(
                                    &stack,
                                    stackable,
                                    value,
                                    point.min_x,
                                    point.min_y,
                                    level_offset + point.min_z,
                                )
                            }) {
                                continue;
                            }
                            best = Some((item_index, *value, point_index));
                        }
                    }
                }

                let Some((item_index, value, point_index)) = best else {
                    break;
                };
                place(
                    &mut stack,
                    &mut eps,
                    &mut scoped,
                    attempt,
                    level_offset,
                    point_index,
                    item_index,
                    value,
                );

                // tighten the pruning limits once the item which set them is used up
                let stackable = &items[item_index].stackable;
                let min_area = stackable.minimum_area() == eps.min_area_limit();
                let min_volume = stackable.volume() == eps.min_volume_limit();
                if min_area || min_volume {
                    let (area, volume) = scoped_limits(items, &scoped);
                    match (min_area, min_volume) {
                        (true, true) => eps.set_minimum_area_and_volume_limit(area, volume),
                        (true, false) => eps.set_minimum_area_limit(area),
                        _ => eps.set_minimum_volume_limit(volume),
                    }
                }
            }

            n_levels += 1;
            level_offset += level_dz;
            let remaining_dz = csv.load_dz - level_offset;
            if remaining_dz == 0 {
                break;
            }
            eps.reset(csv.load_dx, csv.load_dy, remaining_dz);
        }

        debug_assert!(assertions::stack_is_feasible(&stack, csv));
        debug!(
            "[LAFF] container {} (orientation {}): placed {}/{} items in {} levels",
            attempt.container_index,
            attempt.stack_value_index,
            stack.len(),
            attempt.n_copies(),
            n_levels
        );

        Ok(Some(attempt.result(stack)))
    }
}

/// Smallest footprint area and smallest volume over the templates with copies in scope
fn scoped_limits(items: &[StackableItem], scoped: &[usize]) -> (u64, u64) {
    let stackables = items
        .iter()
        .zip(scoped)
        .filter(|(_, c)| **c > 0)
        .map(|(item, _)| item.stackable.as_ref())
        .collect_vec();
    (
        min_stackable_area(stackables.iter().copied()),
        min_stackable_volume(stackables.iter().copied()),
    )
}

/// True if some template with copies in scope weighs at most `free_weight`
fn any_affordable(items: &[StackableItem], scoped: &[usize], free_weight: u64) -> bool {
    items
        .iter()
        .zip(scoped)
        .any(|(item, &c)| c > 0 && item.stackable.weight <= free_weight)
}

/// Places one copy of template `item_index` at point `point_index` of the current level
#[allow(clippy::too_many_arguments)]
fn place(
    stack: &mut Stack,
    eps: &mut ExtremePoints,
    scoped: &mut [usize],
    attempt: &Attempt,
    level_offset: u32,
    point_index: usize,
    item_index: usize,
    value: StackValue,
) {
    let point = *eps.value(point_index);
    let stackable = attempt.items[item_index].stackable.clone();
    let in_level = Placement::new(
        item_index,
        stackable,
        value,
        point.min_x,
        point.min_y,
        point.min_z,
    );
    eps.add(point_index, &in_level);
    // lift the placement from level coordinates to container coordinates
    stack.add(Placement {
        z: in_level.z + level_offset,
        ..in_level
    });
    scoped[item_index] -= 1;
}
