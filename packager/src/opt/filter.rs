use boxstack::entities::{Container, Stackable, StackableItem};
use itertools::Itertools;
use log::debug;

/// Indices of the containers which could potentially hold all copies of `items`
/// when at most `count` containers are used.
///
/// With a single container, its load volume and weight must cover the totals and it must be able
/// to load every item. With more, a container only has to cover the totals together with
/// `count - 1` copies of the largest container, and to be able to load at least one item.
pub fn filter_by_volume_and_weight(
    items: &[StackableItem],
    counts: &[usize],
    containers: &[Container],
    count: usize,
) -> Vec<usize> {
    let present = items
        .iter()
        .zip(counts)
        .filter(|(_, c)| **c > 0)
        .map(|(item, _)| item.stackable.as_ref())
        .collect_vec();
    let volume: u64 = items
        .iter()
        .zip(counts)
        .map(|(item, &c)| item.stackable.volume() * c as u64)
        .sum();
    let weight: u64 = items
        .iter()
        .zip(counts)
        .map(|(item, &c)| item.stackable.weight * c as u64)
        .sum();

    let selected = match count {
        0 | 1 => containers
            .iter()
            .positions(|c| {
                c.max_load_volume() >= volume
                    && c.max_load_weight() >= weight
                    && present.iter().all(|s| c.can_load(s))
            })
            .collect_vec(),
        _ => {
            let max_volume = containers.iter().map(|c| c.max_load_volume()).max().unwrap_or(0);
            let max_weight = containers.iter().map(|c| c.max_load_weight()).max().unwrap_or(0);
            let others = count as u64 - 1;

            if max_volume.saturating_mul(count as u64) < volume
                || max_weight.saturating_mul(count as u64) < weight
            {
                // no combination of containers will work at this count
                return vec![];
            }

            let min_volume = min_stackable_volume(present.iter().copied());
            let min_weight = present.iter().map(|s| s.weight).min().unwrap_or(0);

            containers
                .iter()
                .positions(|c| {
                    c.max_load_volume() >= min_volume
                        && c.max_load_weight() >= min_weight
                        && c.max_load_volume()
                            .saturating_add(max_volume.saturating_mul(others))
                            >= volume
                        && c.max_load_weight()
                            .saturating_add(max_weight.saturating_mul(others))
                            >= weight
                        && present.iter().any(|s| c.can_load(s))
                })
                .collect_vec()
        }
    };

    debug!(
        "[PACK] {}/{} containers remain after filtering by volume and weight",
        selected.len(),
        containers.len()
    );
    selected
}

/// Smallest footprint area over the orientations of all `stackables`, `u64::MAX` if there are none
pub fn min_stackable_area<'a>(stackables: impl IntoIterator<Item = &'a Stackable>) -> u64 {
    stackables
        .into_iter()
        .map(|s| s.minimum_area())
        .min()
        .unwrap_or(u64::MAX)
}

/// Smallest volume of all `stackables`, `u64::MAX` if there are none
pub fn min_stackable_volume<'a>(stackables: impl IntoIterator<Item = &'a Stackable>) -> u64 {
    stackables
        .into_iter()
        .map(|s| s.volume())
        .min()
        .unwrap_or(u64::MAX)
}
