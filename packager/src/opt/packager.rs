use std::cmp::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Result, ensure};
use boxstack::entities::{
    Container, DefaultPackResultComparator, PackResult, PackResultComparator, PackedContainer,
    StackableItem,
};
use itertools::Itertools;
use log::{debug, info};

use crate::config::PackagerConfig;
use crate::interrupt::Interrupt;
use crate::opt::bisection::BinarySearchIterator;
use crate::opt::filter::filter_by_volume_and_weight;
use crate::opt::strategy::{Attempt, PackStrategy};

/// Seam between the container-selection logic and the strategy filling a single container.
/// Indices refer to the candidate containers which survived filtering.
pub trait Adapter {
    fn n_candidates(&self) -> usize;

    /// Packs the remaining items into candidate `index`.
    /// `Ok(None)` if the interrupt tripped before a result was available.
    fn attempt(&mut self, index: usize) -> Result<Option<PackResult>>;

    /// Accepts a result: its placed items are no longer remaining
    fn accept(&mut self, result: PackResult) -> PackedContainer;
}

/// [`Adapter`] trying every orientation of a candidate container with a [`PackStrategy`]
pub struct StrategyAdapter<'a, S: PackStrategy> {
    strategy: &'a S,
    comparator: &'a dyn PackResultComparator,
    items: &'a [StackableItem],
    containers: &'a [Container],
    /// Indices into `containers`
    candidates: Vec<usize>,
    remaining: Vec<usize>,
    interrupt: &'a Interrupt,
}

impl<'a, S: PackStrategy> StrategyAdapter<'a, S> {
    pub fn new(
        strategy: &'a S,
        comparator: &'a dyn PackResultComparator,
        items: &'a [StackableItem],
        containers: &'a [Container],
        candidates: Vec<usize>,
        interrupt: &'a Interrupt,
    ) -> Self {
        Self {
            strategy,
            comparator,
            items,
            containers,
            candidates,
            remaining: items.iter().map(|item| item.count).collect(),
            interrupt,
        }
    }

    /// Copies not yet accepted into a container, per item template
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }
}

impl<S: PackStrategy> Adapter for StrategyAdapter<'_, S> {
    fn n_candidates(&self) -> usize {
        self.candidates.len()
    }

    fn attempt(&mut self, index: usize) -> Result<Option<PackResult>> {
        let container_index = self.candidates[index];
        let container = &self.containers[container_index];

        let mut best: Option<PackResult> = None;
        for stack_value_index in 0..container.stack_values().len() {
            let attempt = Attempt {
                items: self.items,
                counts: &self.remaining,
                container_index,
                container,
                stack_value_index,
            };
            let Some(result) = self.strategy.pack(&attempt, self.interrupt)? else {
                return Ok(None);
            };
            if result.contains_last_stackable() {
                return Ok(Some(result));
            }
            best = match best {
                Some(b) if self.comparator.compare(&b, &result) != Ordering::Less => Some(b),
                _ => Some(result),
            };
        }
        Ok(best)
    }

    fn accept(&mut self, result: PackResult) -> PackedContainer {
        let placed = result.stack.placed_counts(self.items.len());
        for (remaining, placed) in self.remaining.iter_mut().zip(placed) {
            *remaining -= placed;
        }
        PackedContainer {
            container_index: result.container_index,
            container: self.containers[result.container_index].clone(),
            stack_value_index: result.stack_value_index,
            stack: result.stack,
        }
    }
}

/// Selects containers for a set of items, filling each with strategy `S`.
///
/// The candidate containers are ranked from most to least desirable.
/// All methods return `Ok(None)` both when the items do not fit and when the interrupt tripped
/// first; callers tell the two apart by checking the interrupt themselves.
pub struct Packager<S: PackStrategy> {
    containers: Vec<Container>,
    strategy: S,
    comparator: Arc<dyn PackResultComparator>,
    config: PackagerConfig,
}

impl<S: PackStrategy> Packager<S> {
    pub fn new(containers: Vec<Container>, strategy: S, config: PackagerConfig) -> Result<Self> {
        ensure!(!containers.is_empty(), "at least one container is required");
        config.validate()?;
        Ok(Self {
            containers,
            strategy,
            comparator: Arc::new(DefaultPackResultComparator),
            config,
        })
    }

    pub fn with_comparator(self, comparator: Arc<dyn PackResultComparator>) -> Self {
        Self { comparator, ..self }
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn config(&self) -> &PackagerConfig {
        &self.config
    }

    /// The smallest-index container which holds all items, subject to the configured time limit
    pub fn pack(&self, items: &[StackableItem]) -> Result<Option<PackedContainer>> {
        self.pack_in(items, &self.containers, &self.default_interrupt())
    }

    pub fn pack_with_deadline(
        &self,
        items: &[StackableItem],
        deadline: Instant,
    ) -> Result<Option<PackedContainer>> {
        self.pack_in(items, &self.containers, &Interrupt::with_deadline(deadline))
    }

    /// Aborts once `deadline` passes or `interrupt` returns true
    pub fn pack_with_interrupt(
        &self,
        items: &[StackableItem],
        deadline: Instant,
        interrupt: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Result<Option<PackedContainer>> {
        let interrupt = Interrupt::with_deadline(deadline).or(interrupt);
        self.pack_in(items, &self.containers, &interrupt)
    }

    /// The smallest-index container of `containers` which holds all items.
    ///
    /// With at most two candidates, they are tried in order. With more, a binary search is
    /// performed, repeated over the unchecked candidates below the best fit until none remain.
    pub fn pack_in(
        &self,
        items: &[StackableItem],
        containers: &[Container],
        interrupt: &Interrupt,
    ) -> Result<Option<PackedContainer>> {
        ensure!(!containers.is_empty(), "at least one container is required");
        let counts = items.iter().map(|item| item.count).collect_vec();
        let candidates = filter_by_volume_and_weight(items, &counts, containers, 1);
        if candidates.is_empty() {
            info!("[PACK] no container can hold all items");
            return Ok(None);
        }

        let mut adapter = StrategyAdapter::new(
            &self.strategy,
            self.comparator.as_ref(),
            items,
            containers,
            candidates,
            interrupt,
        );

        let packed = match adapter.n_candidates() <= 2 {
            true => linear_search(&mut adapter, interrupt)?,
            false => binary_search(&mut adapter, interrupt)?,
        };

        match &packed {
            Some(pc) => info!(
                "[PACK] all {} items fit in container {} (density: {:.3}%)",
                pc.stack.len(),
                pc.container_index,
                pc.density() * 100.0
            ),
            None => info!("[PACK] no single container holds all items"),
        }
        Ok(packed)
    }

    /// At most `limit` containers which together hold all items, subject to the configured time limit
    pub fn pack_list(
        &self,
        items: &[StackableItem],
        limit: usize,
    ) -> Result<Option<Vec<PackedContainer>>> {
        self.pack_list_in(items, &self.containers, limit, &self.default_interrupt())
    }

    pub fn pack_list_with_deadline(
        &self,
        items: &[StackableItem],
        limit: usize,
        deadline: Instant,
    ) -> Result<Option<Vec<PackedContainer>>> {
        let interrupt = Interrupt::with_deadline(deadline);
        self.pack_list_in(items, &self.containers, limit, &interrupt)
    }

    /// Aborts once `deadline` passes or `interrupt` returns true
    pub fn pack_list_with_interrupt(
        &self,
        items: &[StackableItem],
        limit: usize,
        deadline: Instant,
        interrupt: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Result<Option<Vec<PackedContainer>>> {
        let interrupt = Interrupt::with_deadline(deadline).or(interrupt);
        self.pack_list_in(items, &self.containers, limit, &interrupt)
    }

    /// Greedily fills containers one at a time: every round all candidates are tried on the
    /// remaining items and the best result is kept, a complete fit ends the round early.
    /// Fails (`Ok(None)`) if more than `limit` containers would be needed.
    pub fn pack_list_in(
        &self,
        items: &[StackableItem],
        containers: &[Container],
        limit: usize,
        interrupt: &Interrupt,
    ) -> Result<Option<Vec<PackedContainer>>> {
        ensure!(!containers.is_empty(), "at least one container is required");
        ensure!(limit >= 1, "the container limit must be at least 1");
        if items.iter().all(|item| item.count == 0) {
            return Ok(Some(vec![]));
        }

        let counts = items.iter().map(|item| item.count).collect_vec();
        let candidates = filter_by_volume_and_weight(items, &counts, containers, limit);
        if candidates.is_empty() {
            info!("[PACK] no {limit} containers can hold all items");
            return Ok(None);
        }

        let mut adapter = StrategyAdapter::new(
            &self.strategy,
            self.comparator.as_ref(),
            items,
            containers,
            candidates,
            interrupt,
        );

        let mut packed = vec![];
        loop {
            let mut best: Option<PackResult> = None;
            for i in 0..adapter.n_candidates() {
                if interrupt.is_interrupted() {
                    return Ok(None);
                }
                let Some(result) = adapter.attempt(i)? else {
                    return Ok(None);
                };
                if result.is_empty() {
                    continue;
                }
                if result.contains_last_stackable() {
                    best = Some(result);
                    break;
                }
                if best
                    .as_ref()
                    .is_none_or(|b| self.comparator.compare(b, &result) == Ordering::Less)
                {
                    best = Some(result);
                }
            }

            let Some(best) = best else {
                info!(
                    "[PACK] {} items fit in none of the containers",
                    adapter.remaining().iter().sum::<usize>()
                );
                return Ok(None);
            };
            let complete = best.contains_last_stackable();
            let n_remaining = best.remaining_count();
            let pc = adapter.accept(best);
            debug!(
                "[PACK] container {} holds {} items, {} remaining",
                pc.container_index,
                pc.stack.len(),
                n_remaining
            );
            packed.push(pc);

            if complete {
                info!("[PACK] all items fit in {} containers", packed.len());
                return Ok(Some(packed));
            }
            if packed.len() >= limit {
                info!("[PACK] container limit of {limit} reached");
                return Ok(None);
            }
        }
    }

    fn default_interrupt(&self) -> Interrupt {
        match self.config.time_limit_ms {
            Some(ms) => Interrupt::with_time_limit(Duration::from_millis(ms)),
            None => Interrupt::none(),
        }
    }
}

/// Tries every candidate in order, the first complete fit wins
pub fn linear_search(
    adapter: &mut impl Adapter,
    interrupt: &Interrupt,
) -> Result<Option<PackedContainer>> {
    for i in 0..adapter.n_candidates() {
        if interrupt.is_interrupted() {
            break;
        }
        let Some(result) = adapter.attempt(i)? else {
            return Ok(None);
        };
        if result.contains_last_stackable() {
            return Ok(Some(adapter.accept(result)));
        }
    }
    Ok(None)
}

/// Finds the same candidate as [`linear_search`] with fewer attempts when fits are
/// (mostly) monotone in the candidate index.
///
/// A complete fit continues the search below the tried index, a failure above it.
/// After each pass, the candidates at and above the best fit are dropped and checked
/// ones are removed, and the search is repeated over those left.
pub fn binary_search(
    adapter: &mut impl Adapter,
    interrupt: &Interrupt,
) -> Result<Option<PackedContainer>> {
    let n = adapter.n_candidates();
    let mut results: Vec<Option<PackResult>> = vec![None; n];
    let mut checked = vec![false; n];
    let mut indices = (0..n).collect_vec();
    let mut iterator = BinarySearchIterator::default();

    'search: while !indices.is_empty() {
        iterator.reset(indices.len() - 1, 0);
        while iterator.has_next() {
            let index = indices[iterator.next_index()];
            let Some(result) = adapter.attempt(index)? else {
                break 'search;
            };
            checked[index] = true;
            debug!(
                "[PACK] tried candidate {index}: {}",
                match result.contains_last_stackable() {
                    true => "fits",
                    false => "does not fit",
                }
            );
            if result.contains_last_stackable() {
                results[index] = Some(result);
                iterator.lower();
            } else {
                iterator.higher();
            }
            if interrupt.is_interrupted() {
                break 'search;
            }
        }

        let mut i = 0;
        while i < indices.len() {
            let index = indices[i];
            if results[index].is_some() {
                // a better fit than any of the remaining ones is already known
                indices.truncate(i);
                break;
            }
            if checked[index] {
                indices.remove(i);
            } else {
                i += 1;
            }
        }
    }

    Ok(results
        .into_iter()
        .flatten()
        .next()
        .map(|result| adapter.accept(result)))
}
