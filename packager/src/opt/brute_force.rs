use std::cmp::Ordering as CmpOrdering;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use boxstack::entities::{
    ContainerStackValue, PackResult, PackResultComparator, Placement, Stack,
};
use boxstack::geometry::ExtremePoints;
use boxstack::permutation::{
    PermutationSlice, count_permutations, next_permutation, skip_prefix, split_permutations,
    without_items,
};
use boxstack::util::assertions;
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;
use thousands::Separable;

use crate::config::PackagerConfig;
use crate::interrupt::{Checkpoint, Interrupt};
use crate::opt::strategy::{Attempt, PackStrategy};

/// Exhaustive packer: tries every distinct ordering of the item copies and, for every ordering,
/// every combination of item orientations, placing each item at the first extreme point where it fits.
///
/// The permutation space is split into contiguous slices which are searched in parallel,
/// one worker per slice. Workers share nothing but the read-only input, the interrupt
/// and a flag raised by the first worker to place all items.
pub struct BruteForcePackager {
    n_workers: usize,
    checkpoints_per_deadline_check: usize,
    comparator: Arc<dyn PackResultComparator>,
}

impl BruteForcePackager {
    pub fn new(config: &PackagerConfig, comparator: Arc<dyn PackResultComparator>) -> Self {
        Self {
            n_workers: config.n_workers,
            checkpoints_per_deadline_check: config.checkpoints_per_deadline_check,
            comparator,
        }
    }
}

/// Outcome of searching every permutation slice of one attempt
#[derive(Debug)]
pub struct Search {
    /// The complete result if a worker found one, otherwise the best partial result
    pub result: PackResult,
    /// Search steps taken, summed over all workers
    pub n_steps: u64,
}

impl BruteForcePackager {
    /// Searches all permutation slices of `attempt` in parallel.
    ///
    /// The first worker to place all items raises `done`, which stops all other workers.
    /// A flag raised beforehand stops every worker at its first step.
    pub fn search(
        &self,
        attempt: &Attempt,
        interrupt: &Interrupt,
        done: &AtomicBool,
    ) -> Result<Search> {
        let csv = attempt.stack_value();

        // templates which cannot be loaded on their own are excluded from the search
        let unloadable = attempt
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| !csv.can_load(&item.stackable))
            .flat_map(|(i, _)| std::iter::repeat_n(i, attempt.counts[i]))
            .collect_vec();
        let frequencies = without_items(attempt.counts, &unloadable);
        let n_copies: usize = frequencies.iter().sum();

        // fails if the number of orderings does not fit in a u64
        let slices = split_permutations(&frequencies, self.n_workers)?;
        if let Some(total) = count_permutations(&frequencies) {
            debug!(
                "[BF] container {} (orientation {}): searching {} permutations of {} items in {} slices",
                attempt.container_index,
                attempt.stack_value_index,
                total.separate_with_commas(),
                n_copies,
                slices.len()
            );
        }

        let outcomes = slices
            .par_iter()
            .map(|slice| {
                Worker::new(attempt, csv, slice, interrupt, done, self.checkpoints_per_deadline_check)
                    .run()
            })
            .collect::<Vec<_>>();

        let n_steps: u64 = outcomes.iter().map(|o| o.n_steps).sum();
        let result = match outcomes.iter().find(|o| o.state == WorkerState::Done) {
            Some(outcome) => attempt.result(outcome.best.clone()),
            None => outcomes
                .into_iter()
                .map(|o| attempt.result(o.best))
                .reduce(|best, r| match self.comparator.compare(&best, &r) {
                    CmpOrdering::Less => r,
                    _ => best,
                })
                .unwrap_or_else(|| attempt.result(Stack::new())),
        };

        debug!(
            "[BF] container {} (orientation {}): placed {}/{} items in {} steps",
            attempt.container_index,
            attempt.stack_value_index,
            result.placed_count(),
            attempt.n_copies(),
            n_steps.separate_with_commas()
        );

        Ok(Search { result, n_steps })
    }
}

impl PackStrategy for BruteForcePackager {
    fn pack(&self, attempt: &Attempt, interrupt: &Interrupt) -> Result<Option<PackResult>> {
        let done = AtomicBool::new(false);
        let search = self.search(attempt, interrupt, &done)?;
        Ok(Some(search.result))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkerState {
    /// Searching the current permutation
    Advancing,
    /// All permutations of the slice have been searched
    Exhausted,
    /// The interrupt tripped or a sibling finished
    Interrupted,
    /// All items were placed
    Done,
}

struct WorkerOutcome {
    state: WorkerState,
    best: Stack,
    n_steps: u64,
}

/// Searches one slice of the permutation space, depth-first over the item orientations
struct Worker<'a> {
    attempt: &'a Attempt<'a>,
    csv: &'a ContainerStackValue,
    slice: &'a PermutationSlice,
    checkpoint: Checkpoint<'a>,
    done: &'a AtomicBool,
    eps: ExtremePoints,
    stack: Stack,
    best: Stack,
    /// Number of items placed in the deepest branch of the current permutation
    max_depth: usize,
    state: WorkerState,
    n_steps: u64,
}

impl<'a> Worker<'a> {
    fn new(
        attempt: &'a Attempt<'a>,
        csv: &'a ContainerStackValue,
        slice: &'a PermutationSlice,
        interrupt: &'a Interrupt,
        done: &'a AtomicBool,
        checkpoints_per_deadline_check: usize,
    ) -> Self {
        Worker {
            attempt,
            csv,
            slice,
            checkpoint: Checkpoint::new(interrupt, checkpoints_per_deadline_check),
            done,
            eps: ExtremePoints::new(csv.load_dx, csv.load_dy, csv.load_dz),
            stack: Stack::new(),
            best: Stack::new(),
            max_depth: 0,
            state: WorkerState::Advancing,
            n_steps: 0,
        }
    }

    fn run(mut self) -> WorkerOutcome {
        let mut perm = self.slice.start.clone();
        if self.slice.is_empty() {
            self.state = WorkerState::Exhausted;
        }

        while self.state == WorkerState::Advancing {
            if !self.slice.below_ceiling(&perm) {
                self.state = WorkerState::Exhausted;
                break;
            }
            self.max_depth = 0;
            self.stack = Stack::new();
            self.eps.reset(self.csv.load_dx, self.csv.load_dy, self.csv.load_dz);

            self.descend(&perm, 0);
            if self.state != WorkerState::Advancing {
                break;
            }

            // every permutation sharing the prefix up to the item which could not be placed fails there too
            let advanced = match self.max_depth < perm.len() {
                true => skip_prefix(&mut perm, self.max_depth),
                false => next_permutation(&mut perm),
            };
            if !advanced {
                self.state = WorkerState::Exhausted;
            }
        }

        WorkerOutcome {
            state: self.state,
            best: self.best,
            n_steps: self.n_steps,
        }
    }

    /// Places `perm[depth]` in each of its orientations and recurses
    fn descend(&mut self, perm: &[usize], depth: usize) {
        self.n_steps += 1;
        if self.checkpoint.check() || self.done.load(Ordering::Relaxed) {
            self.state = WorkerState::Interrupted;
            return;
        }

        self.max_depth = self.max_depth.max(depth);
        if (self.stack.len(), self.stack.volume()) > (self.best.len(), self.best.volume()) {
            self.best = self.stack.clone();
        }
        if depth == perm.len() {
            debug_assert!(assertions::stack_is_feasible(&self.stack, self.csv));
            self.state = WorkerState::Done;
            self.done.store(true, Ordering::Relaxed);
            return;
        }

        let items = self.attempt.items;
        let csv = self.csv;
        let item_index = perm[depth];
        let stackable = &items[item_index].stackable;
        let constraint = csv.constraint.as_deref();

        if stackable.weight > self.stack.free_weight(csv)
            || !constraint.is_none_or(|c| c.accepts(&self.stack, stackable))
        {
            return;
        }

        for value in stackable.stack_values() {
            let point_index = self.eps.values().iter().position(|p| {
                p.fits_3d(value)
                    && constraint.is_none_or(|c| {
                        c.supports(&self.stack, stackable, value, p.min_x, p.min_y, p.min_z)
                    })
            });
            let Some(point_index) = point_index else {
                continue;
            };

            let point = *self.eps.value(point_index);
            let placement = Placement::new(
                item_index,
                stackable.clone(),
                *value,
                point.min_x,
                point.min_y,
                point.min_z,
            );
            let snapshot = self.eps.save();
            self.eps.add(point_index, &placement);
            self.stack.add(placement);

            self.descend(perm, depth + 1);
            if self.state != WorkerState::Advancing {
                return;
            }

            self.stack.pop();
            self.eps.restore(&snapshot);
        }
    }
}
