use anyhow::{Result, anyhow};
use log::debug;

use crate::permutation::{count_permutations, kth_permutation, next_permutation};

/// Contiguous range of permutation ranks `[start_rank, end_rank)` assigned to one search worker.
///
/// The worker starts at `start` and steps lexicographically until it reaches `ceiling`,
/// the first permutation of the next slice. The last slice has no ceiling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationSlice {
    pub start_rank: u64,
    pub end_rank: u64,
    pub start: Vec<usize>,
    pub ceiling: Option<Vec<usize>>,
}

impl PermutationSlice {
    /// Slice containing no permutation at all
    pub fn empty() -> Self {
        PermutationSlice {
            start_rank: 1,
            end_rank: 1,
            start: vec![],
            ceiling: None,
        }
    }

    /// Number of permutations in the slice
    pub fn len(&self) -> u64 {
        self.end_rank - self.start_rank
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `perm` lies before the slice's ceiling
    pub fn below_ceiling(&self, perm: &[usize]) -> bool {
        self.ceiling.as_deref().is_none_or(|c| perm < c)
    }

    /// Enumerates all permutations of the slice in lexicographic order
    pub fn permutations(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        let mut next = (!self.is_empty()).then(|| self.start.clone());
        std::iter::from_fn(move || {
            let current = next.take()?;
            let mut successor = current.clone();
            if next_permutation(&mut successor) && self.below_ceiling(&successor) {
                next = Some(successor);
            }
            Some(current)
        })
    }
}

/// Splits all permutations of the multiset described by `frequencies` into `n_slices` contiguous
/// slices of (nearly) equal size. Slice `i` starts at rank `floor(total * i / n_slices) + 1`.
///
/// Zero slices or an empty multiset yield a single empty slice.
/// Fails if the number of permutations cannot be represented in a `u64`.
pub fn split_permutations(frequencies: &[usize], n_slices: usize) -> Result<Vec<PermutationSlice>> {
    let n_elements: usize = frequencies.iter().sum();
    if n_slices == 0 || n_elements == 0 {
        return Ok(vec![PermutationSlice::empty()]);
    }

    let total = count_permutations(frequencies)
        .and_then(|t| t.checked_add(1).map(|_| t))
        .ok_or_else(|| {
            anyhow!("number of permutations of {frequencies:?} overflows a 64-bit integer")
        })?;

    let start_ranks = (0..n_slices)
        .map(|i| (total as u128 * i as u128 / n_slices as u128) as u64 + 1)
        .collect::<Vec<_>>();

    let starts = start_ranks
        .iter()
        .map(|&rank| kth_permutation(frequencies, total, rank))
        .collect::<Vec<_>>();

    let slices = (0..n_slices)
        .map(|i| PermutationSlice {
            start_rank: start_ranks[i],
            end_rank: start_ranks.get(i + 1).copied().unwrap_or(total + 1),
            start: starts[i].clone(),
            ceiling: starts.get(i + 1).cloned(),
        })
        .collect::<Vec<_>>();

    debug!(
        "split {total} permutations of {n_elements} elements into {n_slices} slices: {:?}",
        slices.iter().map(|s| s.len()).collect::<Vec<_>>()
    );

    Ok(slices)
}

/// Frequencies with one occurrence removed for every template index in `removed`.
/// Removing more occurrences than present saturates at zero.
pub fn without_items(frequencies: &[usize], removed: &[usize]) -> Vec<usize> {
    let mut freqs = frequencies.to_vec();
    for &i in removed {
        freqs[i] = freqs[i].saturating_sub(1);
    }
    freqs
}
