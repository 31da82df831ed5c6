/// The `rank`-th (1-based) permutation, in lexicographic order, of the multiset where template `i`
/// occurs `frequencies[i]` times. `n_perms` must be the total number of such permutations.
///
/// Templates with a zero frequency are skipped. Runs in `O(N * frequencies.len())`.
pub fn kth_permutation(frequencies: &[usize], n_perms: u64, rank: u64) -> Vec<usize> {
    debug_assert!(rank >= 1 && rank <= n_perms.max(1));
    let n_elements: usize = frequencies.iter().sum();
    let mut freqs = frequencies.to_vec();
    let mut result = Vec::with_capacity(n_elements);

    // u128 to keep `n_perms * frequency` from overflowing
    let mut n_perms = n_perms as u128;
    let mut rank = rank as u128;

    for i in 0..n_elements {
        let remaining = (n_elements - i) as u128;
        for (k, freq) in freqs.iter_mut().enumerate() {
            if *freq == 0 {
                continue;
            }
            // number of permutations of the remainder which start with template k
            let suffix_count = n_perms * *freq as u128 / remaining;
            if rank <= suffix_count {
                result.push(k);
                n_perms = suffix_count;
                *freq -= 1;
                break;
            }
            rank -= suffix_count;
        }
    }
    debug_assert_eq!(result.len(), n_elements);
    result
}

/// Rearranges `perm` into the lexicographically next permutation of its multiset.
/// Returns `false` (and leaves `perm` untouched) if it already is the last one.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    let Some(i) = (1..perm.len()).rev().find(|&i| perm[i - 1] < perm[i]) else {
        return false;
    };
    let pivot = i - 1;
    // perm[i] > perm[pivot], so the search always succeeds
    let j = (i..perm.len())
        .rev()
        .find(|&j| perm[j] > perm[pivot])
        .unwrap_or(i);
    perm.swap(pivot, j);
    perm[i..].reverse();
    true
}

/// Advances `perm` to the lexicographically next permutation which differs from it
/// in the first `depth + 1` positions, skipping every permutation that shares that prefix.
/// Returns `false` if no such permutation exists.
pub fn skip_prefix(perm: &mut [usize], depth: usize) -> bool {
    if depth + 1 < perm.len() {
        // the largest permutation with the current prefix has a descending suffix
        perm[depth + 1..].sort_unstable_by(|a, b| b.cmp(a));
    }
    next_permutation(perm)
}
