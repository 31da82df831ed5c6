#[cfg(test)]
mod tests {
    use boxstack::permutation::{
        PermutationSlice, count_permutations, kth_permutation, next_permutation, skip_prefix,
        split_permutations, without_items,
    };
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    /// Multinomial coefficient computed independently with 128-bit integers
    fn reference_count(frequencies: &[usize]) -> u128 {
        let fact = |n: usize| (1..=n as u128).product::<u128>();
        let n: usize = frequencies.iter().sum();
        fact(n) / frequencies.iter().map(|&f| fact(f)).product::<u128>()
    }

    /// All distinct permutations in lexicographic order, by brute force
    fn reference_permutations(frequencies: &[usize]) -> Vec<Vec<usize>> {
        let elements = frequencies
            .iter()
            .enumerate()
            .flat_map(|(i, &f)| std::iter::repeat_n(i, f))
            .collect_vec();
        elements
            .iter()
            .copied()
            .permutations(elements.len())
            .unique()
            .sorted()
            .collect_vec()
    }

    #[test_case(&[]; "empty")]
    #[test_case(&[1]; "single")]
    #[test_case(&[1, 1, 1, 1]; "distinct")]
    #[test_case(&[3, 4]; "two templates")]
    #[test_case(&[1, 2, 3]; "ascending")]
    #[test_case(&[2, 0, 2, 1]; "with zero")]
    #[test_case(&[1, 1, 5, 1, 2, 2]; "mixed")]
    #[test_case(&[12]; "all equal")]
    #[test_case(&[1; 12]; "twelve distinct")]
    #[test_case(&[2, 2, 2, 2, 2, 2]; "pairs")]
    fn count_matches_multinomial(frequencies: &[usize]) {
        let count = count_permutations(frequencies).unwrap();
        assert_eq!(count as u128, reference_count(frequencies));
    }

    #[test]
    fn count_matches_multinomial_random() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..500 {
            let n_templates = rng.random_range(1..=6);
            let mut frequencies = vec![0; n_templates];
            for _ in 0..rng.random_range(0..=12) {
                frequencies[rng.random_range(0..n_templates)] += 1;
            }
            let count = count_permutations(&frequencies).unwrap();
            assert_eq!(count as u128, reference_count(&frequencies), "{frequencies:?}");
        }
    }

    #[test]
    fn count_overflow_is_signaled() {
        assert_eq!(count_permutations(&[1; 20]), Some(2_432_902_008_176_640_000));
        assert_eq!(count_permutations(&[1; 21]), None);
        assert!(split_permutations(&[1; 21], 4).is_err());
        // 21! overflows, but the first repeated template is cancelled before it is built
        assert_eq!(count_permutations(&[15, 6]), Some(54_264));
    }

    #[test_case(&[1, 1, 1]; "three distinct")]
    #[test_case(&[2, 1]; "one repeat")]
    #[test_case(&[1, 2, 1, 1]; "repeat in the middle")]
    #[test_case(&[0, 2, 0, 2]; "zero frequencies")]
    #[test_case(&[2, 3, 3]; "eight elements")]
    #[test_case(&[1; 8]; "eight distinct")]
    fn kth_permutation_enumerates_in_order(frequencies: &[usize]) {
        let total = count_permutations(frequencies).unwrap();
        let by_rank = (1..=total)
            .map(|rank| kth_permutation(frequencies, total, rank))
            .collect_vec();

        assert!(by_rank.iter().tuple_windows().all(|(a, b)| a < b));
        assert_eq!(by_rank, reference_permutations(frequencies));
    }

    #[test]
    fn next_permutation_follows_rank_order() {
        let frequencies = [2, 1, 2];
        let total = count_permutations(&frequencies).unwrap();
        let mut perm = kth_permutation(&frequencies, total, 1);
        for rank in 2..=total {
            assert!(next_permutation(&mut perm));
            assert_eq!(perm, kth_permutation(&frequencies, total, rank));
        }
        assert!(!next_permutation(&mut perm));
        assert_eq!(perm, kth_permutation(&frequencies, total, total));
    }

    #[test]
    fn skip_prefix_jumps_to_next_prefix() {
        let mut perm = vec![0, 1, 2, 3];
        assert!(skip_prefix(&mut perm, 1));
        assert_eq!(perm, vec![0, 2, 1, 3]);
        assert!(skip_prefix(&mut perm, 0));
        assert_eq!(perm, vec![1, 0, 2, 3]);

        let mut last = vec![3, 2, 1, 0];
        assert!(!skip_prefix(&mut last, 0));
    }

    #[test_case(&[1, 1, 1, 1], 1)]
    #[test_case(&[1, 1, 1, 1], 3)]
    #[test_case(&[1, 1, 1, 1], 24)]
    #[test_case(&[2, 1, 2], 4)]
    #[test_case(&[2, 0, 1], 5; "more slices than permutations")]
    #[test_case(&[1, 2, 3], 7)]
    #[test_case(&[3, 3, 2], 16)]
    fn slices_cover_all_permutations_once(frequencies: &[usize], n_slices: usize) {
        let slices = split_permutations(frequencies, n_slices).unwrap();
        assert_eq!(slices.len(), n_slices);

        let total = count_permutations(frequencies).unwrap();
        assert_eq!(slices.first().unwrap().start_rank, 1);
        assert_eq!(slices.last().unwrap().end_rank, total + 1);
        assert!(
            slices
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.end_rank == b.start_rank)
        );
        assert_eq!(slices.iter().map(|s| s.len()).sum::<u64>(), total);

        let enumerated = slices
            .iter()
            .flat_map(|s| s.permutations().collect_vec())
            .collect_vec();
        assert_eq!(enumerated, reference_permutations(frequencies));

        // every slice holds exactly the ranks it claims
        for slice in &slices {
            assert_eq!(slice.permutations().count() as u64, slice.len());
        }
    }

    #[test]
    fn single_slice_spans_everything() {
        let slices = split_permutations(&[2, 2], 1).unwrap();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].start, vec![0, 0, 1, 1]);
        assert_eq!(slices[0].ceiling, None);
        assert_eq!(slices[0].len(), 6);
    }

    #[test]
    fn degenerate_inputs_yield_empty_slice() {
        assert_eq!(
            split_permutations(&[1, 2], 0).unwrap(),
            vec![PermutationSlice::empty()]
        );
        assert_eq!(
            split_permutations(&[], 4).unwrap(),
            vec![PermutationSlice::empty()]
        );
        assert_eq!(split_permutations(&[0, 0], 4).unwrap()[0].permutations().count(), 0);
    }

    #[test]
    fn removing_items_recomputes_slices() {
        let frequencies = [2, 1, 3];
        let reduced = without_items(&frequencies, &[2, 2, 1]);
        assert_eq!(reduced, vec![2, 0, 1]);

        let slices = split_permutations(&reduced, 2).unwrap();
        let enumerated = slices
            .iter()
            .flat_map(|s| s.permutations().collect_vec())
            .collect_vec();
        assert_eq!(enumerated, vec![vec![0, 0, 2], vec![0, 2, 0], vec![2, 0, 0]]);
    }
}
