/// Number of distinct permutations of a multiset where template `i` occurs `frequencies[i]` times:
/// `N! / Π(f_i!)` with `N = Σ f_i`.
///
/// The factorial of the first repeated template is cancelled against the ascending product
/// so that `N!` is never built in full. Returns `None` if any intermediate product overflows.
pub fn count_permutations(frequencies: &[usize]) -> Option<u64> {
    let count: usize = frequencies.iter().sum();
    match first_duplicate(frequencies) {
        None => factorial(count),
        Some(first) => {
            // For [3, 4] this is
            //
            //   1 * 2 * 3 * 4 * 5 * 6 * 7          4 * 5 * 6 * 7
            //   -------------------------   ==   -----------------
            //   (1 * 2 * 3)(1 * 2 * 3 * 4)        (1 * 2 * 3 * 4)
            let mut n_perms: u64 = 1;
            for i in frequencies[first]..count {
                n_perms = n_perms.checked_mul(i as u64 + 1)?;
            }
            // every intermediate quotient is integral, the remainder of the product is a multinomial
            for &f in &frequencies[first + 1..] {
                for k in 2..=f {
                    n_perms /= k as u64;
                }
            }
            Some(n_perms)
        }
    }
}

fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

fn first_duplicate(frequencies: &[usize]) -> Option<usize> {
    frequencies.iter().position(|&f| f > 1)
}
