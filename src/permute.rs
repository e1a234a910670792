//! Exhaustive permutation enumeration.
//!
//! Backs the standalone `permutations` tool; independent of the generator.
//!
//! # Algorithm
//! Recursive backtracking: for position `k`, swap each element `i >= k`
//! into place, recurse on `k + 1`, swap back. Visits all `n!` orderings.

use crate::error::{Error, Result};

/// Calls `visit` once for every permutation of `1..=n`.
///
/// `n = 0` visits the empty permutation once.
pub fn for_each_permutation<F: FnMut(&[usize])>(n: usize, mut visit: F) -> Result<()> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(n)
        .map_err(|_| Error::BufferAllocation {
            what: "a permutation",
            len: n,
        })?;
    items.extend(1..=n);
    permute(&mut items, 0, &mut visit);
    Ok(())
}

fn permute<F: FnMut(&[usize])>(items: &mut [usize], k: usize, visit: &mut F) {
    if k + 1 >= items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect(n: usize) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        for_each_permutation(n, |p| out.push(p.to_vec())).unwrap();
        out
    }

    #[test]
    fn test_three() {
        assert_eq!(
            collect(3),
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 2, 1],
                vec![3, 1, 2],
            ]
        );
    }

    #[test]
    fn test_count_and_distinct() {
        let perms = collect(5);
        assert_eq!(perms.len(), 120);
        let unique: HashSet<_> = perms.iter().collect();
        assert_eq!(unique.len(), 120);
        assert!(perms.iter().all(|p| {
            let mut s = p.clone();
            s.sort_unstable();
            s == vec![1, 2, 3, 4, 5]
        }));
    }

    #[test]
    fn test_unallocatable_size() {
        let mut visited = false;
        let err = for_each_permutation(usize::MAX, |_| visited = true).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferAllocation {
                len: usize::MAX,
                ..
            }
        ));
        assert!(!visited);
    }

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(collect(1), vec![vec![1]]);
        assert_eq!(collect(0), vec![Vec::<usize>::new()]);
    }
}
