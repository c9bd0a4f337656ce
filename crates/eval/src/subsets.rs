// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Subsets and multisets iteration.
use std::ops::ControlFlow;

/// Returns the binomial coefficient for n choose k, saturates at `usize::MAX`.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // C(n, i) * (n - i) = C(n, i + 1) * (i + 1) so every division is exact.
    let k = k.min(n - k);
    (0..k)
        .try_fold(1usize, |acc, i| acc.checked_mul(n - i).map(|v| v / (i + 1)))
        .unwrap_or(usize::MAX)
}

/// Returns the number of multisets of size k drawn from 0..n.
pub fn multisets_count(n: usize, k: usize) -> usize {
    match (n, k) {
        (_, 0) => 1,
        (0, _) => 0,
        _ => nck(n + k - 1, k),
    }
}

/// Calls the given closure for each k-subset of 0..n in colexicographic order,
/// stops when the closure breaks.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    if k > n {
        return;
    }

    // Algorithm L from TAOCP 4a, the two trailing entries are sentinels.
    let mut c = (0..k).chain([n, 0]).collect::<Vec<_>>();

    loop {
        if f(&c[..k]).is_break() {
            break;
        }

        let mut j = 0;
        while c[j] + 1 == c[j + 1] {
            c[j] = j;
            j += 1;
        }

        if j >= k {
            break;
        }

        c[j] += 1;
    }
}

/// Calls the given closure for each multiset of size k drawn from 0..n, stops
/// when the closure breaks.
///
/// Each multiset is passed as a non decreasing sequence, a k-subset
/// `c0 < c1 < ..` of `0..n+k-1` maps to the multiset `c0, c1 - 1, ..`.
pub fn for_each_multiset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    if k == 0 {
        let _ = f(&[]);
        return;
    } else if n == 0 {
        return;
    }

    let mut m = vec![0; k];
    for_each_ksubset(n + k - 1, k, |s| {
        for (i, (v, &c)) in m.iter_mut().zip(s).enumerate() {
            *v = c - i;
        }

        f(&m)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 5, 10, 10, 5, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        // Too large to fit.
        assert_eq!(nck(1_000, 500), usize::MAX);
    }

    #[test]
    fn test_multisets_count() {
        assert_eq!(multisets_count(13, 0), 1);
        assert_eq!(multisets_count(0, 3), 0);
        assert_eq!(multisets_count(13, 1), 13);
        assert_eq!(multisets_count(13, 2), 91);
        assert_eq!(multisets_count(13, 6), 18_564);
        assert_eq!(multisets_count(13, 7), 50_388);
    }

    #[test]
    fn ksubsets() {
        let mut subsets = Vec::new();
        for_each_ksubset(4, 2, |s| {
            subsets.push(s.to_vec());
            ControlFlow::Continue(())
        });
        assert_eq!(
            subsets,
            vec![vec![0, 1], vec![0, 2], vec![1, 2], vec![0, 3], vec![1, 3], vec![2, 3]]
        );

        for (n, k) in [(7, 5), (10, 3), (13, 1), (6, 6)] {
            let mut seen = HashSet::default();
            for_each_ksubset(n, k, |s| {
                assert_eq!(s.len(), k);
                assert!(s.windows(2).all(|w| w[0] < w[1]));
                assert!(s.iter().all(|&i| i < n));
                seen.insert(s.to_vec());
                ControlFlow::Continue(())
            });
            assert_eq!(seen.len(), nck(n, k), "n={n} k={k}");
        }
    }

    #[test]
    fn ksubsets_edge_cases() {
        let mut count = 0;
        for_each_ksubset(3, 0, |s| {
            assert!(s.is_empty());
            count += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(count, 1);

        count = 0;
        for_each_ksubset(2, 3, |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn ksubsets_break() {
        let mut count = 0;
        for_each_ksubset(10, 3, |s| {
            count += 1;
            if s == [0, 1, 3] {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(count, 3);
    }

    #[test]
    fn multisets() {
        let mut seen = HashSet::default();
        for_each_multiset(13, 2, |m| {
            assert!(m[0] <= m[1] && m[1] < 13);
            seen.insert(m.to_vec());
            ControlFlow::Continue(())
        });
        // 13 pairs with repetition plus 78 distinct pairs.
        assert_eq!(seen.len(), 91);
        assert!(seen.contains(&vec![12, 12]));
        assert!(seen.contains(&vec![0, 0]));

        let mut count = 0;
        for_each_multiset(13, 5, |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(count, multisets_count(13, 5));

        count = 0;
        for_each_multiset(13, 0, |m| {
            assert!(m.is_empty());
            count += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(count, 1);

        count = 0;
        for_each_multiset(13, 4, |_| {
            count += 1;
            ControlFlow::Break(())
        });
        assert_eq!(count, 1);
    }
}
