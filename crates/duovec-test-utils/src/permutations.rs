// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Index permutation helpers for exhaustive ordering tests.

/// Returns every permutation of the indices `0..len`.
///
/// Uses iterative Heap's algorithm, producing `len!` permutations.
/// `len == 0` yields a single empty permutation.
pub fn index_permutations(len: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..len).collect();
    let mut result = vec![current.clone()];

    let mut counters = vec![0usize; len];
    let mut i = 0;

    while i < len {
        if counters[i] < i {
            if i % 2 == 0 {
                current.swap(0, i);
            } else {
                current.swap(counters[i], i);
            }
            result.push(current.clone());
            counters[i] += 1;
            i = 0;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    result
}

/// Reorders `items` according to `permutation`.
///
/// `permutation[k]` names the source index of the element placed at
/// position `k`. Panics if the lengths differ or an index is out of
/// range.
pub fn apply_permutation<T: Clone>(items: &[T], permutation: &[usize]) -> Vec<T> {
    assert_eq!(items.len(), permutation.len());

    permutation.iter().map(|&idx| items[idx].clone()).collect()
}
