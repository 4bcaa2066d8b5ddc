// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rand::{RngExt, SeedableRng, rngs::StdRng};
use tabula_collection::{Set, to_set, to_slice};

fn values(rng: &mut StdRng, len: usize, range: u64) -> Vec<u64> {
	(0..len).map(|_| rng.random_range(0..range)).collect()
}

/// Fixed seed, so every run checks the same sets.
fn samples() -> Vec<(Vec<u64>, Vec<u64>)> {
	let mut rng = StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);
	let mut samples = vec![(vec![], vec![]), (vec![1, 2, 3], vec![]), (vec![], vec![7])];
	for len in [1, 2, 5, 16, 64] {
		for range in [4, 32, 1024] {
			samples.push((values(&mut rng, len, range), values(&mut rng, len + 3, range)));
		}
	}
	samples
}

#[test]
fn test_union_is_commutative_and_idempotent() {
	for (a, b) in samples() {
		let a = to_set(&a);
		let b = to_set(&b);
		assert_eq!(a.union(&b), b.union(&a));
		assert_eq!(a.union(&a), a);
	}
}

#[test]
fn test_intersect_is_subset_of_both() {
	for (a, b) in samples() {
		let a = to_set(&a);
		let b = to_set(&b);
		let both = a.intersect(&b);
		assert!(both.is_subset(&a));
		assert!(both.is_subset(&b));
	}
}

#[test]
fn test_difference_is_disjoint_from_subtrahend() {
	for (a, b) in samples() {
		let a = to_set(&a);
		let b = to_set(&b);
		assert!(a.difference(&b).intersect(&b).is_empty());
	}
}

#[test]
fn test_slice_roundtrip_ignores_duplicates() {
	for (a, _) in samples() {
		let set = to_set(&a);
		let mut doubled = to_slice(&set);
		doubled.extend(a.iter().copied());

		let rebuilt = to_set(&doubled);
		let (equal, mismatch) = rebuilt.compare(&set);
		assert!(equal);
		assert_eq!(mismatch, None);
	}
}

#[test]
fn test_filter_partitions_set() {
	for (a, _) in samples() {
		let set: Set<u64> = a.into_iter().collect();
		let even = set.filter(|v| v % 2 == 0);
		let odd = set.filter(|v| v % 2 == 1);
		assert_eq!(even.union(&odd), set);
		assert!(even.intersect(&odd).is_empty());
	}
}
