// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, hash::Hash};

use indexmap::{IndexSet, set};
use tabula_type::{Error, Result};

/// An unordered collection of unique elements.
///
/// Iteration follows insertion order, which keeps diagnostics such as the
/// mismatch reported by [`Set::compare`] deterministic. Callers must not rely
/// on the order of [`to_slice`] beyond that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set<T: Eq + Hash>(IndexSet<T>);

impl<T: Eq + Hash> Set<T> {
	pub fn new() -> Self {
		Self(IndexSet::new())
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self(IndexSet::with_capacity(capacity))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn has(&self, v: &T) -> bool {
		self.0.contains(v)
	}

	pub fn iter(&self) -> set::Iter<'_, T> {
		self.0.iter()
	}

	/// Removes `v`, returning whether it was present.
	pub fn remove(&mut self, v: &T) -> bool {
		self.0.shift_remove(v)
	}

	pub fn is_subset(&self, other: &Set<T>) -> bool {
		self.0.is_subset(&other.0)
	}

	/// Compares cardinality first, then membership of every element of `self`
	/// in `other`. Returns the first element of `self` missing from `other`
	/// when the sizes agree but the contents do not.
	pub fn compare(&self, other: &Set<T>) -> (bool, Option<&T>) {
		if self.len() != other.len() {
			return (false, None);
		}
		match self.0.iter().find(|v| !other.has(v)) {
			Some(missing) => (false, Some(missing)),
			None => (true, None),
		}
	}
}

impl<T: Eq + Hash + Debug> Set<T> {
	/// Inserts `v`, failing with [`Error::Duplicate`] if it is already present.
	pub fn add(&mut self, v: T) -> Result<()> {
		if self.0.contains(&v) {
			return Err(Error::Duplicate {
				value: format!("{:?}", v),
			});
		}
		self.0.insert(v);
		Ok(())
	}

	/// Adds every value in order, stopping at the first duplicate. Values
	/// added before the duplicate stay in the set.
	pub fn add_multi(&mut self, values: impl IntoIterator<Item = T>) -> Result<()> {
		for v in values {
			self.add(v)?;
		}
		Ok(())
	}
}

impl<T: Eq + Hash + Clone> Set<T> {
	pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Set<T> {
		Self(self.0.iter().filter(|v| predicate(v)).cloned().collect())
	}

	pub fn union(&self, other: &Set<T>) -> Set<T> {
		Self(self.0.union(&other.0).cloned().collect())
	}

	pub fn intersect(&self, other: &Set<T>) -> Set<T> {
		Self(self.0.intersection(&other.0).cloned().collect())
	}

	pub fn difference(&self, other: &Set<T>) -> Set<T> {
		Self(self.0.difference(&other.0).cloned().collect())
	}
}

impl<T: Eq + Hash> Default for Set<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
	type Item = T;
	type IntoIter = set::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
	type Item = &'a T;
	type IntoIter = set::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Copies the elements of `set` into a vector. The order is unspecified.
pub fn to_slice<T: Eq + Hash + Clone>(set: &Set<T>) -> Vec<T> {
	set.iter().cloned().collect()
}

/// Builds a set from `values`, silently dropping repeated entries.
pub fn to_set<T: Eq + Hash + Clone>(values: &[T]) -> Set<T> {
	values.iter().cloned().collect()
}
