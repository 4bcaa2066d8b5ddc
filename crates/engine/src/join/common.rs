// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use tabula_core::{ColumnData, Table};
use tabula_type::{Result, Value};

/// A matched row pair; `None` marks the absent side of an outer match.
pub(crate) type RowPair = (Option<usize>, Option<usize>);

/// One input of a join together with the position of its key column.
pub(crate) struct JoinSide<'a> {
	pub table: &'a Table,
	pub names: &'a [String],
	pub key: usize,
}

impl<'a> JoinSide<'a> {
	pub fn new(table: &'a Table, names: &'a [String], key: usize) -> Self {
		Self {
			table,
			names,
			key,
		}
	}

	pub fn key_column(&self) -> &'a ColumnData {
		&self.table.columns()[self.key]
	}

	pub fn row_count(&self) -> usize {
		self.table.row_count()
	}

	/// The key at `row`, or `None` if it is undefined and cannot match.
	pub fn key_at(&self, row: usize) -> Option<Value> {
		let key = self.key_column().get_value(row);
		if key.is_undefined() {
			None
		} else {
			Some(key)
		}
	}
}

/// Maps each defined key value to the rows holding it, in row order.
pub(crate) fn build_index(side: &JoinSide) -> HashMap<Value, Vec<usize>> {
	let mut index: HashMap<Value, Vec<usize>> = HashMap::new();
	for row in 0..side.row_count() {
		if let Some(key) = side.key_at(row) {
			index.entry(key).or_default().push(row);
		}
	}
	index
}

/// Names of the output columns: all left names, then the right names without
/// the right key. A right name that is already taken becomes `right_<name>`,
/// with a counter appended while that is taken too.
pub(crate) fn resolve_column_names(left: &JoinSide, right: &JoinSide) -> Vec<String> {
	let mut names: Vec<String> = left.names.to_vec();

	for (idx, name) in right.names.iter().enumerate() {
		if idx == right.key {
			continue;
		}

		if !names.contains(name) {
			names.push(name.clone());
			continue;
		}

		let prefixed = format!("right_{}", name);
		let mut final_name = prefixed.clone();
		let mut counter = 2;
		while names.contains(&final_name) {
			final_name = format!("{}_{}", prefixed, counter);
			counter += 1;
		}
		names.push(final_name);
	}

	names
}

/// Gathers the output table for `pairs`.
///
/// The key column takes the left key when the left row is present and the
/// right key otherwise. Every other column is taken from its own side, with
/// the null placeholder where that side is absent.
pub(crate) fn assemble(left: &JoinSide, right: &JoinSide, pairs: &[RowPair]) -> Result<Table> {
	let names = resolve_column_names(left, right);

	let left_rows: Vec<Option<usize>> = pairs.iter().map(|(l, _)| *l).collect();
	let right_rows: Vec<Option<usize>> = pairs.iter().map(|(_, r)| *r).collect();

	let mut columns = Vec::with_capacity(names.len());

	for (idx, column) in left.table.columns().iter().enumerate() {
		if idx == left.key {
			columns.push(coalesce_key(left, right, pairs));
		} else {
			columns.push(column.take(&left_rows));
		}
	}

	for (idx, column) in right.table.columns().iter().enumerate() {
		if idx != right.key {
			columns.push(column.take(&right_rows));
		}
	}

	Table::from_columns(names, columns)
}

fn coalesce_key(left: &JoinSide, right: &JoinSide, pairs: &[RowPair]) -> ColumnData {
	let left_key = left.key_column();
	let right_key = right.key_column();

	let mut result = ColumnData::with_capacity(left_key.get_type(), pairs.len());
	for pair in pairs {
		match *pair {
			(Some(l), _) => result.push_value(left_key.get_value(l)),
			(None, Some(r)) => result.push_value(right_key.get_value(r)),
			(None, None) => result.push_undefined(),
		}
	}
	result
}
