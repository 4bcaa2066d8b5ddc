// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The table entity: ordered, unique column names over rectangular,
//! typed column storage.
//!
//! Cells are addressed as `column(column_index).get_value(row_index)`. A table
//! is validated once, in [`Table::try_new`]; afterwards only the column names
//! can change (see [`Table::rename`]). Operations that combine tables always
//! produce a new instance.

use std::{collections::HashMap, fmt};

use parking_lot::{RwLock, RwLockReadGuard};
use tabula_collection::Set;
use tabula_type::{Error, GetType, Result, Type, Value};
use tracing::{instrument, trace};

mod column;
mod display;
mod export;
mod rename;

pub use column::ColumnData;

/// Declared type per column name.
pub type ColumnTypes = HashMap<String, Type>;

pub struct Table {
	names: RwLock<Vec<String>>,
	columns: Vec<ColumnData>,
	row_count: usize,
}

impl Table {
	/// Builds a validated table from column-major data.
	///
	/// Checks, in order: `types` is non-empty, `names` is non-empty, `data`
	/// is non-empty, one data column per name, every column as long as the
	/// first, every column has a declared type, names are unique, and every
	/// cell fits its declared type. [`Type::Any`] columns skip the per-cell
	/// check. The null placeholder is accepted in every column.
	#[instrument(name = "table::try_new", level = "trace", skip_all)]
	pub fn try_new(names: Vec<String>, data: Vec<Vec<Value>>, types: &ColumnTypes) -> Result<Self> {
		if types.is_empty() {
			return Err(Error::ColumnTypesRequired);
		}

		if names.is_empty() {
			return Err(Error::NoColumns);
		}

		if data.is_empty() {
			return Err(Error::NoData);
		}

		if names.len() != data.len() {
			return Err(Error::ColumnCountMismatch {
				names: names.len(),
				data: data.len(),
			});
		}

		let row_count = data[0].len();
		for (name, column) in names.iter().zip(&data) {
			if column.len() != row_count {
				return Err(Error::RowCountMismatch {
					column: name.clone(),
					expected: row_count,
					actual: column.len(),
				});
			}
		}

		let mut declared = Vec::with_capacity(names.len());
		for name in &names {
			let ty = types.get(name).ok_or_else(|| Error::MissingColumnType {
				column: name.clone(),
			})?;
			declared.push(*ty);
		}

		ensure_unique(&names)?;

		let mut columns = Vec::with_capacity(names.len());
		for ((name, ty), values) in names.iter().zip(declared).zip(data) {
			columns.push(ColumnData::from_values(name, ty, values)?);
		}

		trace!(columns = names.len(), rows = row_count, "table constructed");

		Ok(Self {
			names: RwLock::new(names),
			columns,
			row_count,
		})
	}

	/// Builds a table from row-oriented results, as produced by query
	/// clients. Every column is declared [`Type::Any`].
	pub fn from_rows(names: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
		let width = names.len();
		let mut data: Vec<Vec<Value>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();

		for (row, values) in rows.into_iter().enumerate() {
			if values.len() != width {
				return Err(Error::RowWidthMismatch {
					row,
					expected: width,
					actual: values.len(),
				});
			}
			for (column, value) in data.iter_mut().zip(values) {
				column.push(value);
			}
		}

		let types: ColumnTypes = names.iter().map(|name| (name.clone(), Type::Any)).collect();
		if types.is_empty() {
			return Err(Error::NoColumns);
		}
		Self::try_new(names, data, &types)
	}

	/// Assembles a table from storage that is already known to be valid,
	/// such as the output of a join.
	pub fn from_columns(names: Vec<String>, columns: Vec<ColumnData>) -> Result<Self> {
		if names.is_empty() {
			return Err(Error::NoColumns);
		}

		if names.len() != columns.len() {
			return Err(Error::ColumnCountMismatch {
				names: names.len(),
				data: columns.len(),
			});
		}

		let row_count = columns[0].len();
		for (name, column) in names.iter().zip(&columns) {
			if column.len() != row_count {
				return Err(Error::RowCountMismatch {
					column: name.clone(),
					expected: row_count,
					actual: column.len(),
				});
			}
		}

		ensure_unique(&names)?;

		Ok(Self {
			names: RwLock::new(names),
			columns,
			row_count,
		})
	}

	pub fn builder() -> TableBuilder {
		TableBuilder::default()
	}

	/// Read access to the column names. Holding the guard keeps
	/// [`Table::rename`] from running on this table; it may be taken more
	/// than once on the same thread, but never across a rename.
	pub(crate) fn lock_names(&self) -> RwLockReadGuard<'_, Vec<String>> {
		self.names.read_recursive()
	}

	/// A consistent copy of the column names, taken under the read lock.
	pub fn column_names(&self) -> Vec<String> {
		self.lock_names().clone()
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.lock_names().iter().position(|n| n == name)
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	/// `(rows, columns)`
	pub fn shape(&self) -> (usize, usize) {
		(self.row_count, self.columns.len())
	}

	pub fn columns(&self) -> &[ColumnData] {
		&self.columns
	}

	pub fn column(&self, index: usize) -> Option<&ColumnData> {
		self.columns.get(index)
	}

	pub fn column_by_name(&self, name: &str) -> Option<&ColumnData> {
		self.column_index(name).and_then(|i| self.columns.get(i))
	}

	pub fn column_type(&self, index: usize) -> Option<Type> {
		self.columns.get(index).map(ColumnData::get_type)
	}

	/// Returns the cell at (`column`, `row`), or `None` when out of bounds.
	pub fn get(&self, column: usize, row: usize) -> Option<Value> {
		if row >= self.row_count {
			return None;
		}
		self.columns.get(column).map(|c| c.get_value(row))
	}

	pub fn row(&self, index: usize) -> Option<Vec<Value>> {
		if index >= self.row_count {
			return None;
		}
		Some(self.columns.iter().map(|c| c.get_value(index)).collect())
	}

	pub fn rows(&self) -> TableRows<'_> {
		TableRows {
			table: self,
			row_index: 0,
		}
	}
}

fn ensure_unique(names: &[String]) -> Result<()> {
	let mut seen = Set::with_capacity(names.len());
	for name in names {
		if seen.add(name.as_str()).is_err() {
			return Err(Error::DuplicateColumn {
				column: name.clone(),
			});
		}
	}
	Ok(())
}

impl Clone for Table {
	fn clone(&self) -> Self {
		Self {
			names: RwLock::new(self.column_names()),
			columns: self.columns.clone(),
			row_count: self.row_count,
		}
	}
}

impl PartialEq for Table {
	fn eq(&self, other: &Self) -> bool {
		self.row_count == other.row_count
			&& self.columns == other.columns
			&& *self.lock_names() == *other.lock_names()
	}
}

impl fmt::Debug for Table {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("names", &*self.lock_names())
			.field("columns", &self.columns)
			.field("row_count", &self.row_count)
			.finish()
	}
}

/// Iterator over the rows of a [`Table`], in row order.
pub struct TableRows<'t> {
	table: &'t Table,
	row_index: usize,
}

impl<'t> Iterator for TableRows<'t> {
	type Item = Vec<Value>;

	fn next(&mut self) -> Option<Self::Item> {
		let row = self.table.row(self.row_index)?;
		self.row_index += 1;
		Some(row)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.table.row_count.saturating_sub(self.row_index);
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for TableRows<'_> {}

/// Column-by-column construction of a [`Table`], validated on
/// [`TableBuilder::build`].
#[derive(Debug, Default)]
pub struct TableBuilder {
	names: Vec<String>,
	data: Vec<Vec<Value>>,
	types: ColumnTypes,
}

impl TableBuilder {
	pub fn column<V: Into<Value>>(mut self, name: &str, ty: Type, values: impl IntoIterator<Item = V>) -> Self {
		self.names.push(name.to_string());
		self.data.push(values.into_iter().map(Into::into).collect());
		self.types.insert(name.to_string(), ty);
		self
	}

	/// Adds a column whose declared type follows the native element type.
	pub fn typed<T: GetType + Into<Value>>(self, name: &str, values: impl IntoIterator<Item = T>) -> Self {
		self.column(name, T::get_type(), values)
	}

	pub fn build(self) -> Result<Table> {
		Table::try_new(self.names, self.data, &self.types)
	}
}
