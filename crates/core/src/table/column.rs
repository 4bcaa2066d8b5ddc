// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{Error, Result, Type, Value};

/// Cell storage of a single column.
///
/// The variant is chosen once from the declared [`Type`]; typed variants keep
/// a validity vector next to the values so the null placeholder can be stored
/// without giving up the native representation.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
	// value, is_valid
	Boolean(Vec<bool>, Vec<bool>),
	Float8(Vec<f64>, Vec<bool>),
	Int8(Vec<i64>, Vec<bool>),
	Utf8(Vec<String>, Vec<bool>),

	// pass-through, no per-cell validation
	Any(Vec<Value>),
}

impl ColumnData {
	pub fn with_capacity(ty: Type, capacity: usize) -> Self {
		match ty {
			Type::Boolean => ColumnData::Boolean(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Any | Type::Undefined => ColumnData::Any(Vec::with_capacity(capacity)),
		}
	}

	/// Builds the storage for a column declared as `ty`, checking every cell.
	///
	/// The first cell that does not fit fails with [`Error::TypeMismatch`]
	/// naming `column`, the row, and both types.
	pub fn from_values(column: &str, ty: Type, values: Vec<Value>) -> Result<Self> {
		if !ty.is_typed() {
			return Ok(ColumnData::Any(values));
		}

		let mut data = ColumnData::with_capacity(ty, values.len());
		for (row, value) in values.into_iter().enumerate() {
			if !ty.accepts(&value) {
				return Err(Error::TypeMismatch {
					column: column.to_string(),
					row,
					expected: ty,
					actual: value.get_type(),
				});
			}
			data.push_value(value);
		}
		Ok(data)
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Boolean(_, _) => Type::Boolean,
			ColumnData::Float8(_, _) => Type::Float8,
			ColumnData::Int8(_, _) => Type::Int8,
			ColumnData::Utf8(_, _) => Type::Utf8,
			ColumnData::Any(_) => Type::Any,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Boolean(_, b)
			| ColumnData::Float8(_, b)
			| ColumnData::Int8(_, b)
			| ColumnData::Utf8(_, b) => b.len(),
			ColumnData::Any(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the cell at `index`. Panics if `index` is out of bounds.
	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Boolean(v, b) => {
				if b[index] {
					Value::Boolean(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Float8(v, b) => {
				if b[index] {
					Value::float8(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Int8(v, b) => {
				if b[index] {
					Value::Int8(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Utf8(v, b) => {
				if b[index] {
					Value::Utf8(v[index].clone())
				} else {
					Value::Undefined
				}
			}
			ColumnData::Any(v) => v[index].clone(),
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		match self {
			ColumnData::Utf8(v, b) if b[index] => v[index].clone(),
			_ => self.get_value(index).to_string(),
		}
	}

	/// Appends a cell. A value the column type cannot hold widens the column
	/// to [`ColumnData::Any`] instead of failing.
	pub fn push_value(&mut self, value: Value) {
		if !self.get_type().accepts(&value) {
			self.promote_to_any();
		}

		match (self, value) {
			(ColumnData::Boolean(v, b), Value::Boolean(x)) => {
				v.push(x);
				b.push(true);
			}
			(ColumnData::Float8(v, b), Value::Float8(x)) => {
				v.push(x.value());
				b.push(true);
			}
			(ColumnData::Int8(v, b), Value::Int8(x)) => {
				v.push(x);
				b.push(true);
			}
			(ColumnData::Utf8(v, b), Value::Utf8(x)) => {
				v.push(x);
				b.push(true);
			}
			(ColumnData::Boolean(v, b), Value::Undefined) => {
				v.push(false);
				b.push(false);
			}
			(ColumnData::Float8(v, b), Value::Undefined) => {
				v.push(0.0);
				b.push(false);
			}
			(ColumnData::Int8(v, b), Value::Undefined) => {
				v.push(0);
				b.push(false);
			}
			(ColumnData::Utf8(v, b), Value::Undefined) => {
				v.push(String::new());
				b.push(false);
			}
			(ColumnData::Any(v), value) => v.push(value),
			// mismatches were promoted to Any above
			(_, _) => debug_assert!(false, "column type does not accept value after promotion"),
		}
	}

	pub fn push_undefined(&mut self) {
		self.push_value(Value::Undefined);
	}

	/// Converts typed storage into [`ColumnData::Any`], keeping every cell.
	pub fn promote_to_any(&mut self) {
		if matches!(self, ColumnData::Any(_)) {
			return;
		}
		let values = (0..self.len()).map(|i| self.get_value(i)).collect();
		*self = ColumnData::Any(values);
	}

	/// Builds a new column holding the cells at `indices`, in that order.
	/// `None` produces the null placeholder.
	pub fn take(&self, indices: &[Option<usize>]) -> ColumnData {
		let mut result = ColumnData::with_capacity(self.get_type(), indices.len());
		for index in indices {
			match index {
				Some(i) => result.push_value(self.get_value(*i)),
				None => result.push_undefined(),
			}
		}
		result
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).map(|i| self.get_value(i))
	}
}
