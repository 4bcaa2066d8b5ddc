// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::Value;

mod get;

pub use get::GetType;

/// Declared type of a column.
///
/// [`Type::Any`] is the pass-through tag: cells of any kind are accepted and
/// stored as-is. [`Type::Undefined`] only ever describes a
/// [`Value::Undefined`] cell and, when declared for a column, behaves like
/// [`Type::Any`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Boolean,
	Float8,
	Int8,
	Utf8,
	Any,
	Undefined,
}

impl Type {
	/// Whether the column stores a single kind of scalar and is checked cell by cell.
	pub fn is_typed(&self) -> bool {
		matches!(self, Type::Boolean | Type::Float8 | Type::Int8 | Type::Utf8)
	}

	/// Whether `value` may be stored in a column of this type. The null
	/// placeholder fits every column.
	pub fn accepts(&self, value: &Value) -> bool {
		match (self, value) {
			(_, Value::Undefined) => true,
			(Type::Any | Type::Undefined, _) => true,
			(Type::Boolean, Value::Boolean(_)) => true,
			(Type::Float8, Value::Float8(_)) => true,
			(Type::Int8, Value::Int8(_)) => true,
			(Type::Utf8, Value::Utf8(_)) => true,
			_ => false,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int8 => f.write_str("Int8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Any => f.write_str("Any"),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}
