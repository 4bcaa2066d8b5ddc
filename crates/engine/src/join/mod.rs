// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Hash joins on a single key column.
//!
//! Every join kind first produces a list of row pairs, `(left_row,
//! right_row)`, where `None` stands for the absent side of an outer match.
//! The pairs are then gathered into the output columns in one pass.

use std::{fmt, str::FromStr};

use tabula_core::Table;
use tabula_type::{Error, Result};
use tracing::{debug, instrument, warn};

mod common;
mod full;
mod inner;
mod left;
mod right;

use common::{JoinSide, assemble};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
	Inner,
	Left,
	Right,
	Full,
}

impl FromStr for JoinType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"inner" => Ok(JoinType::Inner),
			"left" => Ok(JoinType::Left),
			"right" => Ok(JoinType::Right),
			"full" | "outer" => Ok(JoinType::Full),
			_ => Err(Error::UnsupportedJoin {
				how: s.to_string(),
			}),
		}
	}
}

impl fmt::Display for JoinType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			JoinType::Inner => f.write_str("inner"),
			JoinType::Left => f.write_str("left"),
			JoinType::Right => f.write_str("right"),
			JoinType::Full => f.write_str("full"),
		}
	}
}

/// Joins `left` and `right` on the column named `on`, producing a new table.
///
/// The output holds every column of `left` followed by every column of
/// `right` except its copy of `on`. Rows follow the driving table's order,
/// and fan-out matches follow the matched table's order. Keys that are
/// [`Value::Undefined`](tabula_type::Value::Undefined) never match.
///
/// Column names are read once from each input, so a concurrent
/// [`Table::rename`] is seen either entirely or not at all.
#[instrument(name = "join::merge", level = "debug", skip_all, fields(on = %on, how = %how))]
pub fn merge(left: &Table, right: &Table, on: &str, how: JoinType) -> Result<Table> {
	let left_names = left.column_names();
	let right_names = right.column_names();

	let Some(left_key) = left_names.iter().position(|n| n == on) else {
		warn!("join column missing from left table");
		return Err(Error::ColumnNotFound {
			column: on.to_string(),
		});
	};
	let Some(right_key) = right_names.iter().position(|n| n == on) else {
		warn!("join column missing from right table");
		return Err(Error::ColumnNotFound {
			column: on.to_string(),
		});
	};

	let left_side = JoinSide::new(left, &left_names, left_key);
	let right_side = JoinSide::new(right, &right_names, right_key);

	let pairs = match how {
		JoinType::Inner => inner::pairs(&left_side, &right_side),
		JoinType::Left => left::pairs(&left_side, &right_side),
		JoinType::Right => right::pairs(&left_side, &right_side),
		JoinType::Full => full::pairs(&left_side, &right_side),
	};

	let result = assemble(&left_side, &right_side, &pairs)?;
	debug!(left_rows = left.row_count(), right_rows = right.row_count(), rows = result.row_count(), "join complete");
	Ok(result)
}

#[cfg(test)]
mod tests {
	use tabula_type::{Type, Value};

	use super::*;

	fn people() -> Table {
		Table::builder()
			.typed::<i64>("ID", [1, 2, 3])
			.typed::<&str>("Name", ["Alice", "Bob", "Charlie"])
			.build()
			.unwrap()
	}

	fn ages() -> Table {
		Table::builder().typed::<i64>("ID", [1, 2, 4]).typed::<i64>("Age", [25, 30, 35]).build().unwrap()
	}

	fn rows(table: &Table) -> Vec<Vec<Value>> {
		table.rows().collect()
	}

	fn row(id: i64, name: Option<&str>, age: Option<i64>) -> Vec<Value> {
		vec![Value::from(id), Value::from(name), Value::from(age)]
	}

	#[test]
	fn test_parse_join_type() {
		assert_eq!("inner".parse::<JoinType>().unwrap(), JoinType::Inner);
		assert_eq!("LEFT".parse::<JoinType>().unwrap(), JoinType::Left);
		assert_eq!("Right".parse::<JoinType>().unwrap(), JoinType::Right);
		assert_eq!("full".parse::<JoinType>().unwrap(), JoinType::Full);
		assert_eq!("outer".parse::<JoinType>().unwrap(), JoinType::Full);

		let err = "cross".parse::<JoinType>().unwrap_err();
		assert!(matches!(err, Error::UnsupportedJoin { ref how } if how == "cross"));
	}

	#[test]
	fn test_display_roundtrips() {
		for how in [JoinType::Inner, JoinType::Left, JoinType::Right, JoinType::Full] {
			assert_eq!(how.to_string().parse::<JoinType>().unwrap(), how);
		}
	}

	#[test]
	fn test_inner() {
		let result = merge(&people(), &ages(), "ID", JoinType::Inner).unwrap();
		assert_eq!(result.column_names(), vec!["ID", "Name", "Age"]);
		assert_eq!(rows(&result), vec![row(1, Some("Alice"), Some(25)), row(2, Some("Bob"), Some(30))]);
	}

	#[test]
	fn test_left() {
		let result = merge(&people(), &ages(), "ID", JoinType::Left).unwrap();
		assert_eq!(
			rows(&result),
			vec![row(1, Some("Alice"), Some(25)), row(2, Some("Bob"), Some(30)), row(3, Some("Charlie"), None)]
		);
	}

	#[test]
	fn test_right() {
		let result = merge(&people(), &ages(), "ID", JoinType::Right).unwrap();
		assert_eq!(
			rows(&result),
			vec![row(1, Some("Alice"), Some(25)), row(2, Some("Bob"), Some(30)), row(4, None, Some(35))]
		);
	}

	#[test]
	fn test_full() {
		let result = merge(&people(), &ages(), "ID", JoinType::Full).unwrap();
		assert_eq!(
			rows(&result),
			vec![
				row(1, Some("Alice"), Some(25)),
				row(2, Some("Bob"), Some(30)),
				row(3, Some("Charlie"), None),
				row(4, None, Some(35)),
			]
		);
	}

	#[test]
	fn test_output_types_follow_inputs() {
		let result = merge(&people(), &ages(), "ID", JoinType::Full).unwrap();
		assert_eq!(result.column_type(0), Some(Type::Int8));
		assert_eq!(result.column_type(1), Some(Type::Utf8));
		assert_eq!(result.column_type(2), Some(Type::Int8));
	}

	#[test]
	fn test_missing_join_column() {
		let other = Table::builder().typed::<i64>("Key", [1]).build().unwrap();

		let err = merge(&people(), &other, "ID", JoinType::Inner).unwrap_err();
		assert!(matches!(err, Error::ColumnNotFound { ref column } if column == "ID"));

		let err = merge(&other, &people(), "ID", JoinType::Left).unwrap_err();
		assert!(matches!(err, Error::ColumnNotFound { ref column } if column == "ID"));
	}

	#[test]
	fn test_inputs_are_untouched() {
		let left = people();
		let right = ages();
		let before = (left.clone(), right.clone());
		merge(&left, &right, "ID", JoinType::Full).unwrap();
		assert_eq!((left, right), before);
	}

	#[test]
	fn test_self_join() {
		let table = people();
		let result = merge(&table, &table, "ID", JoinType::Inner).unwrap();
		assert_eq!(result.column_names(), vec!["ID", "Name", "right_Name"]);
		assert_eq!(result.row_count(), 3);
	}
}
