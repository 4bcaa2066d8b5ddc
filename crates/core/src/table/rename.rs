// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use tabula_collection::Set;
use tabula_type::{Error, Result};
use tracing::{debug, instrument, warn};

use super::{Table, ensure_unique};

impl Table {
	/// Renames columns in place, mapping existing names to new names.
	///
	/// Every key must name a column of this table. All pairs are applied at
	/// once against the current names, and the result must still be unique.
	/// The write lock on the names is held from validation until the new names
	/// are committed; on any error the names are left untouched.
	#[instrument(name = "table::rename", level = "debug", skip_all, fields(pairs = renames.len()))]
	pub fn rename(&self, renames: &HashMap<String, String>) -> Result<()> {
		if renames.is_empty() {
			return Err(Error::EmptyRenameMap);
		}

		let mut names = self.names.write();

		let mut requested: Vec<&str> = renames.keys().map(String::as_str).collect();
		requested.sort_unstable();

		let keys: Set<&str> = requested.into_iter().collect();
		let current: Set<&str> = names.iter().map(String::as_str).collect();
		let present = keys.intersect(&current);

		let (equal, missing) = keys.compare(&present);
		if !equal {
			let column = missing.copied().or_else(|| keys.difference(&current).iter().next().copied());
			warn!(?column, "rename references columns that are not present");
			return Err(match column {
				Some(column) => Error::ColumnNotFound {
					column: column.to_string(),
				},
				None => Error::RenameColumnsNotPresent,
			});
		}

		let renamed: Vec<String> =
			names.iter().map(|name| renames.get(name).cloned().unwrap_or_else(|| name.clone())).collect();
		ensure_unique(&renamed)?;

		*names = renamed;
		debug!("columns renamed");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::Type;

	use super::*;

	fn table() -> Table {
		Table::builder()
			.typed::<i64>("id", [1, 2])
			.typed::<&str>("name", ["a", "b"])
			.column("score", Type::Float8, [1.5, 2.5])
			.build()
			.unwrap()
	}

	fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
	}

	#[test]
	fn test_rename_while_holding_names_copy() {
		let table = table();
		let names = table.column_names();
		table.rename(&map(&[("id", "key")])).unwrap();

		assert_eq!(names, vec!["id", "name", "score"]);
		assert_eq!(table.column_names(), vec!["key", "name", "score"]);
	}

	#[test]
	fn test_rename_single() {
		let table = table();
		table.rename(&map(&[("name", "full_name")])).unwrap();
		assert_eq!(table.column_names(), vec!["id", "full_name", "score"]);
	}

	#[test]
	fn test_rename_multiple() {
		let table = table();
		table.rename(&map(&[("id", "key"), ("score", "points")])).unwrap();
		assert_eq!(table.column_names(), vec!["key", "name", "points"]);
	}

	#[test]
	fn test_rename_swap_is_simultaneous() {
		let table = table();
		table.rename(&map(&[("id", "name"), ("name", "id")])).unwrap();
		assert_eq!(table.column_names(), vec!["name", "id", "score"]);
	}

	#[test]
	fn test_rename_empty_map() {
		let table = table();
		let err = table.rename(&HashMap::new()).unwrap_err();
		assert!(matches!(err, Error::EmptyRenameMap));
	}

	#[test]
	fn test_rename_unknown_column_leaves_table_unchanged() {
		let table = table();
		let before = table.column_names();

		let err = table.rename(&map(&[("id", "key"), ("missing", "other")])).unwrap_err();
		assert!(matches!(err, Error::ColumnNotFound { ref column } if column == "missing"));
		assert_eq!(table.column_names(), before);
	}

	#[test]
	fn test_rename_into_existing_name_fails() {
		let table = table();
		let err = table.rename(&map(&[("id", "name")])).unwrap_err();
		assert!(matches!(err, Error::DuplicateColumn { ref column } if column == "name"));
		assert_eq!(table.column_names(), vec!["id", "name", "score"]);
	}

	#[test]
	fn test_rename_keeps_data() {
		let table = table();
		table.rename(&map(&[("score", "points")])).unwrap();
		assert_eq!(table.column_by_name("points").map(|c| c.get_type()), Some(Type::Float8));
		assert_eq!(table.row(0).unwrap().len(), 3);
	}
}
