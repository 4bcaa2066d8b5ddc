// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, fs, sync::Arc, thread};

use tabula_core::{ColumnTypes, Table};
use tabula_testing::temp_dir;
use tabula_type::{Error, Type, Value};

fn names(count: usize) -> Vec<String> {
	(0..count).map(|i| format!("c{i}")).collect()
}

fn int_types(count: usize) -> ColumnTypes {
	names(count).into_iter().map(|n| (n, Type::Int8)).collect()
}

fn column(len: usize, seed: i64) -> Vec<Value> {
	(0..len as i64).map(|i| Value::from(i * 31 + seed)).collect()
}

#[test]
fn construct_succeeds_for_rectangular_input() {
	for columns in 1..6 {
		for rows in [0, 1, 7, 64] {
			let data = (0..columns).map(|c| column(rows, c as i64)).collect();
			let table = Table::try_new(names(columns), data, &int_types(columns)).unwrap();
			assert_eq!(table.shape(), (rows, columns));
		}
	}
}

#[test]
fn construct_names_the_ragged_column() {
	for columns in 2..6 {
		for ragged in 1..columns {
			let data = (0..columns).map(|c| column(if c == ragged { 3 } else { 4 }, 0)).collect();
			let err = Table::try_new(names(columns), data, &int_types(columns)).unwrap_err();
			match err {
				Error::RowCountMismatch {
					column,
					expected,
					actual,
				} => {
					assert_eq!(column, format!("c{ragged}"));
					assert_eq!(expected, 4);
					assert_eq!(actual, 3);
				}
				other => panic!("unexpected error: {other}"),
			}
		}
	}
}

#[test]
fn failed_rename_leaves_names_unchanged() {
	let table = Table::try_new(names(4), (0..4).map(|c| column(2, c)).collect(), &int_types(4)).unwrap();
	let before = table.column_names();

	let cases = [
		vec![("c9", "x")],
		vec![("c0", "x"), ("nope", "y")],
		vec![("c1", "c2")],
		vec![("c0", "z"), ("c1", "z")],
	];

	for pairs in cases {
		let renames: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		assert!(table.rename(&renames).is_err());
		assert_eq!(table.column_names(), before);
	}
}

#[test]
fn concurrent_renames_are_serialized() {
	let table = Arc::new(Table::builder().typed::<i64>("a", [1]).typed::<i64>("b", [2]).build().unwrap());

	let handles: Vec<_> = (0..8)
		.map(|i| {
			let table = Arc::clone(&table);
			thread::spawn(move || {
				let from = if i % 2 == 0 { "a" } else { "b" };
				let renames = HashMap::from([(from.to_string(), format!("{from}{i}"))]);
				let _ = table.rename(&renames);
			})
		})
		.collect();

	for handle in handles {
		handle.join().unwrap();
	}

	let names = table.column_names();
	assert_eq!(names.len(), 2);
	assert!(names[0].starts_with('a'));
	assert!(names[1].starts_with('b'));
	assert_ne!(names[0], "a");
	assert_ne!(names[1], "b");
}

#[test]
fn write_delimited_to_file() {
	let table = Table::builder()
		.typed::<i64>("ID", [1, 2])
		.typed::<&str>("Name", ["Alice", "Bob"])
		.build()
		.unwrap();

	temp_dir(|dir| -> tabula_type::Result<()> {
		let path = dir.join("out.csv");
		table.write_delimited(&path, ";")?;
		assert_eq!(fs::read_to_string(&path)?, "ID;Name\n1;Alice\n2;Bob\n");
		Ok(())
	})
	.unwrap();
}

#[test]
fn write_delimited_reports_io_errors() {
	let table = Table::builder().typed::<i64>("ID", [1]).build().unwrap();

	temp_dir(|dir| -> tabula_type::Result<()> {
		let err = table.write_delimited(dir.join("missing").join("out.csv"), ",").unwrap_err();
		assert!(matches!(err, Error::Io(_)));
		Ok(())
	})
	.unwrap();
}
