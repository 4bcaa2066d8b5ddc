// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, fs};

use tabula::{Error, ErrorKind, IngestConfig, JoinType, Table, Type, Value, merge, read_csv};
use tabula_testing::temp_dir;

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

#[test]
fn full_join_renders_as_table() {
	let result = merge(&people(), &ages(), "ID", "outer".parse().unwrap()).unwrap();

	let expected = "\
+----+-----------+-----------+
| ID | Name      | Age       |
+----+-----------+-----------+
| 1  | Alice     | 25        |
| 2  | Bob       | 30        |
| 3  | Charlie   | undefined |
| 4  | undefined | 35        |
+----+-----------+-----------+
[4 rows x 3 columns]";
	assert_eq!(result.to_string(), expected);
}

#[test]
fn csv_rename_join_export() {
	temp_dir(|dir| -> tabula::Result<()> {
		let input = dir.join("people.csv");
		fs::write(&input, "person_id,name\n1,Alice\n2,Bob\n3,Charlie\n")?;

		let people = read_csv(&input, &IngestConfig::default().with_workers(2))?;
		assert_eq!(people.column_type(0), Some(Type::Utf8));

		people.rename(&HashMap::from([("person_id".to_string(), "ID".to_string())]))?;

		let cities = Table::builder().typed::<&str>("ID", ["3", "1"]).typed::<&str>("City", ["Oslo", "Lima"]).build()?;

		let joined = merge(&people, &cities, "ID", JoinType::Left)?;
		let output = dir.join("joined.csv");
		joined.write_delimited(&output, "")?;
		assert_eq!(fs::read_to_string(&output)?, "ID,name,City\n1,Alice,Lima\n2,Bob,undefined\n3,Charlie,Oslo\n");

		let reloaded = read_csv(&output, &IngestConfig::default())?;
		assert_eq!(reloaded.shape(), (3, 3));
		assert_eq!(reloaded.row(2), Some(vec![Value::from("3"), Value::from("Charlie"), Value::from("Oslo")]));
		Ok(())
	})
	.unwrap();
}

#[test]
fn query_result_rows_build_a_table() {
	let rows = vec![
		vec![Value::from(1), Value::from("north"), Value::from(10.5)],
		vec![Value::from(2), Value::Undefined, Value::from(7.25)],
	];
	let table = Table::from_rows(vec!["id".into(), "region".into(), "total".into()], rows).unwrap();

	assert_eq!(table.shape(), (2, 3));
	assert_eq!(table.get(1, 1), Some(Value::Undefined));

	let joined = merge(&table, &table, "id", JoinType::Inner).unwrap();
	assert_eq!(joined.column_names(), vec!["id", "region", "total", "right_region", "right_total"]);
}

#[test]
fn errors_carry_kind_and_code() {
	let err = merge(&people(), &ages(), "Missing", JoinType::Inner).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Lookup);

	let err = "sideways".parse::<JoinType>().unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Unsupported);
	assert_eq!(err.code(), "JOIN_001");

	let table = people();
	let err = table.rename(&HashMap::from([("Nope".to_string(), "x".to_string())])).unwrap_err();
	assert!(matches!(err, Error::ColumnNotFound { .. }));
	assert_eq!(table.column_names(), vec!["ID", "Name"]);
}
