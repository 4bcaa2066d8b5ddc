// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tabula: typed in-memory tables.
//!
//! Tables are built through the validating constructor ([`Table::try_new`],
//! [`Table::builder`], [`Table::from_rows`]) or by ingesting delimited text
//! ([`read_csv`], [`ingest`]). Once built, a table can have its columns
//! renamed ([`Table::rename`]) and can be joined with another table
//! ([`merge`]), which always produces a new table.

pub mod logging;

pub use logging::TracingBuilder;
pub use tabula_collection::{Set, to_set, to_slice};
pub use tabula_core::{ColumnData, ColumnTypes, Table, TableBuilder, TableRows};
pub use tabula_engine::{IngestConfig, JoinType, ingest, ingest_on, merge, parse_records, read_csv, read_csv_str};
pub use tabula_runtime::ComputePool;
pub use tabula_type::{Error, ErrorKind, GetType, OrderedF64, Result, Type, Value};
