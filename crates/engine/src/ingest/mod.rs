// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Parallel ingestion of row-oriented text records into a [`Table`].
//!
//! Columns are allocated at full length up front and the body rows are split
//! into contiguous ranges, one per worker. Each worker owns the matching
//! slice of every column, so workers never write to the same cell.

use std::{mem, ops::Range};

use rayon::prelude::*;
use tabula_core::{ColumnTypes, Table};
use tabula_runtime::ComputePool;
use tabula_type::{Error, Result, Type, Value};
use tracing::{debug, instrument, warn};

mod reader;

pub use reader::{parse_records, read_csv, read_csv_str};

/// Column type assigned to every ingested column.
pub const FALLBACK_TYPE: Type = Type::Utf8;

/// Configuration for delimited-text ingestion.
#[derive(Debug, Clone)]
pub struct IngestConfig {
	/// Number of chunk workers, and threads in the pool they run on.
	pub workers: usize,
	/// Field separator.
	pub delimiter: u8,
	/// Quote character for fields containing separators or line breaks.
	pub quote: u8,
	/// Strip surrounding whitespace from every field, and allow blanks
	/// around quoted fields.
	pub trim: bool,
}

impl Default for IngestConfig {
	fn default() -> Self {
		Self {
			workers: num_cpus::get(),
			delimiter: b',',
			quote: b'"',
			trim: false,
		}
	}
}

impl IngestConfig {
	pub fn with_workers(mut self, workers: usize) -> Self {
		self.workers = workers;
		self
	}

	pub fn with_delimiter(mut self, delimiter: u8) -> Self {
		self.delimiter = delimiter;
		self
	}

	pub fn with_quote(mut self, quote: u8) -> Self {
		self.quote = quote;
		self
	}

	pub fn with_trim(mut self, trim: bool) -> Self {
		self.trim = trim;
		self
	}
}

/// Builds a table from a header and body records on a fresh pool sized by
/// `config.workers`.
pub fn ingest(header: Vec<String>, records: Vec<Vec<String>>, config: &IngestConfig) -> Result<Table> {
	let workers = config.workers.max(1).min(records.len().max(1));
	let pool = ComputePool::new("ingest", workers)?;
	ingest_on(&pool, header, records)
}

/// Builds a table from a header and body records, using one chunk worker per
/// thread of `pool` (never more workers than rows).
///
/// Fails with [`Error::EmptyInput`] when the header or the body is empty. A
/// record whose width differs from the header fails the whole ingestion with
/// [`Error::RowWidthMismatch`] for the earliest such record. Every column is
/// typed [`FALLBACK_TYPE`].
#[instrument(name = "ingest::ingest", level = "debug", skip_all, fields(columns = header.len(), rows = records.len()))]
pub fn ingest_on(pool: &ComputePool, header: Vec<String>, mut records: Vec<Vec<String>>) -> Result<Table> {
	if header.is_empty() || records.is_empty() {
		warn!("nothing to ingest");
		return Err(Error::EmptyInput);
	}

	let width = header.len();
	let rows = records.len();
	let ranges = chunk_ranges(rows, pool.threads());

	let mut columns: Vec<Vec<Value>> = (0..width).map(|_| vec![Value::Undefined; rows]).collect();

	let tasks = split_tasks(&ranges, &mut records, &mut columns);
	let results: Vec<Result<()>> =
		pool.install(|| tasks.into_par_iter().map(|task| task.run(width)).collect());
	results.into_iter().collect::<Result<Vec<()>>>()?;

	debug!(workers = ranges.len(), "records ingested");

	let types: ColumnTypes = header.iter().map(|name| (name.clone(), FALLBACK_TYPE)).collect();
	Table::try_new(header, columns, &types)
}

/// Splits `rows` into `workers` contiguous ranges of `rows / workers`
/// records; the last range absorbs the remainder.
fn chunk_ranges(rows: usize, workers: usize) -> Vec<Range<usize>> {
	let workers = workers.max(1).min(rows.max(1));
	let chunk = rows / workers;

	(0..workers)
		.map(|i| {
			let start = i * chunk;
			let end = if i + 1 == workers {
				rows
			} else {
				start + chunk
			};
			start..end
		})
		.collect()
}

/// The records and output cells owned by one worker.
struct ChunkTask<'a> {
	first_row: usize,
	records: &'a mut [Vec<String>],
	columns: Vec<&'a mut [Value]>,
}

impl ChunkTask<'_> {
	fn run(mut self, width: usize) -> Result<()> {
		for (offset, record) in self.records.iter_mut().enumerate() {
			if record.len() != width {
				return Err(Error::RowWidthMismatch {
					row: self.first_row + offset,
					expected: width,
					actual: record.len(),
				});
			}
			for (column, field) in self.columns.iter_mut().zip(record.iter_mut()) {
				column[offset] = Value::Utf8(mem::take(field));
			}
		}
		Ok(())
	}
}

fn split_tasks<'a>(
	ranges: &[Range<usize>],
	records: &'a mut [Vec<String>],
	columns: &'a mut [Vec<Value>],
) -> Vec<ChunkTask<'a>> {
	let width = columns.len();
	let mut tasks: Vec<ChunkTask<'a>> = Vec::with_capacity(ranges.len());

	let mut rest = records;
	for range in ranges {
		let (head, tail) = mem::take(&mut rest).split_at_mut(range.len());
		tasks.push(ChunkTask {
			first_row: range.start,
			records: head,
			columns: Vec::with_capacity(width),
		});
		rest = tail;
	}

	for column in columns {
		let mut rest: &'a mut [Value] = column;
		for (task, range) in tasks.iter_mut().zip(ranges) {
			let (head, tail) = mem::take(&mut rest).split_at_mut(range.len());
			task.columns.push(head);
			rest = tail;
		}
	}

	tasks
}
