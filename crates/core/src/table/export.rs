// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, fmt::Display, fs, path::Path};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tabula_type::{Error, Result};
use tracing::{debug, instrument};

use super::Table;

const DEFAULT_SEPARATOR: &str = ",";

fn delimited_error(err: impl Display) -> Error {
	Error::Delimited {
		message: err.to_string(),
	}
}

fn write_records(records: &[Vec<String>], delimiter: u8) -> Result<String> {
	let mut writer = WriterBuilder::new()
		.delimiter(delimiter)
		.terminator(Terminator::Any(b'\n'))
		.quote_style(QuoteStyle::Necessary)
		.from_writer(Vec::new());

	for record in records {
		writer.write_record(record).map_err(delimited_error)?;
	}

	let bytes = writer.into_inner().map_err(delimited_error)?;
	String::from_utf8(bytes).map_err(delimited_error)
}

/// Quotes a field for a multi-character separator. The csv writer only
/// splits on single bytes, so it is used per field here.
fn quote_field<'a>(field: &'a str, sep: &str) -> Result<Cow<'a, str>> {
	if !field.contains(sep) && !field.contains(['"', '\n', '\r']) {
		return Ok(Cow::Borrowed(field));
	}

	let mut writer = WriterBuilder::new().quote_style(QuoteStyle::Always).from_writer(Vec::new());
	writer.write_field(field).map_err(delimited_error)?;
	let bytes = writer.into_inner().map_err(delimited_error)?;
	String::from_utf8(bytes).map(Cow::Owned).map_err(delimited_error)
}

fn join_records(records: &[Vec<String>], sep: &str) -> Result<String> {
	let mut out = String::new();
	for record in records {
		let fields = record.iter().map(|field| quote_field(field, sep)).collect::<Result<Vec<_>>>()?;
		out.push_str(&fields.join(sep));
		out.push('\n');
	}
	Ok(out)
}

impl Table {
	/// Header and rows as display strings, in column order.
	fn text_records(&self) -> Vec<Vec<String>> {
		let mut records = Vec::with_capacity(self.row_count + 1);
		records.push(self.lock_names().clone());
		for row in 0..self.row_count {
			records.push(self.columns.iter().map(|c| c.as_string(row)).collect());
		}
		records
	}

	/// Renders the table as delimited text: a header line followed by one
	/// line per row. An empty `sep` falls back to `","`. Fields holding the
	/// separator, a quote or a line break are quoted with inner quotes
	/// doubled.
	pub fn to_delimited(&self, sep: &str) -> Result<String> {
		let sep = if sep.is_empty() {
			DEFAULT_SEPARATOR
		} else {
			sep
		};

		let records = self.text_records();
		match sep.as_bytes() {
			[delimiter] => write_records(&records, *delimiter),
			_ => join_records(&records, sep),
		}
	}

	/// Writes [`Table::to_delimited`] to `path`, replacing any existing file.
	#[instrument(name = "table::write_delimited", level = "debug", skip_all, fields(path = %path.as_ref().display()))]
	pub fn write_delimited(&self, path: impl AsRef<Path>, sep: &str) -> Result<()> {
		let text = self.to_delimited(sep)?;
		fs::write(path.as_ref(), text.as_bytes())?;
		debug!(rows = self.row_count, bytes = text.len(), "table written");
		Ok(())
	}
}
