// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, fs, path::Path};

use csv::{ReaderBuilder, Trim};
use tabula_core::Table;
use tabula_type::{Error, Result};
use tracing::{debug, instrument, warn};

use super::{IngestConfig, ingest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
	FieldStart,
	Unquoted,
	Quoted,
	// a quote inside a quoted field: either escaped or closing
	QuoteInQuoted,
	Closed,
}

/// Checks that every quoted field closes and is followed by a delimiter or a
/// line break. A quote that does not open a field is literal text.
///
/// With `trim` set, blanks around a quoted field are allowed and the ones in
/// front of the opening quote are dropped, so the field still reads as quoted.
fn check_quoting<'a>(text: &'a str, config: &IngestConfig) -> Result<Cow<'a, str>> {
	let IngestConfig {
		delimiter,
		quote,
		trim,
		..
	} = *config;

	let mut state = Quoting::FieldStart;
	let mut line = 1;
	let mut record_line = 1;
	let mut kept = String::new();
	let mut kept_from = 0;

	for (idx, &b) in text.as_bytes().iter().enumerate() {
		let ends_field = b == delimiter || b == b'\n' || b == b'\r';
		let blank = trim && !ends_field && (b == b' ' || b == b'\t');

		match state {
			Quoting::Quoted => {
				if b == quote {
					state = Quoting::QuoteInQuoted;
				}
			}
			Quoting::QuoteInQuoted if b == quote => state = Quoting::Quoted,
			Quoting::QuoteInQuoted | Quoting::Closed => {
				if ends_field {
					state = Quoting::FieldStart;
				} else if blank {
					state = Quoting::Closed;
				} else {
					warn!(line = record_line, "text after closing quote");
					return Err(Error::TextAfterQuote {
						line: record_line,
					});
				}
			}
			Quoting::FieldStart if b == quote => state = Quoting::Quoted,
			Quoting::FieldStart if blank => {
				kept.push_str(&text[kept_from..idx]);
				kept_from = idx + 1;
			}
			Quoting::FieldStart | Quoting::Unquoted => {
				state = if ends_field {
					Quoting::FieldStart
				} else {
					Quoting::Unquoted
				};
			}
		}

		if b == b'\n' {
			line += 1;
			if state != Quoting::Quoted {
				record_line = line;
			}
		}
	}

	if state == Quoting::Quoted {
		warn!(line = record_line, "unterminated quoted field");
		return Err(Error::UnterminatedQuote {
			line: record_line,
		});
	}

	if kept_from == 0 {
		return Ok(Cow::Borrowed(text));
	}
	kept.push_str(&text[kept_from..]);
	Ok(Cow::Owned(kept))
}

/// Splits delimited text into records.
///
/// Fields may be wrapped in the quote character to hold the delimiter, line
/// breaks or doubled quotes. A quote inside an unquoted field is literal
/// text, and blank lines are skipped. A quoted field that never closes, or
/// that is followed by anything but a delimiter or line break, fails with
/// [`Error::UnterminatedQuote`] or [`Error::TextAfterQuote`].
pub fn parse_records(text: &str, config: &IngestConfig) -> Result<Vec<Vec<String>>> {
	let text = check_quoting(text, config)?;

	let mut reader = ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.delimiter(config.delimiter)
		.quote(config.quote)
		.trim(if config.trim {
			Trim::All
		} else {
			Trim::None
		})
		.from_reader(text.as_bytes());

	reader
		.records()
		.map(|record| {
			let record = record.map_err(|err| Error::Delimited {
				message: err.to_string(),
			})?;
			Ok(record.iter().map(str::to_string).collect())
		})
		.collect()
}

/// Parses `text` with the first record as header and ingests the rest.
pub fn read_csv_str(text: &str, config: &IngestConfig) -> Result<Table> {
	let mut records = parse_records(text, config)?.into_iter();
	let header = records.next().ok_or(Error::EmptyInput)?;
	ingest(header, records.collect(), config)
}

/// Reads a delimited file, using its first record as header.
#[instrument(name = "ingest::read_csv", level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn read_csv(path: impl AsRef<Path>, config: &IngestConfig) -> Result<Table> {
	let text = fs::read_to_string(path.as_ref())?;
	debug!(bytes = text.len(), "file loaded");
	read_csv_str(&text, config)
}
