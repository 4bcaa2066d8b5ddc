// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	io,
};

use crate::value::Type;

/// Coarse category of an [`Error`], used by callers that only care about
/// the class of failure and not the precise variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Shape or type violations detected while building or reading a table.
	Validation,
	/// A referenced column does not exist.
	Lookup,
	/// The operation could not run in the current state.
	State,
	/// A set insertion collided with an existing element.
	Duplicate,
	/// The requested operation variant is not supported.
	Unsupported,
	Io,
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ErrorKind::Validation => f.write_str("validation"),
			ErrorKind::Lookup => f.write_str("lookup"),
			ErrorKind::State => f.write_str("state"),
			ErrorKind::Duplicate => f.write_str("duplicate"),
			ErrorKind::Unsupported => f.write_str("unsupported"),
			ErrorKind::Io => f.write_str("io"),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("column types map is required to assert column types")]
	ColumnTypesRequired,

	#[error("at least one column name is required")]
	NoColumns,

	#[error("column data cannot be empty")]
	NoData,

	#[error("number of column names ({names}) must match number of data columns ({data})")]
	ColumnCountMismatch {
		names: usize,
		data: usize,
	},

	#[error("inconsistent row count in column '{column}': expected {expected}, got {actual}")]
	RowCountMismatch {
		column: String,
		expected: usize,
		actual: usize,
	},

	#[error("missing type definition for column '{column}'")]
	MissingColumnType {
		column: String,
	},

	#[error("type mismatch in column '{column}' at row {row}: expected {expected}, got {actual}")]
	TypeMismatch {
		column: String,
		row: usize,
		expected: Type,
		actual: Type,
	},

	#[error("duplicate column name '{column}'")]
	DuplicateColumn {
		column: String,
	},

	#[error("row {row} has {actual} fields, expected {expected}")]
	RowWidthMismatch {
		row: usize,
		expected: usize,
		actual: usize,
	},

	#[error("input contains no data rows beyond the header")]
	EmptyInput,

	#[error("record starting on line {line} has a quoted field that is never closed")]
	UnterminatedQuote {
		line: u64,
	},

	#[error("record starting on line {line} has text after a closing quote")]
	TextAfterQuote {
		line: u64,
	},

	#[error("rename map is empty, declare at least one column to rename")]
	EmptyRenameMap,

	#[error("column '{column}' is not present in the table")]
	ColumnNotFound {
		column: String,
	},

	#[error("the columns specified for renaming are not present in the table")]
	RenameColumnsNotPresent,

	#[error("{0}")]
	State(String),

	#[error("value {value} already exists in the set")]
	Duplicate {
		value: String,
	},

	#[error("unsupported join type '{how}', expected one of: inner, left, right, full")]
	UnsupportedJoin {
		how: String,
	},

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	#[error("delimited text error: {message}")]
	Delimited {
		message: String,
	},
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::ColumnTypesRequired
			| Error::NoColumns
			| Error::NoData
			| Error::ColumnCountMismatch {
				..
			}
			| Error::RowCountMismatch {
				..
			}
			| Error::MissingColumnType {
				..
			}
			| Error::TypeMismatch {
				..
			}
			| Error::DuplicateColumn {
				..
			}
			| Error::RowWidthMismatch {
				..
			}
			| Error::EmptyInput
			| Error::UnterminatedQuote {
				..
			}
			| Error::TextAfterQuote {
				..
			}
			| Error::EmptyRenameMap => ErrorKind::Validation,
			Error::ColumnNotFound {
				..
			}
			| Error::RenameColumnsNotPresent => ErrorKind::Lookup,
			Error::State(_) => ErrorKind::State,
			Error::Duplicate {
				..
			} => ErrorKind::Duplicate,
			Error::UnsupportedJoin {
				..
			} => ErrorKind::Unsupported,
			Error::Io(_)
			| Error::Delimited {
				..
			} => ErrorKind::Io,
		}
	}

	/// Stable diagnostic code, suitable for matching in logs and tests.
	pub fn code(&self) -> &'static str {
		match self {
			Error::ColumnTypesRequired => "TABLE_001",
			Error::NoColumns => "TABLE_002",
			Error::NoData => "TABLE_003",
			Error::ColumnCountMismatch {
				..
			} => "TABLE_004",
			Error::RowCountMismatch {
				..
			} => "TABLE_005",
			Error::MissingColumnType {
				..
			} => "TABLE_006",
			Error::TypeMismatch {
				..
			} => "TABLE_007",
			Error::DuplicateColumn {
				..
			} => "TABLE_008",
			Error::ColumnNotFound {
				..
			} => "TABLE_009",
			Error::EmptyRenameMap => "RENAME_001",
			Error::RenameColumnsNotPresent => "RENAME_002",
			Error::UnsupportedJoin {
				..
			} => "JOIN_001",
			Error::RowWidthMismatch {
				..
			} => "INGEST_001",
			Error::EmptyInput => "INGEST_002",
			Error::UnterminatedQuote {
				..
			} => "INGEST_003",
			Error::TextAfterQuote {
				..
			} => "INGEST_004",
			Error::State(_) => "RUNTIME_001",
			Error::Duplicate {
				..
			} => "SET_001",
			Error::Io(_) => "IO_001",
			Error::Delimited {
				..
			} => "IO_002",
		}
	}

	pub fn state(message: impl Into<String>) -> Self {
		Error::State(message.into())
	}
}
