// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Operations that produce new tables: hash joins over two existing tables
//! and parallel ingestion of delimited text.

pub mod ingest;
pub mod join;

pub use ingest::{IngestConfig, ingest, ingest_on, parse_records, read_csv, read_csv_str};
pub use join::{JoinType, merge};
