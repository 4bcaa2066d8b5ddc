// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod table;

pub use table::{ColumnData, ColumnTypes, Table, TableBuilder, TableRows};
