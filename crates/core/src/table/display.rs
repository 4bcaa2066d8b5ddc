// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use unicode_width::UnicodeWidthStr;

use super::Table;

/// A cell as printed: control characters escaped, width in terminal columns.
struct Cell {
	text: String,
	width: usize,
}

impl Cell {
	fn new(raw: &str) -> Self {
		let mut text = String::with_capacity(raw.len());
		for c in raw.chars() {
			match c {
				'\n' => text.push_str("\\n"),
				'\r' => text.push_str("\\r"),
				'\t' => text.push_str("\\t"),
				c => text.push(c),
			}
		}
		let width = text.width();
		Self {
			text,
			width,
		}
	}
}

fn write_rule(f: &mut Formatter<'_>, widths: &[usize]) -> fmt::Result {
	f.write_str("+")?;
	for width in widths {
		write!(f, "{}+", "-".repeat(width + 2))?;
	}
	writeln!(f)
}

fn write_line(f: &mut Formatter<'_>, cells: &[Cell], widths: &[usize]) -> fmt::Result {
	f.write_str("|")?;
	for (cell, width) in cells.iter().zip(widths) {
		write!(f, " {}{:pad$} |", cell.text, "", pad = width - cell.width)?;
	}
	writeln!(f)
}

impl Display for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let header: Vec<Cell> = self.lock_names().iter().map(|n| Cell::new(n)).collect();
		let body: Vec<Vec<Cell>> = (0..self.row_count)
			.map(|row| self.columns.iter().map(|c| Cell::new(&c.as_string(row))).collect())
			.collect();

		let mut widths: Vec<usize> = header.iter().map(|cell| cell.width).collect();
		for row in &body {
			for (width, cell) in widths.iter_mut().zip(row) {
				*width = (*width).max(cell.width);
			}
		}

		write_rule(f, &widths)?;
		write_line(f, &header, &widths)?;
		write_rule(f, &widths)?;
		for row in &body {
			write_line(f, row, &widths)?;
		}
		if !body.is_empty() {
			write_rule(f, &widths)?;
		}

		write!(f, "[{} rows x {} columns]", self.row_count, self.columns.len())
	}
}
