// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use super::common::{JoinSide, RowPair, build_index};

/// Driven by the right table: each right row pairs with its matching left rows
/// in left order, or once with an absent left side.
#[instrument(name = "join::right", level = "trace", skip_all)]
pub(crate) fn pairs(left: &JoinSide, right: &JoinSide) -> Vec<RowPair> {
	let index = build_index(left);

	let mut result = Vec::with_capacity(right.row_count());
	for r in 0..right.row_count() {
		match right.key_at(r).and_then(|key| index.get(&key)) {
			Some(matches) => result.extend(matches.iter().map(|&l| (Some(l), Some(r)))),
			None => result.push((None, Some(r))),
		}
	}
	result
}
