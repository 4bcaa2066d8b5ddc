// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use super::common::{JoinSide, RowPair, build_index};

#[instrument(name = "join::left", level = "trace", skip_all)]
pub(crate) fn pairs(left: &JoinSide, right: &JoinSide) -> Vec<RowPair> {
	let index = build_index(right);

	let mut result = Vec::with_capacity(left.row_count());
	for l in 0..left.row_count() {
		match left.key_at(l).and_then(|key| index.get(&key)) {
			Some(matches) => result.extend(matches.iter().map(|&r| (Some(l), Some(r)))),
			// Add unmatched left rows with undefined values for right columns
			None => result.push((Some(l), None)),
		}
	}
	result
}
