// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use super::common::{JoinSide, RowPair, build_index};

/// One pair per (left row, matching right row); unmatched left rows are dropped.
#[instrument(name = "join::inner", level = "trace", skip_all)]
pub(crate) fn pairs(left: &JoinSide, right: &JoinSide) -> Vec<RowPair> {
	let index = build_index(right);

	let mut result = Vec::new();
	for l in 0..left.row_count() {
		let Some(key) = left.key_at(l) else {
			continue;
		};
		if let Some(matches) = index.get(&key) {
			result.extend(matches.iter().map(|&r| (Some(l), Some(r))));
		}
	}
	result
}
