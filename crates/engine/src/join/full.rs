// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_collection::Set;
use tabula_type::Value;
use tracing::instrument;

use super::{
	common::{JoinSide, RowPair},
	left,
};

/// The left join, followed by every right row whose key appears nowhere in
/// the left key column, in right order.
#[instrument(name = "join::full", level = "trace", skip_all)]
pub(crate) fn pairs(left_side: &JoinSide, right_side: &JoinSide) -> Vec<RowPair> {
	let mut result = left::pairs(left_side, right_side);

	let left_keys: Set<Value> = (0..left_side.row_count()).filter_map(|l| left_side.key_at(l)).collect();

	for r in 0..right_side.row_count() {
		let present = right_side.key_at(r).is_some_and(|key| left_keys.has(&key));
		if !present {
			result.push((None, Some(r)));
		}
	}
	result
}
