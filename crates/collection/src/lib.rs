// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod set;

pub use set::{Set, to_set, to_slice};
