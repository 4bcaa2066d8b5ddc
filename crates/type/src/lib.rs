// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Scalar values, column type tags and the error type shared by every Tabula crate.

pub mod error;
pub mod value;

pub use error::{Error, ErrorKind};
pub use value::{GetType, OrderedF64, OrderedFloatError, Type, Value};

/// Result type alias used throughout Tabula.
pub type Result<T> = std::result::Result<T, Error>;
