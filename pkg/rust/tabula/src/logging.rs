// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{Error, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a global `tracing` subscriber for applications embedding Tabula.
///
/// Without an explicit filter the `RUST_LOG` environment variable is used,
/// falling back to `info`.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	filter: Option<String>,
	json: bool,
	ansi: bool,
	target: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			filter: None,
			json: false,
			ansi: true,
			target: true,
		}
	}

	/// Filter directives such as `"debug"` or `"tabula_engine=trace,info"`.
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = Some(filter.into());
		self
	}

	pub fn with_json(mut self, json: bool) -> Self {
		self.json = json;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn with_target(mut self, target: bool) -> Self {
		self.target = target;
		self
	}

	fn env_filter(&self) -> Result<EnvFilter> {
		match &self.filter {
			Some(directives) => EnvFilter::try_new(directives)
				.map_err(|err| Error::state(format!("invalid tracing filter '{directives}': {err}"))),
			None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
		}
	}

	/// Installs the subscriber. Fails if the filter does not parse or a
	/// global subscriber is already set.
	pub fn init(self) -> Result<()> {
		let filter = self.env_filter()?;
		let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(self.ansi).with_target(self.target);

		let result = if self.json {
			builder.json().try_init()
		} else {
			builder.try_init()
		};

		result.map_err(|err| Error::state(format!("failed to install tracing subscriber: {err}")))
	}
}
