// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Compute pool for CPU-bound work, backed by a dedicated rayon thread pool.

use std::{fmt, sync::Arc};

use rayon::{ThreadPool, ThreadPoolBuilder};
use tabula_type::{Error, Result};
use tracing::debug;

struct Inner {
	pool: ThreadPool,
	name: String,
}

/// A named pool of worker threads.
///
/// Cloning is cheap; all clones share the same threads. The threads are
/// joined once the last clone is dropped.
#[derive(Clone)]
pub struct ComputePool {
	inner: Arc<Inner>,
}

impl ComputePool {
	/// Creates a pool with `threads` workers named `{name}-{i}`. A thread
	/// count of zero is raised to one.
	pub fn new(name: &str, threads: usize) -> Result<Self> {
		let threads = threads.max(1);
		let thread_prefix = name.to_string();
		let pool = ThreadPoolBuilder::new()
			.num_threads(threads)
			.thread_name(move |i| format!("{thread_prefix}-{i}"))
			.build()
			.map_err(|err| Error::state(format!("failed to build compute pool '{name}': {err}")))?;

		debug!(pool = name, threads, "compute pool started");

		Ok(Self {
			inner: Arc::new(Inner {
				pool,
				name: name.to_string(),
			}),
		})
	}

	/// Creates a pool with one worker per logical CPU.
	pub fn with_available_parallelism(name: &str) -> Result<Self> {
		Self::new(name, num_cpus::get())
	}

	pub fn name(&self) -> &str {
		&self.inner.name
	}

	pub fn threads(&self) -> usize {
		self.inner.pool.current_num_threads()
	}

	/// Executes a closure on the pool and blocks until it returns.
	///
	/// Parallel iterators and `rayon::scope` calls made inside `f` run on
	/// this pool's threads.
	pub fn install<R, F>(&self, f: F) -> R
	where
		R: Send,
		F: FnOnce() -> R + Send,
	{
		self.inner.pool.install(f)
	}
}

impl fmt::Debug for ComputePool {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComputePool").field("name", &self.inner.name).field("threads", &self.threads()).finish()
	}
}
