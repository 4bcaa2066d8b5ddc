// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	env, fs, io,
	path::{Path, PathBuf},
};

use uuid::Uuid;

/// A uniquely named directory under the system temp dir, removed on drop.
#[derive(Debug)]
pub struct TempDir {
	path: PathBuf,
}

impl TempDir {
	pub fn new(prefix: &str) -> io::Result<Self> {
		let path = env::temp_dir().join(format!("{prefix}-{}", Uuid::new_v4()));
		fs::create_dir(&path)?;
		Ok(Self {
			path,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Drop for TempDir {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.path);
	}
}

/// Runs `f` inside a fresh [`TempDir`]. The directory is gone afterwards,
/// also when `f` fails or panics on a failed assertion.
pub fn temp_dir<F, T, E>(f: F) -> Result<T, E>
where
	F: FnOnce(&Path) -> Result<T, E>,
	E: From<io::Error>,
{
	let dir = TempDir::new("tabula")?;
	f(dir.path())
}
