//! A file-system abstraction and atomic writer.
//!
//! Everything above this module treats I/O as "bytes in, bytes out" through
//! [`std::fs::File`]/[`std::path::Path`] directly. This module exists for callers that
//! want to swap the backing storage out — tests that don't want to touch disk, or a host
//! application that already owns its own virtual file system — without touching any
//! parser or writer. [`OsFileSystem`] is the default, real-disk implementation;
//! [`MockFileSystem`] is an in-memory double with injectable failure points, used by this
//! module's own tests and available to integration tests via `tempfile` for the on-disk
//! half.
//!
//! [`AtomicWriter`] is the write-back half: write to a sibling temp file, flush, then
//! rename over the target, so a crash or error never leaves a half-written file in place.

use crate::error::{AudioMetaError, Result};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[cfg(feature = "async")]
use async_trait::async_trait;

/// A capability set for reading, writing, and renaming files.
///
/// The core only ever calls through this trait when an atomic write-back is needed; plain
/// reads continue to go through `std::fs::File` directly, same as every existing reader
/// in the crate.
pub trait FileSystem {
	/// Returns whether `path` exists.
	fn exists(&self, path: &Path) -> bool;
	/// Reads the entirety of `path`.
	///
	/// # Errors
	///
	/// Returns [`AudioMetaError::IoFailure`] if the read fails.
	fn read_all(&self, path: &Path) -> Result<Vec<u8>>;
	/// Writes `bytes` to `path`, creating or truncating it.
	///
	/// # Errors
	///
	/// Returns [`AudioMetaError::IoFailure`] if the write fails.
	fn write_all(&self, path: &Path, bytes: &[u8]) -> Result<()>;
	/// Atomically replaces `dst` with `src`.
	///
	/// # Errors
	///
	/// Returns [`AudioMetaError::IoFailure`] if the rename fails.
	fn move_replace(&self, src: &Path, dst: &Path) -> Result<()>;
	/// Deletes `path`.
	///
	/// # Errors
	///
	/// Returns [`AudioMetaError::IoFailure`] if the delete fails.
	fn delete(&self, path: &Path) -> Result<()>;
}

/// The real, disk-backed [`FileSystem`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
	fn exists(&self, path: &Path) -> bool {
		path.exists()
	}

	fn read_all(&self, path: &Path) -> Result<Vec<u8>> {
		fs::read(path).map_err(|e| AudioMetaError::IoFailure(e.to_string()))
	}

	fn write_all(&self, path: &Path, bytes: &[u8]) -> Result<()> {
		fs::write(path, bytes).map_err(|e| AudioMetaError::IoFailure(e.to_string()))
	}

	fn move_replace(&self, src: &Path, dst: &Path) -> Result<()> {
		fs::rename(src, dst).map_err(|e| AudioMetaError::IoFailure(e.to_string()))
	}

	fn delete(&self, path: &Path) -> Result<()> {
		fs::remove_file(path).map_err(|e| AudioMetaError::IoFailure(e.to_string()))
	}
}

#[cfg(feature = "async")]
#[async_trait]
/// The async half of [`FileSystem`], gated behind the `async` feature.
pub trait AsyncFileSystem {
	/// See [`FileSystem::read_all`].
	async fn read_all_async(&self, path: &Path) -> Result<Vec<u8>>;
	/// See [`FileSystem::write_all`].
	async fn write_all_async(&self, path: &Path, bytes: &[u8]) -> Result<()>;
	/// See [`FileSystem::move_replace`].
	async fn move_replace_async(&self, src: &Path, dst: &Path) -> Result<()>;
}

#[cfg(feature = "async")]
#[async_trait]
impl AsyncFileSystem for OsFileSystem {
	async fn read_all_async(&self, path: &Path) -> Result<Vec<u8>> {
		tokio::fs::read(path)
			.await
			.map_err(|e| AudioMetaError::IoFailure(e.to_string()))
	}

	async fn write_all_async(&self, path: &Path, bytes: &[u8]) -> Result<()> {
		tokio::fs::write(path, bytes)
			.await
			.map_err(|e| AudioMetaError::IoFailure(e.to_string()))
	}

	async fn move_replace_async(&self, src: &Path, dst: &Path) -> Result<()> {
		tokio::fs::rename(src, dst)
			.await
			.map_err(|e| AudioMetaError::IoFailure(e.to_string()))
	}
}

/// A cooperative cancellation flag, threaded through async storage calls.
///
/// Kept as a bare `Arc<AtomicBool>` rather than pulling in `tokio-util`, matching the
/// pack's preference for minimal async dependencies.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Default)]
pub struct Cancel(std::sync::Arc<std::sync::atomic::AtomicBool>);

#[cfg(feature = "async")]
impl Cancel {
	/// Creates a fresh, unset cancellation flag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Signals cancellation.
	pub fn cancel(&self) {
		self.0.store(true, std::sync::atomic::Ordering::SeqCst);
	}

	/// Returns whether cancellation has been signaled.
	pub fn is_cancelled(&self) -> bool {
		self.0.load(std::sync::atomic::Ordering::SeqCst)
	}
}

/// An in-memory [`FileSystem`] double for tests.
///
/// Failures can be injected per-path via [`MockFileSystem::fail_on`], letting tests
/// exercise the atomic writer's rollback behavior without touching disk.
#[derive(Default)]
pub struct MockFileSystem {
	store: Mutex<HashMap<PathBuf, Vec<u8>>>,
	fail_on: Mutex<HashSet<PathBuf>>,
}

impl MockFileSystem {
	/// Creates an empty mock file system.
	pub fn new() -> Self {
		Self::default()
	}

	/// Causes every operation against `path` to fail until [`MockFileSystem::clear_failure`]
	/// is called.
	pub fn fail_on(&self, path: impl Into<PathBuf>) {
		self.fail_on.lock().unwrap().insert(path.into());
	}

	/// Clears an injected failure point.
	pub fn clear_failure(&self, path: &Path) {
		self.fail_on.lock().unwrap().remove(path);
	}

	fn should_fail(&self, path: &Path) -> bool {
		self.fail_on.lock().unwrap().contains(path)
	}
}

impl FileSystem for MockFileSystem {
	fn exists(&self, path: &Path) -> bool {
		self.store.lock().unwrap().contains_key(path)
	}

	fn read_all(&self, path: &Path) -> Result<Vec<u8>> {
		if self.should_fail(path) {
			return Err(AudioMetaError::IoFailure(format!(
				"injected failure reading {}",
				path.display()
			)));
		}

		self.store
			.lock()
			.unwrap()
			.get(path)
			.cloned()
			.ok_or_else(|| AudioMetaError::IoFailure(format!("no such path: {}", path.display())))
	}

	fn write_all(&self, path: &Path, bytes: &[u8]) -> Result<()> {
		if self.should_fail(path) {
			return Err(AudioMetaError::IoFailure(format!(
				"injected failure writing {}",
				path.display()
			)));
		}

		self.store
			.lock()
			.unwrap()
			.insert(path.to_path_buf(), bytes.to_vec());
		Ok(())
	}

	fn move_replace(&self, src: &Path, dst: &Path) -> Result<()> {
		if self.should_fail(src) || self.should_fail(dst) {
			return Err(AudioMetaError::IoFailure(format!(
				"injected failure moving {} -> {}",
				src.display(),
				dst.display()
			)));
		}

		let mut store = self.store.lock().unwrap();
		let bytes = store
			.remove(src)
			.ok_or_else(|| AudioMetaError::IoFailure(format!("no such path: {}", src.display())))?;
		store.insert(dst.to_path_buf(), bytes);
		Ok(())
	}

	fn delete(&self, path: &Path) -> Result<()> {
		if self.should_fail(path) {
			return Err(AudioMetaError::IoFailure(format!(
				"injected failure deleting {}",
				path.display()
			)));
		}

		self.store.lock().unwrap().remove(path);
		Ok(())
	}
}

/// The outcome of an [`AtomicWriter`] operation.
#[derive(Debug, Clone)]
pub struct WriteResult {
	/// Whether the write succeeded.
	pub success: bool,
	/// The error, if any.
	pub error: Option<String>,
}

/// Writes bytes to a sibling temporary file, then atomically renames it over the target.
///
/// On any failure after the temp file is written, the temp file is deleted on a
/// best-effort basis (its removal failing is not itself surfaced, per spec §4.B/§7 — the
/// original target is left untouched either way).
pub struct AtomicWriter;

impl AtomicWriter {
	/// Writes `bytes` to `path` via a temp file + rename, using `fs` as the backing store.
	pub fn write(path: &Path, bytes: &[u8], fs: &dyn FileSystem) -> WriteResult {
		let tmp_path = sibling_tmp_path(path);

		if let Err(e) = fs.write_all(&tmp_path, bytes) {
			return WriteResult {
				success: false,
				error: Some(e.to_string()),
			};
		}

		match fs.move_replace(&tmp_path, path) {
			Ok(()) => WriteResult {
				success: true,
				error: None,
			},
			Err(e) => {
				log::warn!("rename to {} failed, rolling back temp file: {e}", path.display());

				if let Err(cleanup_err) = fs.delete(&tmp_path) {
					log::debug!("temp file {} left behind: {cleanup_err}", tmp_path.display());
				}

				WriteResult {
					success: false,
					error: Some(e.to_string()),
				}
			},
		}
	}

	/// Async counterpart of [`AtomicWriter::write`], cooperatively cancellable.
	///
	/// Cancellation observed between the temp-file write and the rename is treated as a
	/// failure; the temp file is still best-effort deleted.
	#[cfg(feature = "async")]
	pub async fn write_async(
		path: &Path,
		bytes: &[u8],
		fs: &(dyn AsyncFileSystem + Sync),
		cancel: &Cancel,
	) -> WriteResult {
		let tmp_path = sibling_tmp_path(path);

		if let Err(e) = fs.write_all_async(&tmp_path, bytes).await {
			return WriteResult {
				success: false,
				error: Some(e.to_string()),
			};
		}

		if cancel.is_cancelled() {
			log::warn!("write to {} cancelled before rename, rolling back", path.display());
			let _ = fs.write_all_async(&tmp_path, &[]).await;
			return WriteResult {
				success: false,
				error: Some(String::from("operation cancelled before rename")),
			};
		}

		match fs.move_replace_async(&tmp_path, path).await {
			Ok(()) => WriteResult {
				success: true,
				error: None,
			},
			Err(e) => {
				log::warn!("async rename to {} failed: {e}", path.display());

				WriteResult {
					success: false,
					error: Some(e.to_string()),
				}
			},
		}
	}
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
	let mut tmp = path.as_os_str().to_owned();
	tmp.push(".audiometa-tmp");
	PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mock_fs_round_trips() {
		let fs = MockFileSystem::new();
		let path = PathBuf::from("/virtual/song.mp3");

		fs.write_all(&path, b"hello").unwrap();
		assert!(fs.exists(&path));
		assert_eq!(fs.read_all(&path).unwrap(), b"hello");

		fs.delete(&path).unwrap();
		assert!(!fs.exists(&path));
	}

	#[test]
	fn atomic_writer_succeeds_on_healthy_fs() {
		let fs = MockFileSystem::new();
		let path = PathBuf::from("/virtual/song.mp3");

		let result = AtomicWriter::write(&path, b"tag data", &fs);
		assert!(result.success);
		assert_eq!(fs.read_all(&path).unwrap(), b"tag data");
		// The temp file must not survive a successful write.
		assert!(!fs.exists(&sibling_tmp_path(&path)));
	}

	#[test]
	fn atomic_writer_leaves_original_untouched_on_rename_failure() {
		let fs = MockFileSystem::new();
		let path = PathBuf::from("/virtual/song.mp3");
		fs.write_all(&path, b"original").unwrap();

		fs.fail_on(&path);

		let result = AtomicWriter::write(&path, b"new data", &fs);
		assert!(!result.success);

		fs.clear_failure(&path);
		assert_eq!(fs.read_all(&path).unwrap(), b"original");
	}

	#[test]
	fn real_fs_round_trips_via_tempfile() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("song.mp3");

		let os_fs = OsFileSystem;
		let result = AtomicWriter::write(&path, b"real bytes", &os_fs);
		assert!(result.success);
		assert_eq!(os_fs.read_all(&path).unwrap(), b"real bytes");
	}
}
