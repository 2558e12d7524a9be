//! An immutable, cheaply-shareable window over a byte buffer.

use crate::error::{AudioMetaError, Result};

use std::ops::Deref;
use std::sync::Arc;

/// An immutable, zero-copy-on-clone view over a byte range.
///
/// Many independent `ByteView`s may exist over the same backing allocation; none of them
/// can mutate it. This is the read side of the binary toolkit's `Builder`/`ByteView` pair
/// (spec §3.1, §3.5): a container holds one `ByteView` over its original bytes, and
/// sub-parsers slice it without copying.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ByteView {
	data: Arc<[u8]>,
	start: usize,
	end: usize,
}

impl ByteView {
	/// Wraps an owned buffer.
	pub fn new(data: Vec<u8>) -> Self {
		let data: Arc<[u8]> = Arc::from(data.into_boxed_slice());
		let end = data.len();

		Self {
			data,
			start: 0,
			end,
		}
	}

	/// Returns the number of bytes in this view.
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	/// Returns whether this view is empty.
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns the view as a byte slice.
	pub fn as_slice(&self) -> &[u8] {
		&self.data[self.start..self.end]
	}

	/// Reads a single byte at `index`, relative to this view.
	pub fn get(&self, index: usize) -> Option<u8> {
		self.as_slice().get(index).copied()
	}

	/// Returns a sub-view of `self`, sharing the same backing allocation.
	///
	/// # Errors
	///
	/// Returns [`AudioMetaError::OversizeField`] if the range falls outside of this view.
	pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
		if start > end || self.start + end > self.data.len() {
			return Err(AudioMetaError::OversizeField {
				field: "ByteView::slice",
				size: end as u64,
			});
		}

		Ok(Self {
			data: Arc::clone(&self.data),
			start: self.start + start,
			end: self.start + end,
		})
	}

	/// Searches for the first occurrence of `pattern` within this view.
	pub fn find(&self, pattern: &[u8]) -> Option<usize> {
		if pattern.is_empty() || pattern.len() > self.len() {
			return None;
		}

		self.as_slice()
			.windows(pattern.len())
			.position(|window| window == pattern)
	}

	/// Decodes the view's bytes under the given [`TextEncoding`](super::text::TextEncoding).
	pub fn to_string(&self, encoding: super::text::TextEncoding) -> Result<String> {
		super::text::decode_str(self.as_slice(), encoding)
	}
}

impl Deref for ByteView {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl From<Vec<u8>> for ByteView {
	fn from(data: Vec<u8>) -> Self {
		Self::new(data)
	}
}

impl From<&[u8]> for ByteView {
	fn from(data: &[u8]) -> Self {
		Self::new(data.to_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slices_share_backing_storage() {
		let view = ByteView::new(b"hello world".to_vec());
		let hello = view.slice(0, 5).unwrap();
		let world = view.slice(6, 11).unwrap();

		assert_eq!(hello.as_slice(), b"hello");
		assert_eq!(world.as_slice(), b"world");
	}

	#[test]
	fn slice_out_of_bounds_errors() {
		let view = ByteView::new(b"abc".to_vec());
		assert!(view.slice(0, 10).is_err());
	}

	#[test]
	fn find_locates_subpattern() {
		let view = ByteView::new(b"abcxyzdef".to_vec());
		assert_eq!(view.find(b"xyz"), Some(3));
		assert_eq!(view.find(b"nope"), None);
	}
}
