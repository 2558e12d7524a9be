//! A growable byte accumulator that drains into a [`ByteView`](super::ByteView).

use super::primitives::synch_u32;
use super::text::{encode_str, TextEncoding};
use super::ByteView;
use crate::error::Result;

/// A scoped, exclusive byte accumulator.
///
/// Mirrors the append operations the teacher's ID3v2 writer already performs by hand
/// (`id3::v2::write::frame`, `iff::wav::tag::write::create_riff_info`), generalized for
/// reuse by every writer in the crate. The backing `Vec` is released when the `Builder`
/// is dropped, same as any other owned buffer — there is no separate pool to manage.
#[derive(Debug, Default)]
pub struct Builder {
	buf: Vec<u8>,
}

impl Builder {
	/// Creates an empty `Builder`.
	pub fn new() -> Self {
		Self { buf: Vec::new() }
	}

	/// Creates a `Builder` with a pre-allocated capacity.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: Vec::with_capacity(capacity),
		}
	}

	/// Returns the number of bytes written so far.
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Returns whether nothing has been written yet.
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Appends a single byte.
	pub fn write_u8(&mut self, value: u8) -> &mut Self {
		self.buf.push(value);
		self
	}

	/// Appends `count` zero bytes.
	pub fn write_zeroes(&mut self, count: usize) -> &mut Self {
		self.buf.resize(self.buf.len() + count, 0);
		self
	}

	/// Appends another [`ByteView`] (or any byte slice) verbatim.
	pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
		self.buf.extend_from_slice(bytes);
		self
	}

	/// Appends a fixed-length string encoded under `encoding`.
	pub fn write_str(&mut self, value: &str, encoding: TextEncoding, terminated: bool) -> &mut Self {
		self.buf.extend(encode_str(value, encoding, terminated));
		self
	}

	/// Appends a sync-safe 32-bit integer (ID3v2.4 size fields).
	///
	/// # Errors
	///
	/// Returns an error if `value` cannot be represented in 28 bits (4 × 7-bit groups).
	pub fn write_synch_u32(&mut self, value: u32) -> Result<&mut Self> {
		let bytes = synch_u32(value)?;
		self.buf.extend_from_slice(&bytes.to_be_bytes());
		Ok(self)
	}

	/// Finalizes the builder into an immutable, shareable [`ByteView`].
	pub fn finish(self) -> ByteView {
		ByteView::new(self.buf)
	}
}

macro_rules! width_methods {
	($($read_name:ident, $write_name:ident => $ty:ty),+ $(,)?) => {
		impl Builder {
			$(
				#[doc = concat!("Appends a big-endian ", stringify!($ty))]
				pub fn $write_name(&mut self, value: $ty, little_endian: bool) -> &mut Self {
					if little_endian {
						self.buf.extend_from_slice(&value.to_le_bytes());
					} else {
						self.buf.extend_from_slice(&value.to_be_bytes());
					}

					self
				}
			)+
		}
	}
}

width_methods!(
	read_u16, write_u16 => u16,
	read_u32, write_u32 => u32,
	read_u64, write_u64 => u64,
);

/// Appends a 24-bit big/little-endian integer, the low/high 8 bits being zero-extended.
impl Builder {
	pub fn write_u24(&mut self, value: u32, little_endian: bool) -> &mut Self {
		let bytes = value.to_be_bytes();
		// `value` is expected to already fit in 24 bits; the top byte is dropped.
		let [_, b1, b2, b3] = bytes;

		if little_endian {
			self.buf.extend_from_slice(&[b3, b2, b1]);
		} else {
			self.buf.extend_from_slice(&[b1, b2, b3]);
		}

		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn appends_and_finishes() {
		let mut builder = Builder::new();
		builder
			.write_bytes(b"ID3")
			.write_u8(4)
			.write_u32(0, false)
			.write_zeroes(2);

		let view = builder.finish();
		assert_eq!(view.as_slice(), &[b'I', b'D', b'3', 4, 0, 0, 0, 0, 0, 0]);
	}

	#[test]
	fn u24_round_trips_both_endians() {
		let mut be = Builder::new();
		be.write_u24(0x01_02_03, false);
		assert_eq!(be.finish().as_slice(), &[0x01, 0x02, 0x03]);

		let mut le = Builder::new();
		le.write_u24(0x01_02_03, true);
		assert_eq!(le.finish().as_slice(), &[0x03, 0x02, 0x01]);
	}

	#[test]
	fn synch_u32_rejects_oversize() {
		let mut builder = Builder::new();
		assert!(builder.write_synch_u32(u32::MAX).is_err());
	}
}
