//! Generic binary primitives shared by every container/tag engine.
//!
//! This module generalizes ad hoc byte-fiddling that used to be duplicated across
//! `id3::v2::util`, `iff::aiff::properties`, and the `mp3`/`mp4` readers into a single,
//! reusable toolkit: an immutable [`ByteView`], a scoped [`Builder`], endian/sync-safe/
//! extended-float codecs in [`primitives`], text codecs in [`text`], and CRC tables in
//! [`crc`].
//!
//! Existing call sites that already had correct, well-tested logic were left in place
//! rather than mechanically rewritten; new formats (DSF, DFF, Musepack, ASF) are built
//! directly on top of this module.

pub mod builder;
pub mod byte_view;
pub mod crc;
pub mod primitives;
pub mod text;

pub use builder::Builder;
pub use byte_view::ByteView;
