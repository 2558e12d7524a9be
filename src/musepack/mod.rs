//! Musepack (`.mpc`, `.mp+`) specific items
//!
//! ## File notes
//!
//! Musepack exists in two incompatible stream formats: the older frame-based SV7
//! (`MP+` magic, fixed 16-byte header) and the packet-based SV8 (`MPCK` magic, a stream
//! of `key + size + payload` packets, the first of which is normally a Stream Header).
//! Neither carries its own tagging convention; metadata is stored the same way it is in
//! `.ape` files, an `APEv2` tag (optionally preceded by an `ID3v1` tag) at the end of the
//! file.
mod properties;
mod read;
pub(crate) mod write;

pub use properties::{MusepackProperties, MusepackStreamVersion};

#[cfg(feature = "ape")]
use crate::ape::ApeTag;
#[cfg(feature = "id3v1")]
use crate::id3::v1::tag::Id3v1Tag;
use crate::error::Result;
use crate::tag_utils::tag_methods;
use crate::types::file::{AudioFile, FileType, TaggedFile};
use crate::types::properties::FileProperties;
use crate::types::tag::{Tag, TagType};

use std::io::{Read, Seek};

/// A Musepack file
pub struct MusepackFile {
	#[cfg(feature = "ape")]
	/// An APEv1/v2 tag
	pub(crate) ape_tag: Option<ApeTag>,
	#[cfg(feature = "id3v1")]
	/// An ID3v1 tag
	pub(crate) id3v1_tag: Option<Id3v1Tag>,
	/// The file's audio properties
	pub(crate) properties: MusepackProperties,
}

impl From<MusepackFile> for TaggedFile {
	#[allow(unused_mut)]
	fn from(input: MusepackFile) -> Self {
		let mut tags = Vec::<Option<Tag>>::with_capacity(2);

		#[cfg(feature = "ape")]
		tags.push(input.ape_tag.map(Into::into));
		#[cfg(feature = "id3v1")]
		tags.push(input.id3v1_tag.map(Into::into));

		Self {
			ty: FileType::Musepack,
			properties: FileProperties::from(input.properties),
			tags: tags.into_iter().flatten().collect(),
		}
	}
}

impl AudioFile for MusepackFile {
	type Properties = MusepackProperties;

	fn read_from<R>(reader: &mut R, read_properties: bool) -> Result<Self>
	where
		R: Read + Seek,
		Self: Sized,
	{
		read::read_from(reader, read_properties)
	}

	fn properties(&self) -> &Self::Properties {
		&self.properties
	}

	#[allow(unreachable_code)]
	fn contains_tag(&self) -> bool {
		#[cfg(feature = "ape")]
		return self.ape_tag.is_some();
		#[cfg(feature = "id3v1")]
		return self.id3v1_tag.is_some();

		false
	}

	fn contains_tag_type(&self, tag_type: &TagType) -> bool {
		match tag_type {
			#[cfg(feature = "ape")]
			TagType::Ape => self.ape_tag.is_some(),
			#[cfg(feature = "id3v1")]
			TagType::Id3v1 => self.id3v1_tag.is_some(),
			_ => false,
		}
	}
}

impl MusepackFile {
	tag_methods! {
		#[cfg(feature = "id3v1")];
		ID3v1, id3v1_tag, Id3v1Tag;
		#[cfg(feature = "ape")];
		APE, ape_tag, ApeTag
	}
}
