//! DFF (`.dff`, Philips DSDIFF) specific items
//!
//! ## File notes
//!
//! DSDIFF is a big-endian IFF-style chunk format (`FRM8`/`PROP`/`DSD `/...), with a
//! `foobar2000`/`dBpoweramp`-style `ID3 ` chunk used as the de facto tagging convention,
//! since the format has no native text tagging of its own.
mod properties;
mod read;
pub(crate) mod write;

pub use properties::DffProperties;

#[cfg(feature = "id3v2")]
use crate::id3::v2::tag::Id3v2Tag;
use crate::error::Result;
use crate::tag_utils::tag_methods;
use crate::types::file::{AudioFile, FileType, TaggedFile};
use crate::types::properties::FileProperties;
use crate::types::tag::{Tag, TagType};

use std::io::{Read, Seek};

/// A DFF (DSDIFF) file
pub struct DffFile {
	#[cfg(feature = "id3v2")]
	/// An ID3v2 tag
	pub(crate) id3v2_tag: Option<Id3v2Tag>,
	/// The file's audio properties
	pub(crate) properties: DffProperties,
}

impl From<DffFile> for TaggedFile {
	#[allow(unused_mut)]
	fn from(input: DffFile) -> Self {
		let mut tags = Vec::<Option<Tag>>::with_capacity(1);

		#[cfg(feature = "id3v2")]
		tags.push(input.id3v2_tag.map(Into::into));

		Self {
			ty: FileType::Dff,
			properties: FileProperties::from(input.properties),
			tags: tags.into_iter().flatten().collect(),
		}
	}
}

impl AudioFile for DffFile {
	type Properties = DffProperties;

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
		#[cfg(feature = "id3v2")]
		return self.id3v2_tag.is_some();

		false
	}

	fn contains_tag_type(&self, tag_type: &TagType) -> bool {
		match tag_type {
			#[cfg(feature = "id3v2")]
			TagType::Id3v2 => self.id3v2_tag.is_some(),
			_ => false,
		}
	}
}

impl DffFile {
	tag_methods! {
		#[cfg(feature = "id3v2")];
		ID3v2, id3v2_tag, Id3v2Tag
	}
}
