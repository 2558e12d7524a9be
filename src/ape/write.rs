#[cfg(feature = "ape")]
use crate::ape::tag::ape_tag::ApeTagRef;
use crate::error::{AudioMetaError, Result};
#[cfg(feature = "id3v1")]
use crate::id3::v1::tag::Id3v1TagRef;
use crate::types::tag::{Tag, TagType};

use std::fs::File;

#[allow(unused_variables)]
pub(crate) fn write_to(data: &mut File, tag: &Tag) -> Result<()> {
	match tag.tag_type() {
		#[cfg(feature = "ape")]
		TagType::Ape => Into::<ApeTagRef>::into(tag).write_to(data),
		#[cfg(feature = "id3v1")]
		TagType::Id3v1 => Into::<Id3v1TagRef>::into(tag).write_to(data),
		// ID3v2 is read for data preservation, but the format has no canonical way to
		// write one back without clashing with the MAC header/APE footer placement.
		_ => Err(AudioMetaError::UnsupportedTag),
	}
}
