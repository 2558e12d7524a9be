use crate::error::{AudioMetaError, Result};
#[cfg(feature = "id3v2")]
use crate::id3::v2::tag::Id3v2TagRef;
#[allow(unused_imports)]
use crate::types::tag::{Tag, TagType};

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

#[allow(unused_variables)]
pub(crate) fn write_to(data: &mut File, tag: &Tag) -> Result<()> {
	match tag.tag_type() {
		#[cfg(feature = "id3v2")]
		TagType::Id3v2 => write_id3v2(data, tag),
		_ => Err(AudioMetaError::UnsupportedTag),
	}
}

#[cfg(feature = "id3v2")]
fn write_id3v2(data: &mut File, tag: &Tag) -> Result<()> {
	data.seek(SeekFrom::Start(0))?;

	let mut header = [0; 4];
	data.read_exact(&mut header)?;

	if &header != b"DSD " {
		return Err(AudioMetaError::Dsf("File does not contain a valid DSD header"));
	}

	let _header_size = data.read_u64::<LittleEndian>()?;
	let total_size = data.read_u64::<LittleEndian>()?;
	let metadata_offset = data.read_u64::<LittleEndian>()?;

	let audio_end = if metadata_offset > 0 {
		metadata_offset
	} else {
		total_size
	};

	let mut tag_ref: Id3v2TagRef = tag.into();
	let id3v2_bytes = crate::id3::v2::write::build_tag(&mut tag_ref)?;

	data.seek(SeekFrom::Start(audio_end))?;
	data.set_len(audio_end)?;

	let new_metadata_offset = if id3v2_bytes.is_empty() { 0 } else { audio_end };
	let new_total_size = audio_end + id3v2_bytes.len() as u64;

	if !id3v2_bytes.is_empty() {
		data.write_all(&id3v2_bytes)?;
	}

	data.seek(SeekFrom::Start(12))?;
	data.write_u64::<LittleEndian>(new_total_size)?;
	data.write_u64::<LittleEndian>(new_metadata_offset)?;

	Ok(())
}
