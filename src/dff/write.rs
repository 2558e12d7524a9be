use crate::error::{AudioMetaError, Result};
#[cfg(feature = "id3v2")]
use crate::id3::v2::tag::Id3v2TagRef;
#[allow(unused_imports)]
use crate::types::tag::{Tag, TagType};

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

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

	let mut id = [0; 4];
	data.read_exact(&mut id)?;

	if &id != b"FRM8" {
		return Err(AudioMetaError::Dff("File does not contain a valid FRM8 header"));
	}

	let frm8_size = data.read_u64::<BigEndian>()?;

	let mut form_type = [0; 4];
	data.read_exact(&mut form_type)?;

	if &form_type != b"DSD " {
		return Err(AudioMetaError::Dff("FRM8 chunk is not of form type \"DSD \""));
	}

	let end = 12 + frm8_size;

	// Find the existing `ID3 ` chunk, if any, falling back to the offset right after the
	// last chunk (where a new one should be appended).
	let mut id3_start = None;
	let mut insertion_point = end;

	loop {
		let pos = data.seek(SeekFrom::Current(0))?;

		if pos >= end {
			insertion_point = pos;
			break;
		}

		let mut chunk_id = [0; 4];
		if data.read_exact(&mut chunk_id).is_err() {
			insertion_point = pos;
			break;
		}

		let chunk_size = data.read_u64::<BigEndian>()?;
		let mut padded_size = chunk_size;

		if chunk_size % 2 != 0 {
			padded_size += 1;
		}

		if &chunk_id == b"ID3 " {
			id3_start = Some(pos);
			insertion_point = pos + 12 + padded_size;
			data.seek(SeekFrom::Start(insertion_point))?;
			continue;
		}

		data.seek(SeekFrom::Current(padded_size as i64))?;
	}

	let truncate_at = id3_start.unwrap_or(insertion_point);

	let mut tag_ref: Id3v2TagRef = tag.into();
	let id3v2_bytes = crate::id3::v2::write::build_tag(&mut tag_ref)?;

	data.seek(SeekFrom::Start(truncate_at))?;
	data.set_len(truncate_at)?;

	if !id3v2_bytes.is_empty() {
		data.write_all(b"ID3 ")?;
		data.write_u64::<BigEndian>(id3v2_bytes.len() as u64)?;
		data.write_all(&id3v2_bytes)?;

		if id3v2_bytes.len() % 2 != 0 {
			data.write_all(&[0])?;
		}
	}

	let new_file_len = data.seek(SeekFrom::Current(0))?;

	data.seek(SeekFrom::Start(4))?;
	data.write_u64::<BigEndian>(new_file_len - 12)?;

	Ok(())
}
