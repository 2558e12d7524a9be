use super::{ape_tag::ApeTagRef, item::ApeItemRef, read_ape_header};
use crate::ape::constants::APE_PREAMBLE;
use crate::error::Result;
use crate::id3::{find_id3v1, find_lyrics3v2};
use crate::types::item::ItemValueRef;

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, WriteBytesExt};

const APE_TAG_VERSION: u32 = 2000;

pub(super) fn write_to(file: &mut File, tag: &mut ApeTagRef) -> Result<()> {
	let file_end = file.seek(SeekFrom::End(0))?;
	let mut stream_len = file_end;

	// Preserve a trailing ID3v1 tag, since APE tags are conventionally written
	// immediately before it, not after.
	let (has_id3v1, _) = find_id3v1(file, false)?;

	if has_id3v1 {
		stream_len -= 128;

		file.seek(SeekFrom::Start(stream_len))?;

		let (has_lyrics3v2, lyrics3v2_size) = find_lyrics3v2(file)?;

		if has_lyrics3v2 {
			stream_len -= u64::from(lyrics3v2_size);
		}
	}

	// Look for an existing APE tag footer immediately before `stream_len`, removing it so
	// we don't leave a stale tag behind.
	if stream_len >= 32 {
		file.seek(SeekFrom::Start(stream_len - 32))?;

		let mut preamble = [0; 8];
		file.read_exact(&mut preamble)?;

		if preamble == *APE_PREAMBLE {
			file.seek(SeekFrom::Current(-8))?;
			let header = read_ape_header(file, true)?;
			stream_len -= u64::from(header.size);
		}
	}

	// Anything between `stream_len` and the original end of the file (an ID3v1 tag, a
	// Lyrics3v2 tag, or both) has to be preserved across the truncate/append below.
	let trailer_len = file_end - stream_len;
	let mut trailer = vec![0; trailer_len as usize];

	if trailer_len > 0 {
		file.seek(SeekFrom::Start(stream_len))?;
		file.read_exact(&mut trailer)?;
	}

	let mut item_bytes = Vec::new();
	let mut item_count = 0_u32;

	for item in &mut tag.items {
		write_item(&mut item_bytes, &item)?;
		item_count += 1;
	}

	let items_len = item_bytes.len() as u32;

	file.seek(SeekFrom::Start(stream_len))?;
	file.set_len(stream_len)?;
	file.seek(SeekFrom::Start(stream_len))?;

	write_ape_frame(
		file,
		APE_TAG_VERSION,
		items_len + 32,
		item_count,
		true,
		tag.read_only,
	)?;
	file.write_all(&item_bytes)?;
	write_ape_frame(
		file,
		APE_TAG_VERSION,
		items_len + 32,
		item_count,
		false,
		tag.read_only,
	)?;

	if trailer_len > 0 {
		file.write_all(&trailer)?;
	}

	Ok(())
}

#[allow(clippy::fn_params_excessive_bools)]
fn write_ape_frame<W: Write>(
	writer: &mut W,
	version: u32,
	size: u32,
	item_count: u32,
	is_header: bool,
	read_only: bool,
) -> Result<()> {
	writer.write_all(APE_PREAMBLE)?;
	writer.write_u32::<LittleEndian>(version)?;
	writer.write_u32::<LittleEndian>(size)?;
	writer.write_u32::<LittleEndian>(item_count)?;

	let mut flags = 0x8000_0000_u32; // tag contains a header
	if is_header {
		flags |= 0x2000_0000; // this item *is* the header
	}
	if read_only {
		flags |= 0x0000_0001;
	}

	writer.write_u32::<LittleEndian>(flags)?;
	writer.write_all(&[0; 8])?;

	Ok(())
}

fn write_item<W: Write>(writer: &mut W, item: &ApeItemRef) -> Result<()> {
	let (item_type, value_bytes): (u32, Vec<u8>) = match item.value {
		ItemValueRef::Text(text) => (0, text.as_bytes().to_vec()),
		ItemValueRef::Locator(locator) => (2, locator.as_bytes().to_vec()),
		ItemValueRef::Binary(binary) => (1, binary.to_vec()),
	};

	let mut flags = item_type << 1;

	if item.read_only {
		flags |= 1;
	}

	writer.write_u32::<LittleEndian>(value_bytes.len() as u32)?;
	writer.write_u32::<LittleEndian>(flags)?;
	writer.write_all(item.key.as_bytes())?;
	writer.write_all(&[0])?;
	writer.write_all(&value_bytes)?;

	Ok(())
}
