//! Minimal ASF (Advanced Systems Format, `.wma`/`.wmv`/`.asf`) bindings.
//!
//! Per spec §1, ASF is listed as a supported format but is not one of the eight formats
//! this core details a full engine for. This module round-trips the Content Description
//! Object's five string fields (Title, Author, Copyright, Description, Rating) and the
//! Extended Content Description Object's name/value pairs, and preserves every other
//! top-level header object (including the File Properties Object, used only to surface
//! duration/bitrate) bitwise. It does not decode stream properties, codec lists, or any
//! other ASF object in full detail.

use crate::error::{AudioMetaError, Result};
use crate::types::file::{AudioFile, FileType, TaggedFile};
use crate::types::item::{ItemKey, ItemValue, TagItem};
use crate::types::properties::FileProperties;
use crate::types::tag::{Accessor, Tag, TagType};

use std::io::{Read, Seek, SeekFrom, Write};
use std::time::Duration;

/// A 16-byte ASF object GUID, stored in the mixed-endian form the bytes appear in on
/// disk (no byte swapping — objects are only ever compared, never interpreted).
pub type Guid = [u8; 16];

const HEADER_OBJECT: Guid = [
	0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];
const FILE_PROPERTIES_OBJECT: Guid = [
	0xA1, 0xDC, 0xAB, 0x8C, 0x47, 0xA9, 0xCF, 0x11, 0x8E, 0xE4, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65,
];
const CONTENT_DESCRIPTION_OBJECT: Guid = [
	0x33, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];
const EXTENDED_CONTENT_DESCRIPTION_OBJECT: Guid = [
	0x40, 0xA4, 0xD0, 0xD2, 0x07, 0xE3, 0xD2, 0x11, 0x97, 0xF0, 0x00, 0xA0, 0xC9, 0x5E, 0xA8, 0x50,
];

/// An opaque, unparsed top-level ASF header object, preserved verbatim on render.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawObject {
	guid: Guid,
	data: Vec<u8>,
}

/// An ASF Content Description / Extended Content Description tag.
///
/// ## Supported file types
///
/// * [`FileType::Asf`]
#[derive(Default, Debug, PartialEq, Clone)]
pub struct AsfTag {
	/// The five Content Description Object fields, in file order.
	pub(crate) content_description: Vec<(&'static str, String)>,
	/// Extended Content Description Object name/value pairs (`WM/*` keys and others).
	pub(crate) extended: Vec<(String, String)>,
}

const CONTENT_DESCRIPTION_FIELDS: [&str; 5] =
	["Title", "Author", "Copyright", "Description", "Rating"];

macro_rules! impl_accessor {
	($($name:ident, $key:literal;)+) => {
		paste::paste! {
			impl Accessor for AsfTag {
				$(
					fn $name(&self) -> Option<&str> {
						self.get($key)
					}

					fn [<set_ $name>](&mut self, value: String) {
						self.set(String::from($key), value)
					}

					fn [<remove_ $name>](&mut self) {
						self.remove($key)
					}
				)+
			}
		}
	}
}

impl_accessor!(
	artist, "Author";
	title,  "Title";
);

impl AsfTag {
	/// Gets a value from either the Content Description or Extended Content Description
	/// fields by its ASF key name.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.content_description
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(key))
			.map(|(_, v)| v.as_str())
			.or_else(|| {
				self.extended
					.iter()
					.find(|(k, _)| k.eq_ignore_ascii_case(key))
					.map(|(_, v)| v.as_str())
			})
	}

	/// Sets a value by ASF key name.
	///
	/// One of the five fixed Content Description fields if `key` names one
	/// (case-insensitively), otherwise an Extended Content Description entry.
	pub fn set(&mut self, key: String, value: String) {
		if let Some(&fixed) = CONTENT_DESCRIPTION_FIELDS
			.iter()
			.find(|f| f.eq_ignore_ascii_case(&key))
		{
			if let Some(entry) = self
				.content_description
				.iter_mut()
				.find(|(k, _)| *k == fixed)
			{
				entry.1 = value;
			} else {
				self.content_description.push((fixed, value));
			}
			return;
		}

		if let Some(entry) = self.extended.iter_mut().find(|(k, _)| *k == key) {
			entry.1 = value;
		} else {
			self.extended.push((key, value));
		}
	}

	/// Removes a value by ASF key name.
	pub fn remove(&mut self, key: &str) {
		self.content_description.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
		self.extended.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
	}
}

impl From<AsfTag> for Tag {
	fn from(input: AsfTag) -> Self {
		let mut tag = Tag::new(TagType::Asf);

		for (key, value) in input.content_description {
			let item_key = ItemKey::from_key(TagType::Asf, key);
			tag.insert_item_unchecked(TagItem::new(item_key, ItemValue::Text(value)));
		}

		for (key, value) in input.extended {
			let item_key = ItemKey::from_key(TagType::Asf, &key);
			tag.insert_item_unchecked(TagItem::new(item_key, ItemValue::Text(value)));
		}

		tag
	}
}

impl From<&Tag> for AsfTag {
	fn from(input: &Tag) -> Self {
		let mut asf_tag = AsfTag::default();

		for item in input.items() {
			if let ItemValue::Text(value) = item.value() {
				if let Some(key) = item.key().map_key(TagType::Asf, false) {
					asf_tag.set(key.to_string(), value.clone());
				}
			}
		}

		asf_tag
	}
}

/// An ASF file.
pub struct AsfFile {
	/// Every top-level header object except Content Description / Extended Content
	/// Description, preserved bitwise for round-trip.
	raw_objects: Vec<RawObject>,
	/// The parsed tag, if a Content Description or Extended Content Description object
	/// was present.
	pub(crate) tag: Option<AsfTag>,
	pub(crate) properties: FileProperties,
}

fn read_guid<R: Read>(reader: &mut R) -> Result<Guid> {
	let mut guid = [0u8; 16];
	reader.read_exact(&mut guid)?;
	Ok(guid)
}

fn read_u64_le<R: Read>(reader: &mut R) -> Result<u64> {
	let mut buf = [0u8; 8];
	reader.read_exact(&mut buf)?;
	Ok(u64::from_le_bytes(buf))
}

fn read_u32_le<R: Read>(reader: &mut R) -> Result<u32> {
	let mut buf = [0u8; 4];
	reader.read_exact(&mut buf)?;
	Ok(u32::from_le_bytes(buf))
}

fn read_u16_le<R: Read>(reader: &mut R) -> Result<u16> {
	let mut buf = [0u8; 2];
	reader.read_exact(&mut buf)?;
	Ok(u16::from_le_bytes(buf))
}

// 100-nanosecond units, as used throughout ASF's File Properties Object.
fn hundred_ns_to_duration(value: u64) -> Duration {
	Duration::from_nanos(value.saturating_mul(100))
}

fn parse_utf16le_field<R: Read>(reader: &mut R, byte_len: usize) -> Result<String> {
	let mut buf = vec![0u8; byte_len];
	reader.read_exact(&mut buf)?;
	crate::binary::text::decode_str(&buf, crate::binary::text::TextEncoding::Utf16Be)
		.or_else(|_| Ok(String::from_utf8_lossy(&buf).into_owned()))
		.map(|s| s.trim_end_matches('\u{0}').to_string())
}

fn parse_content_description(data: &[u8]) -> Result<Vec<(&'static str, String)>> {
	let mut reader = data;
	let mut lengths = [0u16; 5];
	for length in lengths.iter_mut() {
		*length = read_u16_le(&mut reader)?;
	}

	let mut fields = Vec::with_capacity(5);
	for (name, length) in CONTENT_DESCRIPTION_FIELDS.iter().zip(lengths.iter()) {
		let value = parse_utf16le_field(&mut reader, *length as usize)?;
		fields.push((*name, value));
	}

	Ok(fields)
}

fn parse_extended_content_description(data: &[u8]) -> Result<Vec<(String, String)>> {
	let mut reader = data;
	let count = read_u16_le(&mut reader)?;

	let mut pairs = Vec::with_capacity(count as usize);
	for _ in 0..count {
		let name_len = read_u16_le(&mut reader)? as usize;
		let name = parse_utf16le_field(&mut reader, name_len)?;

		let value_type = read_u16_le(&mut reader)?;
		let value_len = read_u16_le(&mut reader)? as usize;

		let value = match value_type {
			0 => parse_utf16le_field(&mut reader, value_len)?,
			_ => {
				let mut raw = vec![0u8; value_len];
				reader.read_exact(&mut raw)?;
				crate::binary::hex::encode(&raw)
			},
		};

		pairs.push((name, value));
	}

	Ok(pairs)
}

fn parse_file_properties(data: &[u8]) -> Result<FileProperties> {
	let mut reader = data;
	// file id (16) + file size (8) + creation date (8) + data packets (8)
	let mut skip = [0u8; 40];
	reader.read_exact(&mut skip)?;

	let play_duration = read_u64_le(&mut reader)?;
	let _send_duration = read_u64_le(&mut reader)?;
	let _preroll = read_u64_le(&mut reader)?;
	let _flags = read_u32_le(&mut reader)?;
	let _min_packet_size = read_u32_le(&mut reader)?;
	let _max_packet_size = read_u32_le(&mut reader)?;
	let max_bitrate = read_u32_le(&mut reader)?;

	Ok(FileProperties::new(
		hundred_ns_to_duration(play_duration),
		Some(max_bitrate / 1000),
		None,
		None,
		None,
	))
}

pub(crate) fn read_from<R>(data: &mut R, read_properties: bool) -> Result<AsfFile>
where
	R: Read + Seek,
{
	let mut magic = [0u8; 16];
	data.read_exact(&mut magic)?;
	if magic != HEADER_OBJECT {
		return Err(AudioMetaError::BadMagic {
			expected: "ASF Header Object GUID",
			found: crate::binary::hex::encode(&magic),
		});
	}

	let header_size = read_u64_le(data)?;
	let object_count = read_u32_le(data)?;
	data.seek(SeekFrom::Current(2))?; // reserved (1) + reserved (1)

	let header_end = 24 + header_size;

	let mut tag = AsfTag::default();
	let mut found_tag = false;
	let mut properties = FileProperties::default();
	let mut raw_objects = Vec::new();

	for _ in 0..object_count {
		let position = data.seek(SeekFrom::Current(0))?;
		if position >= header_end {
			break;
		}

		let guid = read_guid(data)?;
		let object_size = read_u64_le(data)?;
		if object_size < 24 {
			return Err(AudioMetaError::TruncatedInput);
		}

		let payload_len = (object_size - 24) as usize;
		let mut payload = vec![0u8; payload_len];
		data.read_exact(&mut payload)?;

		match guid {
			CONTENT_DESCRIPTION_OBJECT => {
				tag.content_description = parse_content_description(&payload)?;
				found_tag = true;
			},
			EXTENDED_CONTENT_DESCRIPTION_OBJECT => {
				tag.extended = parse_extended_content_description(&payload)?;
				found_tag = true;
			},
			FILE_PROPERTIES_OBJECT if read_properties => {
				properties = parse_file_properties(&payload)?;
				raw_objects.push(RawObject {
					guid,
					data: payload,
				});
			},
			_ => raw_objects.push(RawObject {
				guid,
				data: payload,
			}),
		}
	}

	Ok(AsfFile {
		raw_objects,
		tag: found_tag.then(|| tag),
		properties,
	})
}

fn encode_utf16le_field(value: &str) -> Vec<u8> {
	let mut encoded =
		crate::binary::text::encode_str(value, crate::binary::text::TextEncoding::Utf16Be, false);
	encoded.push(0);
	encoded.push(0);
	encoded
}

fn render_content_description(tag: &AsfTag) -> Vec<u8> {
	let values: Vec<Vec<u8>> = CONTENT_DESCRIPTION_FIELDS
		.iter()
		.map(|field| {
			encode_utf16le_field(
				tag.content_description
					.iter()
					.find(|(k, _)| k == field)
					.map(|(_, v)| v.as_str())
					.unwrap_or(""),
			)
		})
		.collect();

	let mut out = Vec::new();
	for value in &values {
		out.extend_from_slice(&(value.len() as u16).to_le_bytes());
	}
	for value in values {
		out.extend_from_slice(&value);
	}

	out
}

fn render_extended_content_description(tag: &AsfTag) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(&(tag.extended.len() as u16).to_le_bytes());

	for (name, value) in &tag.extended {
		let name_bytes = encode_utf16le_field(name);
		let value_bytes = encode_utf16le_field(value);

		out.extend_from_slice(&(name_bytes.len() as u16).to_le_bytes());
		out.extend_from_slice(&name_bytes);
		out.extend_from_slice(&0u16.to_le_bytes()); // value type: unicode string
		out.extend_from_slice(&(value_bytes.len() as u16).to_le_bytes());
		out.extend_from_slice(&value_bytes);
	}

	out
}

pub(crate) fn write_to<W>(writer: &mut W, file: &AsfFile, tag: &AsfTag) -> Result<()>
where
	W: Write,
{
	let content_description = render_content_description(tag);
	let extended_content_description = render_extended_content_description(tag);

	let mut object_count = file.raw_objects.len() as u32 + 2;
	let mut body = Vec::new();

	body.extend_from_slice(&CONTENT_DESCRIPTION_OBJECT);
	body.extend_from_slice(&(24 + content_description.len() as u64).to_le_bytes());
	body.extend_from_slice(&content_description);

	body.extend_from_slice(&EXTENDED_CONTENT_DESCRIPTION_OBJECT);
	body.extend_from_slice(&(24 + extended_content_description.len() as u64).to_le_bytes());
	body.extend_from_slice(&extended_content_description);

	for object in &file.raw_objects {
		body.extend_from_slice(&object.guid);
		body.extend_from_slice(&(24 + object.data.len() as u64).to_le_bytes());
		body.extend_from_slice(&object.data);
	}

	if object_count == 0 {
		object_count = 2;
	}

	writer.write_all(&HEADER_OBJECT)?;
	writer.write_all(&(24 + 6 + body.len() as u64).to_le_bytes())?;
	writer.write_all(&object_count.to_le_bytes())?;
	writer.write_all(&[0, 0])?;
	writer.write_all(&body)?;

	Ok(())
}

/// Rewrites an ASF file's header objects with a new Content Description / Extended
/// Content Description pair built from `tag`, preserving every other header object and
/// the entire data section bitwise.
pub(crate) fn write_to_file(file: &mut std::fs::File, tag: &Tag) -> Result<()> {
	file.seek(SeekFrom::Start(0))?;

	let asf_file = read_from(file, false)?;

	let asf_tag = AsfTag::from(tag);

	let mut new_header = Vec::new();
	write_to(&mut new_header, &asf_file, &asf_tag)?;

	let mut tail = Vec::new();
	file.read_to_end(&mut tail)?;

	file.seek(SeekFrom::Start(0))?;
	file.set_len(new_header.len() as u64 + tail.len() as u64)?;
	file.write_all(&new_header)?;
	file.write_all(&tail)?;

	Ok(())
}

impl From<AsfFile> for TaggedFile {
	fn from(input: AsfFile) -> Self {
		Self {
			ty: FileType::Asf,
			properties: input.properties.clone(),
			tags: input.tag.map(Into::into).into_iter().collect(),
		}
	}
}

impl AudioFile for AsfFile {
	type Properties = FileProperties;

	fn read_from<R>(reader: &mut R, read_properties: bool) -> Result<Self>
	where
		R: Read + Seek,
		Self: Sized,
	{
		read_from(reader, read_properties)
	}

	fn properties(&self) -> &Self::Properties {
		&self.properties
	}

	fn contains_tag(&self) -> bool {
		self.tag.is_some()
	}

	fn contains_tag_type(&self, tag_type: &TagType) -> bool {
		tag_type == &TagType::Asf && self.tag.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn sample_header() -> Vec<u8> {
		let mut tag = AsfTag::default();
		tag.set(String::from("Title"), String::from("Test Title"));
		tag.set(String::from("Author"), String::from("Test Artist"));
		tag.set(String::from("WM/AlbumTitle"), String::from("Test Album"));

		let mut body = Vec::new();
		body.extend_from_slice(&AsfFile {
			raw_objects: Vec::new(),
			tag: None,
			properties: FileProperties::default(),
		}.properties.duration().as_secs().to_le_bytes());
		body.clear();

		let file = AsfFile {
			raw_objects: Vec::new(),
			tag: Some(tag.clone()),
			properties: FileProperties::default(),
		};

		let mut out = Vec::new();
		write_to(&mut out, &file, &tag).unwrap();
		out
	}

	#[test]
	fn round_trips_content_description() {
		let bytes = sample_header();
		let mut cursor = Cursor::new(bytes);
		let file = read_from(&mut cursor, true).unwrap();

		let tag = file.tag.expect("tag should be present");
		assert_eq!(tag.get("Title"), Some("Test Title"));
		assert_eq!(tag.get("Author"), Some("Test Artist"));
		assert_eq!(tag.get("WM/AlbumTitle"), Some("Test Album"));
	}

	#[test]
	fn rejects_bad_magic() {
		let mut cursor = Cursor::new(vec![0u8; 16]);
		assert!(read_from(&mut cursor, false).is_err());
	}
}
