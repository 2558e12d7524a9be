use super::{DsfFile, DsfProperties};
use crate::error::{AudioMetaError, Result};
#[cfg(feature = "id3v2")]
use crate::id3::v2::{read::parse_id3v2, read_id3v2_header, tag::Id3v2Tag};

use std::io::{Read, Seek, SeekFrom};
use std::time::Duration;

use byteorder::{LittleEndian, ReadBytesExt};

pub(crate) fn read_from<R>(data: &mut R, read_properties: bool) -> Result<DsfFile>
where
	R: Read + Seek,
{
	let mut header = [0; 4];
	data.read_exact(&mut header)?;

	if &header != b"DSD " {
		return Err(AudioMetaError::Dsf("File does not contain a valid DSD header"));
	}

	let header_size = data.read_u64::<LittleEndian>()?;

	if header_size != 28 {
		return Err(AudioMetaError::Dsf("Unexpected DSD chunk size"));
	}

	let _total_size = data.read_u64::<LittleEndian>()?;
	let metadata_offset = data.read_u64::<LittleEndian>()?;

	let mut fmt_id = [0; 4];
	data.read_exact(&mut fmt_id)?;

	if &fmt_id != b"fmt " {
		return Err(AudioMetaError::Dsf("Expected a \"fmt \" chunk following the DSD header"));
	}

	let _fmt_size = data.read_u64::<LittleEndian>()?;

	let _format_version = data.read_u32::<LittleEndian>()?;
	let _format_id = data.read_u32::<LittleEndian>()?;
	let channel_type = data.read_u32::<LittleEndian>()?;
	let channel_num = data.read_u32::<LittleEndian>()?;
	let sample_rate = data.read_u32::<LittleEndian>()?;
	let bits_per_sample = data.read_u32::<LittleEndian>()?;
	let sample_count = data.read_u64::<LittleEndian>()?;
	let _block_size_per_channel = data.read_u32::<LittleEndian>()?;
	let _reserved = data.read_u32::<LittleEndian>()?;

	let properties = if read_properties {
		let duration = if sample_rate > 0 {
			Duration::from_millis((sample_count * 1000) / u64::from(sample_rate))
		} else {
			Duration::ZERO
		};

		let bitrate = if duration.as_millis() > 0 {
			((sample_rate as u64 * u64::from(bits_per_sample) * u64::from(channel_num)) / 1000)
				as u32
		} else {
			0
		};

		DsfProperties::new(
			channel_type,
			channel_num as u8,
			sample_rate,
			bits_per_sample,
			sample_count,
			duration,
			bitrate,
		)
	} else {
		DsfProperties::default()
	};

	#[cfg(feature = "id3v2")]
	let id3v2_tag: Option<Id3v2Tag> = if metadata_offset > 0 {
		data.seek(SeekFrom::Start(metadata_offset))?;

		let id3v2_header = read_id3v2_header(data)?;
		Some(parse_id3v2(data, id3v2_header)?)
	} else {
		None
	};

	Ok(DsfFile {
		#[cfg(feature = "id3v2")]
		id3v2_tag,
		properties,
	})
}
