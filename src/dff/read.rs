use super::{DffFile, DffProperties};
use crate::error::{AudioMetaError, Result};
#[cfg(feature = "id3v2")]
use crate::id3::v2::{read::parse_id3v2, read_id3v2_header};

use std::io::{Read, Seek, SeekFrom};
use std::time::Duration;

use byteorder::{BigEndian, ReadBytesExt};

pub(crate) fn read_from<R>(data: &mut R, read_properties: bool) -> Result<DffFile>
where
	R: Read + Seek,
{
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

	// `id` (4) + `frm8_size` (8) make up the 12-byte chunk header; the content, of which
	// `form_type` is the first 4 bytes, runs for `frm8_size` bytes after that.
	let end = 12 + frm8_size;

	let mut sample_rate = 0_u32;
	let mut channels = 0_u8;
	let mut dsd_byte_len = 0_u64;
	#[cfg(feature = "id3v2")]
	let mut id3v2_tag = None;

	loop {
		let pos = data.seek(SeekFrom::Current(0))?;

		if pos >= end {
			break;
		}

		let mut chunk_id = [0; 4];
		if data.read_exact(&mut chunk_id).is_err() {
			break;
		}

		let chunk_size = data.read_u64::<BigEndian>()?;

		match &chunk_id {
			b"PROP" => read_prop_chunk(data, chunk_size, &mut sample_rate, &mut channels)?,
			b"DSD " => {
				dsd_byte_len = chunk_size;
				data.seek(SeekFrom::Current(chunk_size as i64))?;
			},
			b"ID3 " => {
				#[cfg(feature = "id3v2")]
				{
					let id3v2_header = read_id3v2_header(data)?;
					let consumed = 10 + u64::from(id3v2_header.size);
					id3v2_tag = Some(parse_id3v2(data, id3v2_header)?);

					if chunk_size > consumed {
						data.seek(SeekFrom::Current((chunk_size - consumed) as i64))?;
					}
				}
				#[cfg(not(feature = "id3v2"))]
				data.seek(SeekFrom::Current(chunk_size as i64))?;
			},
			_ => {
				data.seek(SeekFrom::Current(chunk_size as i64))?;
			},
		}

		// DSDIFF, like other IFF variants, pads odd-sized chunks to an even boundary.
		if chunk_size % 2 != 0 {
			data.seek(SeekFrom::Current(1))?;
		}
	}

	let properties = if read_properties {
		let sample_count = if channels > 0 {
			(dsd_byte_len * 8) / u64::from(channels)
		} else {
			0
		};

		let duration = if sample_rate > 0 {
			Duration::from_millis((sample_count * 1000) / u64::from(sample_rate))
		} else {
			Duration::ZERO
		};

		let bitrate = if sample_rate > 0 {
			(u64::from(sample_rate) * u64::from(channels) / 1000) as u32
		} else {
			0
		};

		DffProperties::new(channels, sample_rate, sample_count, duration, bitrate)
	} else {
		DffProperties::default()
	};

	Ok(DffFile {
		#[cfg(feature = "id3v2")]
		id3v2_tag,
		properties,
	})
}

fn read_prop_chunk<R>(
	data: &mut R,
	chunk_size: u64,
	sample_rate: &mut u32,
	channels: &mut u8,
) -> Result<()>
where
	R: Read + Seek,
{
	let mut prop_form = [0; 4];
	data.read_exact(&mut prop_form)?;

	if &prop_form != b"SND " {
		data.seek(SeekFrom::Current((chunk_size - 4) as i64))?;
		return Ok(());
	}

	let prop_end = data.seek(SeekFrom::Current(0))? + (chunk_size - 4);

	while data.seek(SeekFrom::Current(0))? < prop_end {
		let mut sub_id = [0; 4];
		data.read_exact(&mut sub_id)?;
		let sub_size = data.read_u64::<BigEndian>()?;

		match &sub_id {
			b"FS  " => {
				*sample_rate = data.read_u32::<BigEndian>()?;

				if sub_size > 4 {
					data.seek(SeekFrom::Current((sub_size - 4) as i64))?;
				}
			},
			b"CHNL" => {
				let num_channels = data.read_u16::<BigEndian>()?;
				*channels = num_channels as u8;

				if sub_size > 2 {
					data.seek(SeekFrom::Current((sub_size - 2) as i64))?;
				}
			},
			_ => {
				data.seek(SeekFrom::Current(sub_size as i64))?;
			},
		}

		if sub_size % 2 != 0 {
			data.seek(SeekFrom::Current(1))?;
		}
	}

	Ok(())
}
