use super::properties::{MusepackProperties, MusepackStreamVersion};
use super::MusepackFile;
use crate::error::{AudioMetaError, Result};
#[cfg(feature = "ape")]
use crate::ape::tag::{ape_tag::ApeTag, read::read_ape_tag};
use crate::ape::tag::read_ape_header;
#[cfg(feature = "id3v1")]
use crate::id3::v1::tag::Id3v1Tag;
use crate::id3::find_id3v1;

use std::io::{Read, Seek, SeekFrom};
use std::time::Duration;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

const APE_PREAMBLE: &[u8] = b"APETAGEX";

// Index 0..=3 are the only frequencies either stream version ever actually uses; the
// remaining SV8 slots are reserved and have no defined meaning.
const SAMPLE_RATES: [u32; 4] = [44_100, 48_000, 37_800, 32_000];

const SV7_SAMPLES_PER_FRAME: u64 = 1152;

fn read_sv7<R>(data: &mut R, version_byte: u8, read_properties: bool) -> Result<MusepackProperties>
where
	R: Read + Seek,
{
	let version = version_byte & 0x0F;

	if !(4..=7).contains(&version) {
		return Err(AudioMetaError::UnsupportedVersion {
			format: "Musepack SV7",
			version: u32::from(version),
		});
	}

	let frame_count = data.read_u32::<LittleEndian>()?;
	let _max_level = data.read_u16::<LittleEndian>()?;
	let _profile_gain = data.read_u16::<LittleEndian>()?;
	let sample_rate_byte = data.read_u8()?;

	// Reserved, kept only to advance the reader past the fixed 16-byte header.
	let mut reserved = [0; 3];
	data.read_exact(&mut reserved)?;

	if !read_properties {
		return Ok(MusepackProperties::default());
	}

	let sample_rate = SAMPLE_RATES[usize::from(sample_rate_byte & 0x03)];
	// SV7 is always stereo; the format has no per-file channel count of its own.
	let channels = 2;

	let sample_count = u64::from(frame_count) * SV7_SAMPLES_PER_FRAME;
	let duration = if sample_rate > 0 {
		Duration::from_secs_f64(sample_count as f64 / f64::from(sample_rate))
	} else {
		Duration::ZERO
	};

	Ok(MusepackProperties::new(
		MusepackStreamVersion::Sv7,
		duration,
		sample_rate,
		channels,
		sample_count,
	))
}

// SV8's packet size and the varint fields inside the Stream Header packet are encoded as
// big-endian base-128 values: the high bit of each byte signals continuation, and the
// remaining 7 bits are shifted in MSB-first.
fn read_varint<R>(reader: &mut R) -> Result<(u64, u32)>
where
	R: Read,
{
	let mut value: u64 = 0;
	let mut byte_count = 0_u32;

	loop {
		let byte = reader.read_u8()?;
		byte_count += 1;

		value = (value << 7) | u64::from(byte & 0x7F);

		if byte & 0x80 == 0 {
			break;
		}

		if byte_count >= 10 {
			return Err(AudioMetaError::Musepack("Packet declared a varint that never terminated"));
		}
	}

	Ok((value, byte_count))
}

fn read_sh_packet(payload: &[u8]) -> Result<MusepackProperties> {
	let mut reader = payload;

	let _crc = reader.read_u32::<BigEndian>()?;
	let stream_version = reader.read_u8()?;

	if !(4..=8).contains(&stream_version) {
		return Err(AudioMetaError::UnsupportedVersion {
			format: "Musepack SV8",
			version: u32::from(stream_version),
		});
	}

	let (sample_count, _) = read_varint(&mut reader)?;
	let (_silence_samples, _) = read_varint(&mut reader)?;

	let packed = reader
		.read_u8()
		.map_err(|_| AudioMetaError::Musepack("Stream Header packet is missing its sample rate/channel byte"))?;

	let sample_rate_index = usize::from((packed >> 5) & 0x07);
	let channels = ((packed >> 1) & 0x0F) + 1;

	let sample_rate = SAMPLE_RATES.get(sample_rate_index).copied().unwrap_or(0);

	let duration = if sample_rate > 0 {
		Duration::from_secs_f64(sample_count as f64 / f64::from(sample_rate))
	} else {
		Duration::ZERO
	};

	Ok(MusepackProperties::new(
		MusepackStreamVersion::Sv8,
		duration,
		sample_rate,
		channels,
		sample_count,
	))
}

fn read_sv8<R>(data: &mut R, read_properties: bool) -> Result<MusepackProperties>
where
	R: Read + Seek,
{
	loop {
		let mut key = [0; 2];
		data.read_exact(&mut key).map_err(|_| {
			AudioMetaError::Musepack("Reached the end of the stream without finding a Stream Header packet")
		})?;

		let (packet_size, size_len) = read_varint(data)?;

		let payload_len = packet_size
			.checked_sub(2 + u64::from(size_len))
			.ok_or(AudioMetaError::Musepack("Packet declared an impossible size"))?;

		match &key {
			b"SH" => {
				if !read_properties {
					data.seek(SeekFrom::Current(payload_len as i64))?;
					return Ok(MusepackProperties::default());
				}

				let mut payload = vec![0; payload_len as usize];
				data.read_exact(&mut payload)?;

				return read_sh_packet(&payload);
			},
			// No Stream Header found before the audio payload starts, there is nothing more
			// to learn about the stream's properties.
			b"AP" => return Ok(MusepackProperties::default()),
			_ => {
				data.seek(SeekFrom::Current(payload_len as i64))?;
			},
		}
	}
}

pub(crate) fn read_from<R>(data: &mut R, read_properties: bool) -> Result<MusepackFile>
where
	R: Read + Seek,
{
	let start = data.seek(SeekFrom::Current(0))?;
	let end = data.seek(SeekFrom::End(0))?;

	data.seek(SeekFrom::Start(start))?;

	let mut stream_len = end - start;

	let mut magic = [0; 4];
	data.read_exact(&mut magic)?;

	let properties = if &magic == b"MPCK" {
		read_sv8(data, read_properties)?
	} else if &magic[..3] == b"MP+" {
		read_sv7(data, magic[3], read_properties)?
	} else {
		return Err(AudioMetaError::Musepack(
			"File does not contain a valid Musepack signature (expected \"MPCK\" or \"MP+\")",
		));
	};

	#[cfg(feature = "ape")]
	let mut ape_tag: Option<ApeTag> = None;
	#[cfg(feature = "id3v1")]
	let mut id3v1_tag: Option<Id3v1Tag> = None;

	// First see if there's an ID3v1 tag
	#[allow(unused_variables)]
	let (found_id3v1, id3v1) = find_id3v1(data, true)?;

	if found_id3v1 {
		stream_len -= 128;
		#[cfg(feature = "id3v1")]
		{
			id3v1_tag = id3v1;
		}
	}

	// Next, search for an APEv2 tag footer, which is how Musepack stores the bulk of its
	// metadata (title, artist, ReplayGain, …)
	if stream_len >= 32 {
		data.seek(SeekFrom::Current(-32))?;

		let mut ape_preamble = [0; 8];
		data.read_exact(&mut ape_preamble)?;

		if ape_preamble == APE_PREAMBLE {
			let ape_header = read_ape_header(data, true)?;

			#[cfg(feature = "ape")]
			{
				let ape = read_ape_tag(data, ape_header)?;
				ape_tag = Some(ape);
			}

			#[cfg(not(feature = "ape"))]
			data.seek(SeekFrom::Current(i64::from(ape_header.size)))?;
		} else {
			data.seek(SeekFrom::Current(-8))?;
		}
	}

	Ok(MusepackFile {
		#[cfg(feature = "ape")]
		ape_tag,
		#[cfg(feature = "id3v1")]
		id3v1_tag,
		properties,
	})
}
