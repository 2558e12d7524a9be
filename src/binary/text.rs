//! Byte-slice string codecs shared across formats.
//!
//! `id3::v2::util::text_utils` already implements ID3v2's stream-based (`Read`) version of
//! these codecs, encoding selection included; that module is left untouched since its
//! call sites are correct and tested. This module covers the same four encodings over a
//! plain `&[u8]`, for callers (APE items, Vorbis comments, the new DSF/DFF/Musepack/ASF
//! engines) that already have the whole field buffered.

use crate::error::{AudioMetaError, Result};

/// The four string encodings named in the format specs this crate implements.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TextEncoding {
	/// ISO-8859-1, one byte per character, no BOM
	Latin1,
	/// UTF-8
	Utf8,
	/// UTF-16 with a byte order mark; absent BOM is treated as little-endian
	Utf16Bom,
	/// UTF-16, big-endian, no BOM
	Utf16Be,
}

/// Decodes `bytes` under `encoding`, replacing invalid UTF-8 sequences with U+FFFD.
///
/// # Errors
///
/// Returns [`AudioMetaError::TextDecode`] for malformed UTF-16 (odd length, missing/invalid
/// BOM where required, unpaired surrogate).
pub fn decode_str(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
	match encoding {
		TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
		TextEncoding::Utf8 => Ok(String::from_utf8_lossy(bytes).into_owned()),
		TextEncoding::Utf16Bom => {
			if bytes.len() < 2 {
				return Ok(String::new());
			}

			match (bytes[0], bytes[1]) {
				(0xFE, 0xFF) => decode_utf16(&bytes[2..], true),
				(0xFF, 0xFE) => decode_utf16(&bytes[2..], false),
				// Spec §4.A: absent BOM defaults to little-endian.
				_ => decode_utf16(bytes, false),
			}
		},
		TextEncoding::Utf16Be => decode_utf16(bytes, true),
	}
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> Result<String> {
	if bytes.len() % 2 != 0 {
		return Err(AudioMetaError::TextDecode("UTF-16 string has an odd length"));
	}

	let units: Vec<u16> = bytes
		.chunks_exact(2)
		.map(|c| {
			if big_endian {
				u16::from_be_bytes([c[0], c[1]])
			} else {
				u16::from_le_bytes([c[0], c[1]])
			}
		})
		.collect();

	String::from_utf16(&units).map_err(|_| AudioMetaError::TextDecode("Given an invalid UTF-16 string"))
}

/// Encodes `value` under `encoding`.
///
/// `terminated` appends the encoding's null terminator: a single `0x00` for
/// Latin-1/UTF-8, or a double `0x00` aligned on an even offset for the UTF-16 variants.
pub fn encode_str(value: &str, encoding: TextEncoding, terminated: bool) -> Vec<u8> {
	match encoding {
		TextEncoding::Latin1 => {
			let mut out: Vec<u8> = value.chars().map(|c| c as u8).collect();

			if terminated {
				out.push(0);
			}

			out
		},
		TextEncoding::Utf8 => {
			let mut out = value.as_bytes().to_vec();

			if terminated {
				out.push(0);
			}

			out
		},
		TextEncoding::Utf16Bom => encode_utf16(value, false, true, terminated),
		TextEncoding::Utf16Be => encode_utf16(value, true, false, terminated),
	}
}

fn encode_utf16(value: &str, big_endian: bool, bom: bool, terminated: bool) -> Vec<u8> {
	let mut out = Vec::new();

	if bom {
		out.extend_from_slice(&[0xFF, 0xFE]);
	}

	for unit in value.encode_utf16() {
		let pair = if big_endian {
			unit.to_be_bytes()
		} else {
			unit.to_le_bytes()
		};
		out.extend_from_slice(&pair);
	}

	if terminated {
		out.extend_from_slice(&[0, 0]);
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn latin1_round_trip() {
		let encoded = encode_str("caf\u{e9}", TextEncoding::Latin1, false);
		let decoded = decode_str(&encoded, TextEncoding::Latin1).unwrap();
		assert_eq!(decoded, "caf\u{e9}");
	}

	#[test]
	fn utf8_round_trip() {
		let encoded = encode_str("héllo", TextEncoding::Utf8, true);
		assert_eq!(*encoded.last().unwrap(), 0);
		let decoded = decode_str(&encoded[..encoded.len() - 1], TextEncoding::Utf8).unwrap();
		assert_eq!(decoded, "héllo");
	}

	#[test]
	fn utf16_bom_defaults_to_le_without_bom() {
		let no_bom = encode_utf16("hi", false, false, false);
		let decoded = decode_str(&no_bom, TextEncoding::Utf16Bom).unwrap();
		assert_eq!(decoded, "hi");
	}

	#[test]
	fn utf16_be_round_trip() {
		let encoded = encode_str("hi", TextEncoding::Utf16Be, false);
		let decoded = decode_str(&encoded, TextEncoding::Utf16Be).unwrap();
		assert_eq!(decoded, "hi");
	}

	#[test]
	fn odd_length_utf16_errors() {
		assert!(decode_str(&[0, 1, 2], TextEncoding::Utf16Be).is_err());
	}
}
