use crate::types::properties::FileProperties;

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// A DFF (DSDIFF) file's audio properties
pub struct DffProperties {
	channels: u8,
	sample_rate: u32,
	sample_count: u64,
	duration: Duration,
	bitrate: u32,
}

impl From<DffProperties> for FileProperties {
	fn from(input: DffProperties) -> Self {
		Self {
			duration: input.duration,
			overall_bitrate: Some(input.bitrate),
			audio_bitrate: Some(input.bitrate),
			sample_rate: Some(input.sample_rate),
			channels: Some(input.channels),
		}
	}
}

impl DffProperties {
	pub(super) const fn new(
		channels: u8,
		sample_rate: u32,
		sample_count: u64,
		duration: Duration,
		bitrate: u32,
	) -> Self {
		Self {
			channels,
			sample_rate,
			sample_count,
			duration,
			bitrate,
		}
	}

	/// Duration
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Overall bitrate (kbps)
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// The DSD sampling frequency (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> u8 {
		self.channels
	}

	/// Number of samples per channel
	pub fn sample_count(&self) -> u64 {
		self.sample_count
	}
}
