use crate::types::properties::FileProperties;

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// A DSF file's audio properties
pub struct DsfProperties {
	channel_type: u32,
	channels: u8,
	sample_rate: u32,
	bits_per_sample: u32,
	sample_count: u64,
	duration: Duration,
	bitrate: u32,
}

impl From<DsfProperties> for FileProperties {
	fn from(input: DsfProperties) -> Self {
		Self {
			duration: input.duration,
			overall_bitrate: Some(input.bitrate),
			audio_bitrate: Some(input.bitrate),
			sample_rate: Some(input.sample_rate),
			channels: Some(input.channels),
		}
	}
}

impl DsfProperties {
	pub(super) const fn new(
		channel_type: u32,
		channels: u8,
		sample_rate: u32,
		bits_per_sample: u32,
		sample_count: u64,
		duration: Duration,
		bitrate: u32,
	) -> Self {
		Self {
			channel_type,
			channels,
			sample_rate,
			bits_per_sample,
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

	/// The DSD sampling frequency (Hz), e.g. 2822400 for DSD64
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> u8 {
		self.channels
	}

	/// Bits per sample, always 1 for DSD
	pub fn bits_per_sample(&self) -> u32 {
		self.bits_per_sample
	}

	/// Number of samples per channel
	pub fn sample_count(&self) -> u64 {
		self.sample_count
	}

	/// The DSF channel type field (1 = mono, 2 = stereo, 3 = 3 channels, 4 = quad, 5 = 4
	/// channels, 6 = 5 channels, 7 = 5.1 channels)
	pub fn channel_type(&self) -> u32 {
		self.channel_type
	}
}
