use crate::types::properties::FileProperties;

use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
/// The Musepack stream version, either the legacy frame-based format or the packet-based
/// format introduced with libmpcdec's SV8 rewrite.
pub enum MusepackStreamVersion {
	Sv7,
	Sv8,
}

#[derive(Clone, Debug, PartialEq)]
/// A Musepack file's audio properties
pub struct MusepackProperties {
	version: MusepackStreamVersion,
	duration: Duration,
	sample_rate: u32,
	channels: u8,
	sample_count: u64,
}

impl Default for MusepackProperties {
	fn default() -> Self {
		Self {
			version: MusepackStreamVersion::Sv7,
			duration: Duration::ZERO,
			sample_rate: 0,
			channels: 0,
			sample_count: 0,
		}
	}
}

impl From<MusepackProperties> for FileProperties {
	fn from(input: MusepackProperties) -> Self {
		Self {
			duration: input.duration,
			overall_bitrate: None,
			audio_bitrate: None,
			sample_rate: Some(input.sample_rate),
			channels: Some(input.channels),
		}
	}
}

impl MusepackProperties {
	pub(super) const fn new(
		version: MusepackStreamVersion,
		duration: Duration,
		sample_rate: u32,
		channels: u8,
		sample_count: u64,
	) -> Self {
		Self {
			version,
			duration,
			sample_rate,
			channels,
			sample_count,
		}
	}

	/// Duration
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> u8 {
		self.channels
	}

	/// Total number of samples per channel
	pub fn sample_count(&self) -> u64 {
		self.sample_count
	}

	/// Which on-disk stream format (SV7 frame-based or SV8 packet-based) was read
	pub fn version(&self) -> MusepackStreamVersion {
		self.version
	}
}
