//! Error types shared by every component of the crate.
//!
//! Every fallible entry point returns [`Result<T>`], never panics, and never throws for an
//! expected parse failure. Container-level structural failures (bad magic, truncated header,
//! unsupported version) are surfaced through these variants; frame/item-level failures are
//! skipped locally by the parser and never reach the caller as an error.

/// Errors that could occur within the crate.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AudioMetaError {
	// File extension/format related errors
	/// Unknown file extension.
	#[error("Failed to guess the metadata format based on the file extension.")]
	UnknownFileExtension,
	/// Unsupported file extension
	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
	/// Unable to guess the format
	#[error("No format could be determined from the provided file.")]
	UnknownFormat,
	/// The extension didn't map to a known [`FileType`](crate::FileType)
	#[error("Found an unknown extension: {0}")]
	BadExtension(String),
	/// A tag was used that isn't supported by the target format
	#[error("An unsupported tag type was used for this format")]
	UnsupportedTag,

	// File data related errors
	/// Provided an empty file
	#[error("File contains no data")]
	EmptyFile,
	/// Attempting to write an abnormally large amount of data
	#[error("An abnormally large amount of data was provided, and an overflow occurred")]
	TooMuchData,
	/// Data ran out before a required structural length was satisfied
	#[error("Expected more data than was available (truncated input)")]
	TruncatedInput,
	/// An expected magic signature was not present
	#[error("Expected magic signature {expected:?}, found: {found:?}")]
	BadMagic {
		/// The signature that was expected
		expected: &'static str,
		/// What was actually found, rendered for diagnostics
		found: String,
	},
	/// A field violated its format-specific specification
	#[error("Field `{field}` is invalid: {reason}")]
	InvalidField {
		/// Name of the offending field
		field: &'static str,
		/// Human readable explanation
		reason: String,
	},
	/// A declared size exceeded caller-provided or inherent bounds
	#[error("Declared size of `{field}` ({size}) exceeds the permitted bound")]
	OversizeField {
		/// Name of the offending field
		field: &'static str,
		/// The declared size
		size: u64,
	},
	/// A version number fell outside the range this crate understands
	#[error("Unsupported version for {format}: {version}")]
	UnsupportedVersion {
		/// The format complaining about the version
		format: &'static str,
		/// The version that was rejected
		version: u32,
	},
	/// An Ogg page's CRC-32 did not match its declared checksum
	#[error("Ogg page checksum mismatch (declared {declared:#010x}, computed {computed:#010x})")]
	MalformedChecksum {
		/// The checksum stored in the page
		declared: u32,
		/// The checksum this crate computed
		computed: u32,
	},
	/// A zlib-compressed ID3v2 frame could not be inflated
	#[error("Failed to decompress frame contents")]
	DecompressionFailed,
	/// A string could not be decoded under its declared encoding
	#[error("Found invalid encoding: {0}")]
	TextDecode(&'static str),
	/// A string could not be encoded for writing, and no lossy fallback was permitted
	#[error("Failed to encode text: {0}")]
	EncodingFailed(&'static str),
	/// A cooperative cancellation signal fired during an async operation
	#[error("The operation was cancelled")]
	OperationCancelled,

	// Picture related errors
	/// Picture has an unsupported mime type
	#[error("Unsupported mime type: {0}")]
	UnsupportedMimeType(String),
	/// Provided an invalid picture
	#[error("Picture contains invalid data")]
	NotAPicture,

	// Format specific errors, retained as opaque strings in line with the error surface each
	// format component has always exposed.
	/// Errors that arise while reading/writing to RIFF/WAV files
	#[error("Riff: {0}")]
	Riff(&'static str),
	/// Errors that arise while reading/writing to AIFF files
	#[error("Aiff: {0}")]
	Aiff(&'static str),
	/// Errors that arise while reading/writing to FLAC files
	#[error("Flac: {0}")]
	Flac(&'static str),
	/// Errors that arise while reading/writing to Opus files
	#[error("Opus: {0}")]
	Opus(&'static str),
	/// Errors that arise while reading/writing to Ogg Vorbis files
	#[error("Vorbis: {0}")]
	Vorbis(&'static str),
	/// Errors that arise while reading/writing Ogg pages
	#[error("OGG: {0}")]
	Ogg(&'static str),
	/// Errors that arise while reading/writing MPEG files
	#[error("MPEG: {0}")]
	Mp3(&'static str),
	/// Errors that arise while reading/writing APE files
	#[error("APE: {0}")]
	Ape(&'static str),
	/// Errors that arise while reading/writing MP4 files
	#[error("MP4: {0}")]
	Mp4(&'static str),
	/// A malformed MP4 atom was encountered
	#[error("MP4 atom error: {0}")]
	BadAtom(&'static str),
	/// Errors that arise while reading/writing ID3v2 tags
	#[error("ID3v2: {0}")]
	Id3v2(&'static str),
	/// An ID3v2 frame had a malformed identifier
	#[error("Found an invalid frame ID")]
	BadFrameID,
	/// An ID3v2 frame declared a size it could not possibly have
	#[error("Found an invalid frame length")]
	BadFrameLength,
	/// An ID3v2 header declared a major version outside of 2..=4
	#[error("Found an invalid ID3v2 version: {0}")]
	BadId3v2Version(u8),
	/// A SYLT frame could not be parsed
	#[error("Failed to parse a SYLT frame")]
	BadSyncText,
	/// An APEv2/ID3v1/ID3v2 footer claimed a size that made no sense for the surrounding file
	#[error("Found a tag with an invalid/fake size")]
	FakeTag,
	/// Errors that arise while reading/writing DSF files
	#[error("DSF: {0}")]
	Dsf(&'static str),
	/// Errors that arise while reading/writing DFF files
	#[error("DFF: {0}")]
	Dff(&'static str),
	/// Errors that arise while reading/writing Musepack files
	#[error("Musepack: {0}")]
	Musepack(&'static str),
	/// Errors that arise while reading/writing ASF files
	#[error("ASF: {0}")]
	Asf(&'static str),

	// Filesystem collaborator errors
	/// An error surfaced from a [`FileSystem`](crate::fs::FileSystem) implementation
	#[error("I/O failure: {0}")]
	IoFailure(String),

	// Conversions for std errors
	/// Unable to convert bytes to a String
	#[error(transparent)]
	FromUtf8(#[from] std::string::FromUtf8Error),
	/// Represents all cases of `std::io::Error`.
	#[error(transparent)]
	Io(#[from] std::io::Error),
	/// Any error that occurred while reading/writing an Ogg page
	#[error(transparent)]
	OggPage(#[from] ogg_pager::PageError),
}

/// Result of tag operations.
pub type Result<T> = std::result::Result<T, AudioMetaError>;
