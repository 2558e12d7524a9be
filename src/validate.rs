//! Per-format validation of a [`Tag`](crate::Tag)'s contents.
//!
//! Validation never blocks a read or a write; it is a separate, opt-in pass a caller
//! can run before saving to surface issues a format-unaware editor might otherwise
//! silently round-trip (a bad ISRC, a track number bigger than the total, and so on).

use crate::types::item::ItemKey;
use crate::types::tag::Tag;

/// How serious a [`ValidationIssue`] is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	/// Informational only, e.g. a field silently dropped by the destination format.
	Info,
	/// Likely to cause confusion for other tools, but not structurally invalid.
	Warn,
	/// Violates the field's own specification.
	Error,
}

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
	/// The field the issue applies to, rendered as a human-readable name.
	pub field: &'static str,
	/// How serious the issue is.
	pub severity: Severity,
	/// A human-readable description of the issue.
	pub message: String,
}

impl ValidationIssue {
	fn new(field: &'static str, severity: Severity, message: impl Into<String>) -> Self {
		Self {
			field,
			severity,
			message: message.into(),
		}
	}
}

fn is_valid_isrc(isrc: &str) -> bool {
	let bytes = isrc.as_bytes();
	if bytes.len() != 12 {
		return false;
	}

	bytes[0..2].iter().all(u8::is_ascii_uppercase)
		&& bytes[2..5].iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
		&& bytes[5..12].iter().all(u8::is_ascii_digit)
}

fn is_valid_year(year: &str) -> bool {
	year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

fn parse_u32(value: &str) -> Option<u32> {
	value.trim().parse().ok()
}

/// Run every validation rule from spec §4.N against `tag`, returning every issue found.
///
/// Rules are independent; a single malformed field only ever produces one issue, and a
/// field that doesn't exist in `tag` is simply skipped (absence is not itself an issue).
pub fn validate(tag: &Tag) -> Vec<ValidationIssue> {
	let mut issues = Vec::new();

	if let Some(isrc) = tag.get_string(&ItemKey::ISRC) {
		if !is_valid_isrc(isrc) {
			issues.push(ValidationIssue::new(
				"ISRC",
				Severity::Error,
				format!("`{isrc}` does not match the ISRC pattern [A-Z]{{2}}[A-Z0-9]{{3}}\\d{{7}}"),
			));
		}
	}

	if let Some(year) = tag.get_string(&ItemKey::Year) {
		if !is_valid_year(year) {
			issues.push(ValidationIssue::new(
				"Year",
				Severity::Error,
				format!("`{year}` is not a 4-digit number"),
			));
		}
	}

	if let (Some(track), Some(total)) = (
		tag.get_string(&ItemKey::TrackNumber).and_then(parse_u32),
		tag.get_string(&ItemKey::TrackTotal).and_then(parse_u32),
	) {
		if track > total {
			issues.push(ValidationIssue::new(
				"TrackNumber",
				Severity::Error,
				format!("track number {track} exceeds total track count {total}"),
			));
		}
	}

	if let (Some(disc), Some(total)) = (
		tag.get_string(&ItemKey::DiscNumber).and_then(parse_u32),
		tag.get_string(&ItemKey::DiscTotal).and_then(parse_u32),
	) {
		if disc > total {
			issues.push(ValidationIssue::new(
				"DiscNumber",
				Severity::Error,
				format!("disc number {disc} exceeds total disc count {total}"),
			));
		}
	}

	for picture in tag.pictures() {
		if let Some(description) = &picture.description {
			if description.len() > 64 {
				issues.push(ValidationIssue::new(
					"Picture::description",
					Severity::Warn,
					"description exceeds the conventional 64 character limit for APIC frames",
				));
			}
		}
	}

	for key in [
		ItemKey::TrackTitle,
		ItemKey::TrackArtist,
		ItemKey::AlbumTitle,
		ItemKey::AlbumArtist,
		ItemKey::Comment,
	] {
		if let Some(value) = tag.get_string(&key) {
			if value != value.trim() {
				issues.push(ValidationIssue::new(
					"text field",
					Severity::Warn,
					"contains leading or trailing whitespace",
				));
			}
		}
	}

	if !tag.pictures().is_empty() && tag.title().is_none() && tag.artist().is_none() {
		issues.push(ValidationIssue::new(
			"Tag",
			Severity::Warn,
			"cover art is present but no title or artist is set",
		));
	}

	issues
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::item::{ItemValue, TagItem};
	use crate::types::tag::TagType;

	#[test]
	fn flags_bad_isrc() {
		let mut tag = Tag::new(TagType::VorbisComments);
		tag.insert_item(TagItem::new(
			ItemKey::ISRC,
			ItemValue::Text(String::from("not-an-isrc")),
		));

		let issues = validate(&tag);
		assert!(issues
			.iter()
			.any(|i| i.field == "ISRC" && i.severity == Severity::Error));
	}

	#[test]
	fn accepts_valid_isrc() {
		let mut tag = Tag::new(TagType::VorbisComments);
		tag.insert_item(TagItem::new(
			ItemKey::ISRC,
			ItemValue::Text(String::from("USRC17607839")),
		));

		let issues = validate(&tag);
		assert!(!issues.iter().any(|i| i.field == "ISRC"));
	}

	#[test]
	fn flags_track_exceeding_total() {
		let mut tag = Tag::new(TagType::VorbisComments);
		tag.insert_item(TagItem::new(
			ItemKey::TrackNumber,
			ItemValue::Text(String::from("12")),
		));
		tag.insert_item(TagItem::new(
			ItemKey::TrackTotal,
			ItemValue::Text(String::from("10")),
		));

		let issues = validate(&tag);
		assert!(issues
			.iter()
			.any(|i| i.field == "TrackNumber" && i.severity == Severity::Error));
	}

	#[test]
	fn flags_bad_year() {
		let mut tag = Tag::new(TagType::VorbisComments);
		tag.insert_item(TagItem::new(
			ItemKey::Year,
			ItemValue::Text(String::from("95")),
		));

		let issues = validate(&tag);
		assert!(issues
			.iter()
			.any(|i| i.field == "Year" && i.severity == Severity::Error));
	}
}
