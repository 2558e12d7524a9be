//! Cross-tag field copying (spec §4.N).
//!
//! Copying is driven by the same canonical [`ItemKey`] list [`ItemKey::map_key`] already
//! enumerates, not by reflection: each key is classified into one [`CopyCategory`], the
//! caller opts categories in via [`CopyOptions`], and a key the destination format has no
//! mapping for is recorded as an [`Info`](crate::validate::Severity::Info) issue rather
//! than silently dropped or treated as an error.

use crate::types::item::{ItemKey, ItemValue, TagItem};
use crate::types::picture::PictureType;
use crate::types::tag::Tag;
use crate::validate::{Severity, ValidationIssue};

/// Which bucket of fields a given [`ItemKey`] falls into, for the purposes of
/// [`CopyOptions`] filtering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CopyCategory {
	/// Title, artist, album, track/disc numbers, genre, comment, and similar.
	Basic,
	/// `*SortOrder` keys.
	Sort,
	/// `MusicBrainz*`/`AcoustId*` identifiers.
	MusicBrainz,
	/// `ReplayGain*` keys.
	ReplayGain,
	/// `R128*` keys.
	R128,
	/// Pictures (handled separately from [`ItemKey`]s; see [`CopyOptions::pictures`]).
	Pictures,
	/// Anything not in one of the above, including [`ItemKey::Unknown`].
	Custom,
}

fn category_of(key: &ItemKey) -> CopyCategory {
	match key {
		ItemKey::AlbumTitleSortOrder
		| ItemKey::AlbumArtistSortOrder
		| ItemKey::TrackTitleSortOrder
		| ItemKey::TrackArtistSortOrder
		| ItemKey::ShowNameSortOrder
		| ItemKey::ComposerSortOrder => CopyCategory::Sort,

		ItemKey::MusicBrainzRecordingId
		| ItemKey::MusicBrainzTrackId
		| ItemKey::MusicBrainzReleaseId
		| ItemKey::MusicBrainzReleaseGroupId
		| ItemKey::MusicBrainzArtistId
		| ItemKey::MusicBrainzReleaseArtistId
		| ItemKey::MusicBrainzWorkId
		| ItemKey::MusicBrainzDiscId
		| ItemKey::AcoustId
		| ItemKey::AcoustIdFingerprint => CopyCategory::MusicBrainz,

		ItemKey::ReplayGainTrackGain
		| ItemKey::ReplayGainTrackPeak
		| ItemKey::ReplayGainAlbumGain
		| ItemKey::ReplayGainAlbumPeak => CopyCategory::ReplayGain,

		ItemKey::R128TrackGain | ItemKey::R128AlbumGain => CopyCategory::R128,

		ItemKey::Unknown(_) => CopyCategory::Custom,

		_ => CopyCategory::Basic,
	}
}

/// Which [`CopyCategory`] buckets to include in a [`copy_tag`] call.
///
/// Defaults to everything except [`Custom`](CopyCategory::Custom) — mirroring the
/// expectation that an unrecognized/unmapped key shouldn't silently tag along unless the
/// caller asks for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CopyOptions {
	/// Copy [`CopyCategory::Basic`] fields.
	pub basic: bool,
	/// Copy [`CopyCategory::Sort`] fields.
	pub sort: bool,
	/// Copy [`CopyCategory::MusicBrainz`] fields.
	pub music_brainz: bool,
	/// Copy [`CopyCategory::ReplayGain`] fields.
	pub replay_gain: bool,
	/// Copy [`CopyCategory::R128`] fields.
	pub r128: bool,
	/// Deep-copy [`Picture`](crate::types::picture::Picture)s (content bytes cloned).
	pub pictures: bool,
	/// Copy [`CopyCategory::Custom`] fields, including [`ItemKey::Unknown`].
	pub custom: bool,
}

impl CopyOptions {
	/// Every category enabled.
	pub fn all() -> Self {
		Self {
			basic: true,
			sort: true,
			music_brainz: true,
			replay_gain: true,
			r128: true,
			pictures: true,
			custom: true,
		}
	}

	/// No categories enabled; build up from here with the `with_*` methods.
	pub fn none() -> Self {
		Self {
			basic: false,
			sort: false,
			music_brainz: false,
			replay_gain: false,
			r128: false,
			pictures: false,
			custom: false,
		}
	}

	/// [`Basic`](CopyCategory::Basic) + [`Pictures`](CopyCategory::Pictures), the common
	/// case of copying the fields a casual listener cares about.
	pub fn basic_with_pictures() -> Self {
		Self {
			basic: true,
			pictures: true,
			..Self::none()
		}
	}

	fn allows(&self, category: CopyCategory) -> bool {
		match category {
			CopyCategory::Basic => self.basic,
			CopyCategory::Sort => self.sort,
			CopyCategory::MusicBrainz => self.music_brainz,
			CopyCategory::ReplayGain => self.replay_gain,
			CopyCategory::R128 => self.r128,
			CopyCategory::Pictures => self.pictures,
			CopyCategory::Custom => self.custom,
		}
	}
}

impl Default for CopyOptions {
	fn default() -> Self {
		Self::all()
	}
}

/// Copy fields from `src` into `dst` per `options`, respecting `dst`'s [`TagType`](crate::types::tag::TagType)
/// mapping (spec §4.N).
///
/// Returns one [`ValidationIssue`] (severity [`Info`](Severity::Info)) per source item
/// whose category was requested but which `dst`'s tag type has no mapping for — this is
/// never an error, just a record of what was silently dropped.
pub fn copy_tag(src: &Tag, dst: &mut Tag, options: CopyOptions) -> Vec<ValidationIssue> {
	let mut dropped = Vec::new();
	let dst_type = *dst.tag_type();

	for item in src.items() {
		let category = category_of(item.key());
		if !options.allows(category) {
			continue;
		}

		if item.key().map_key(dst_type, false).is_none() {
			dropped.push(ValidationIssue {
				field: "item",
				severity: Severity::Info,
				message: format!(
					"{:?} has no mapping in {:?}; dropped during copy",
					item.key(),
					dst_type
				),
			});
			continue;
		}

		let value = match item.value() {
			ItemValue::Text(text) => ItemValue::Text(text.clone()),
			ItemValue::Locator(locator) => ItemValue::Locator(locator.clone()),
			ItemValue::Binary(bin) => ItemValue::Binary(bin.clone()),
		};

		dst.insert_item(TagItem::new(item.key().clone(), value));
	}

	if options.pictures {
		for picture in src.pictures() {
			if picture.pic_type == PictureType::CoverFront {
				dst.remove_picture_type(PictureType::CoverFront);
			}
			dst.push_picture(picture.clone());
		}
	}

	dropped
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::tag::TagType;

	#[test]
	fn copies_basic_fields() {
		let mut src = Tag::new(TagType::VorbisComments);
		src.insert_item(TagItem::new(
			ItemKey::TrackTitle,
			ItemValue::Text(String::from("Song")),
		));

		let mut dst = Tag::new(TagType::Id3v2);
		copy_tag(&src, &mut dst, CopyOptions::all());

		assert_eq!(dst.get_string(&ItemKey::TrackTitle), Some("Song"));
	}

	#[test]
	fn excludes_category_when_disabled() {
		let mut src = Tag::new(TagType::VorbisComments);
		src.insert_item(TagItem::new(
			ItemKey::MusicBrainzArtistId,
			ItemValue::Text(String::from("abc-123")),
		));

		let mut dst = Tag::new(TagType::Id3v2);
		let mut options = CopyOptions::none();
		options.basic = true;
		copy_tag(&src, &mut dst, options);

		assert_eq!(dst.get_string(&ItemKey::MusicBrainzArtistId), None);
	}

	#[test]
	fn cover_front_replaces_existing() {
		use crate::types::picture::{MimeType, Picture};

		let mut src = Tag::new(TagType::Id3v2);
		src.push_picture(Picture::new(
			PictureType::CoverFront,
			MimeType::Png,
			None,
			(0, 0),
			0,
			0,
			vec![1, 2, 3],
		));

		let mut dst = Tag::new(TagType::Id3v2);
		dst.push_picture(Picture::new(
			PictureType::CoverFront,
			MimeType::Jpeg,
			None,
			(0, 0),
			0,
			0,
			vec![9, 9, 9],
		));

		copy_tag(&src, &mut dst, CopyOptions::all());

		let fronts: Vec<_> = dst
			.pictures()
			.iter()
			.filter(|p| p.pic_type == PictureType::CoverFront)
			.collect();
		assert_eq!(fronts.len(), 1);
		assert_eq!(fronts[0].data.as_ref(), &[1, 2, 3]);
	}
}
