//! A [Script List Table](https://docs.microsoft.com/en-us/typography/opentype/spec/chapter2#script-list-table-and-script-record)
//! reader and resolver.
//!
//! The script list is a directory of scripts; each script holds a directory
//! of language systems plus an optional default language system. Every
//! offset in a script table is relative to that script table, not to the
//! script list, so the base is threaded through explicitly.

use alloc::vec::Vec;

use super::{read_tag_and_locations, read_u16, read_u16_array, TagAndLocation};
use crate::parser::Stream;
use crate::{DecodeError, Tag};

/// A parsed [Language System Table](https://docs.microsoft.com/en-us/typography/opentype/spec/chapter2#language-system-table).
///
/// Holds raw feature list indices. Mapping them to actual features is the
/// consumer's job, via [`FeatureList`](crate::FeatureList) or otherwise.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LanguageRecord {
    /// The language system tag from the script's directory.
    ///
    /// `None` for a script's implicit default language, which is reached
    /// through an offset rather than a directory entry and has no tag of
    /// its own.
    pub tag: Option<Tag>,

    /// Raw index of the required feature.
    ///
    /// Stored verbatim, including the
    /// [`NO_REQUIRED_FEATURE`](Self::NO_REQUIRED_FEATURE) sentinel.
    pub required_feature: u16,

    /// Feature list indices in the font's declared application order.
    ///
    /// Duplicates are legal and preserved.
    pub features: Vec<u16>,
}

impl LanguageRecord {
    /// The `required_feature` value that means "no required feature".
    pub const NO_REQUIRED_FEATURE: u16 = 0xFFFF;
}

/// A parsed [Script Table](https://docs.microsoft.com/en-us/typography/opentype/spec/chapter2#script-table-and-language-system-record).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScriptRecord {
    /// The script tag from the script list directory.
    pub tag: Tag,

    /// Explicitly declared language systems, in directory order.
    pub languages: Vec<LanguageRecord>,

    /// The language system reached through the script's default-language
    /// offset, if that offset is non-zero.
    ///
    /// A separate table that is not required to also appear in
    /// [`languages`](Self::languages).
    pub default_language: Option<LanguageRecord>,
}

/// A parsed [Script List Table](https://docs.microsoft.com/en-us/typography/opentype/spec/chapter2#script-list-table-and-script-record):
/// every script a font's `GSUB` or `GPOS` table declares, in directory
/// order.
///
/// Built once, immutable afterwards. Nothing is sorted, merged or
/// deduplicated; a malformed font with two records bearing the same tag
/// keeps both, and lookups are defined by scan order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScriptList {
    records: Vec<ScriptRecord>,
}

impl ScriptList {
    /// The default script tag.
    ///
    /// Can also be passed to [`resolve`](Self::resolve) as an explicit
    /// candidate to request default behavior.
    pub const DEFAULT_SCRIPT: Tag = Tag::from_bytes(b"DFLT");

    /// Parses the script list at `script_list_offset` in `data`.
    ///
    /// `data` is the font's table space; every location inside the list is
    /// resolved against its parent table per the OpenType spec. Parsing is
    /// all-or-nothing: a truncated or out-of-range read fails the whole
    /// list with a [`DecodeError`].
    pub fn parse(data: &[u8], script_list_offset: usize) -> Result<Self, DecodeError> {
        let mut s = Stream::new(data);
        s.seek(script_list_offset);
        let tags_locs = read_tag_and_locations(&mut s, script_list_offset)?;

        let mut records = Vec::with_capacity(tags_locs.len());
        for tag_loc in &tags_locs {
            records.push(parse_script(&mut s, tag_loc)?);
        }

        if records.iter().filter(|r| r.tag == Self::DEFAULT_SCRIPT).count() > 1 {
            warn!("the script list has multiple DFLT records; only the first is reachable");
        }

        Ok(ScriptList { records })
    }

    /// Returns all script records, in directory order.
    pub fn records(&self) -> &[ScriptRecord] {
        &self.records
    }

    /// Returns the best matching language system for the given request.
    ///
    /// `scripts` are candidate script tags in the caller's preference
    /// order; `language` is the desired language system tag. The first
    /// candidate present in the list wins, scanning the list in directory
    /// order. When no candidate matches, the first
    /// [`DEFAULT_SCRIPT`](Self::DEFAULT_SCRIPT) record is used instead.
    /// Within the chosen script, an explicit `language` match wins over
    /// the script's default language.
    ///
    /// Returns `None` when the font has no usable record at all. That is a
    /// normal outcome, not an error: the caller should fall back to its
    /// own default shaping.
    ///
    /// This is a pure lookup. It never mutates the list, and repeated
    /// calls with the same arguments return the same record.
    pub fn resolve(&self, scripts: &[Tag], language: Tag) -> Option<&LanguageRecord> {
        let mut found: Option<&ScriptRecord> = None;
        let mut default: Option<&ScriptRecord> = None;

        for record in &self.records {
            if record.tag == Self::DEFAULT_SCRIPT {
                default = Some(record);
                break;
            }
        }

        for &script in scripts {
            for record in &self.records {
                if record.tag == script {
                    found = Some(record);
                    break;
                }

                // A DFLT candidate reassigns the default script to the
                // record being visited, so with no DFLT record in the list
                // the last record wins. Pinned by a test; callers depend on
                // this exact scan order.
                if script == Self::DEFAULT_SCRIPT {
                    default = Some(record);
                }
            }

            if found.is_some() {
                break;
            }
        }

        let script = found.or(default)?;
        script
            .languages
            .iter()
            .find(|lang| lang.tag == Some(language))
            .or(script.default_language.as_ref())
    }
}

fn parse_script(s: &mut Stream, tag_loc: &TagAndLocation) -> Result<ScriptRecord, DecodeError> {
    s.seek(tag_loc.location);
    let default_language_offset = read_u16(s, "default language offset")?;
    // Relative to the script table itself, not to the script list.
    // Zero means there is no default language.
    let default_language_location = if default_language_offset > 0 {
        Some(tag_loc.location + usize::from(default_language_offset))
    } else {
        None
    };

    let tags_locs = read_tag_and_locations(s, tag_loc.location)?;
    let mut languages = Vec::with_capacity(tags_locs.len());
    for lang_loc in &tags_locs {
        languages.push(parse_language(s, Some(lang_loc.tag), lang_loc.location)?);
    }

    let default_language = match default_language_location {
        Some(location) => Some(parse_language(s, None, location)?),
        None => None,
    };

    Ok(ScriptRecord {
        tag: tag_loc.tag,
        languages,
        default_language,
    })
}

fn parse_language(
    s: &mut Stream,
    tag: Option<Tag>,
    location: usize,
) -> Result<LanguageRecord, DecodeError> {
    // Skip the reserved "lookup order" field.
    s.seek(location + 2);
    let required_feature = read_u16(s, "required feature index")?;
    let count = read_u16(s, "feature count")?;
    let features = read_u16_array(s, count, "feature index")?;

    Ok(LanguageRecord {
        tag,
        required_feature,
        features,
    })
}
