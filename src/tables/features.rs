//! A [Feature List Table](https://docs.microsoft.com/en-us/typography/opentype/spec/chapter2#feature-list-table)
//! reader.
//!
//! The feature list is what the feature indices in a
//! [`LanguageRecord`](crate::LanguageRecord) point into. Reading it uses
//! the same tag directory layout as the script list.

use alloc::vec::Vec;

use super::{read_tag_and_locations, read_u16, read_u16_array};
use crate::parser::Stream;
use crate::{DecodeError, Tag};

/// A parsed [Feature Table](https://docs.microsoft.com/en-us/typography/opentype/spec/chapter2#feature-table).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FeatureRecord {
    /// The feature tag from the feature list directory.
    pub tag: Tag,

    /// Lookup list indices, in the font's declared order.
    ///
    /// The lookup list itself is outside this crate's scope; the indices
    /// are stored verbatim.
    pub lookups: Vec<u16>,
}

/// A parsed [Feature List Table](https://docs.microsoft.com/en-us/typography/opentype/spec/chapter2#feature-list-table),
/// in directory order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FeatureList {
    records: Vec<FeatureRecord>,
}

impl FeatureList {
    /// Parses the feature list at `feature_list_offset` in `data`.
    ///
    /// Same contract as [`ScriptList::parse`](crate::ScriptList::parse):
    /// single pass, all-or-nothing.
    pub fn parse(data: &[u8], feature_list_offset: usize) -> Result<Self, DecodeError> {
        let mut s = Stream::new(data);
        s.seek(feature_list_offset);
        let tags_locs = read_tag_and_locations(&mut s, feature_list_offset)?;

        let mut records = Vec::with_capacity(tags_locs.len());
        for tag_loc in &tags_locs {
            // Skip the feature params offset; no feature read here uses it.
            s.seek(tag_loc.location + 2);
            let count = read_u16(&mut s, "lookup count")?;
            let lookups = read_u16_array(&mut s, count, "lookup index")?;
            records.push(FeatureRecord { tag: tag_loc.tag, lookups });
        }

        Ok(FeatureList { records })
    }

    /// Returns all feature records, in directory order.
    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    /// Returns the feature a [`LanguageRecord`](crate::LanguageRecord)
    /// feature index points at.
    pub fn get(&self, index: u16) -> Option<&FeatureRecord> {
        self.records.get(usize::from(index))
    }
}
