//! OpenType layout tables.
//!
//! Shared plumbing for the tag-indexed table lists, plus one module per
//! table reader. Script, feature and lookup lists all start with the same
//! directory layout: a 16-bit count followed by (tag, 16-bit offset)
//! pairs, with offsets relative to the directory's own table.

pub mod features;
pub mod scripts;

use alloc::vec::Vec;

use crate::parser::{FromData, Stream};
use crate::{DecodeError, Tag};

/// A resolved tag directory entry.
///
/// `location` is absolute within the font's table space, already adjusted
/// against the directory's base. Transient: consumed by the table readers
/// and never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct TagAndLocation {
    pub tag: Tag,
    pub location: usize,
}

// Size of one raw (tag, offset) directory record.
const TAG_RECORD_SIZE: usize = Tag::SIZE + u16::SIZE;

pub(crate) fn read_u16(s: &mut Stream, field: &'static str) -> Result<u16, DecodeError> {
    let offset = s.offset();
    s.read::<u16>().ok_or(DecodeError { offset, field })
}

pub(crate) fn read_tag(s: &mut Stream, field: &'static str) -> Result<Tag, DecodeError> {
    let offset = s.offset();
    s.read::<Tag>().ok_or(DecodeError { offset, field })
}

/// Reads `count` consecutive 16-bit values at the cursor.
pub(crate) fn read_u16_array(
    s: &mut Stream,
    count: u16,
    field: &'static str,
) -> Result<Vec<u16>, DecodeError> {
    // Reject counts that cannot possibly fit before reserving.
    if usize::from(count) * u16::SIZE > s.remaining() {
        return Err(DecodeError { offset: s.offset(), field });
    }

    let mut values = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        values.push(read_u16(s, field)?);
    }
    Ok(values)
}

/// Reads a tag directory at the cursor: a 16-bit count followed by that
/// many (tag, offset) pairs.
///
/// Offsets are relative to `base` and are resolved to absolute locations
/// before being returned. `base` is passed explicitly because it is not
/// always the position the count was read from: a script table's language
/// directory starts 2 bytes into the table it is based on.
pub(crate) fn read_tag_and_locations(
    s: &mut Stream,
    base: usize,
) -> Result<Vec<TagAndLocation>, DecodeError> {
    let count_offset = s.offset();
    let count = read_u16(s, "record count")?;

    // Reject counts that cannot possibly fit before reserving.
    if usize::from(count) * TAG_RECORD_SIZE > s.remaining() {
        return Err(DecodeError { offset: count_offset, field: "record count" });
    }

    let mut records = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        let tag = read_tag(s, "record tag")?;
        let offset = read_u16(s, "record offset")?;
        records.push(TagAndLocation {
            tag,
            location: base + usize::from(offset),
        });
    }
    Ok(records)
}
