/*!
A safe parser and resolver for OpenType layout script, language and feature
tables.

This crate reads the `ScriptList` and `FeatureList` structures shared by the
`GSUB` and `GPOS` tables and resolves a (script, language) request to the
matching language system, with the fallback semantics text shapers expect.

## Features

- Builds an owned, immutable index in a single pass over the font data;
  the input slice can be dropped afterwards.
- Resolution is a pure in-memory lookup. No I/O, no locks, freely
  shareable across threads.
- Zero unsafe.
- `no_std` compatible.

## Error handling

Parsing either produces a complete index or fails with a [`DecodeError`]
naming the offset and the field that could not be read. There is no
partially populated result.

A resolution miss is not an error: [`ScriptList::resolve`] returns `None`
when the font simply has no coverage for the request, and callers are
expected to fall back to their own default shaping.
*/

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "logging")]
macro_rules! warn {
    ($($arg:tt)+) => (
        log::log!(log::Level::Warn, $($arg)+);
    )
}

#[cfg(not(feature = "logging"))]
macro_rules! warn {
    ($($arg:tt)+) => () // do nothing
}

pub mod parser;
mod tables;

#[cfg(test)]
mod writer;

pub use tables::features::{FeatureList, FeatureRecord};
pub use tables::scripts::{LanguageRecord, ScriptList, ScriptRecord};

use parser::FromData;

/// A 4-byte tag.
///
/// Tags are opaque 4-byte keys. They usually hold ASCII, but nothing here
/// requires or checks that.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(pub u32);

impl Tag {
    /// Creates a `Tag` from bytes.
    #[inline]
    pub const fn from_bytes(bytes: &[u8; 4]) -> Self {
        Tag(((bytes[0] as u32) << 24)
            | ((bytes[1] as u32) << 16)
            | ((bytes[2] as u32) << 8)
            | (bytes[3] as u32))
    }

    /// Returns the tag as 4 bytes.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            (self.0 >> 24 & 0xff) as u8,
            (self.0 >> 16 & 0xff) as u8,
            (self.0 >> 8 & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }

    /// Checks if all tag bytes are zero.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Returns the tag value as `u32`.
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Tag({})", self)
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for b in &self.to_bytes() {
            let c = if b.is_ascii_graphic() || *b == b' ' {
                char::from(*b)
            } else {
                '.'
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromData for Tag {
    const SIZE: usize = 4;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        use core::convert::TryInto;
        let bytes: &[u8; 4] = data.try_into().ok()?;
        Some(Tag::from_bytes(bytes))
    }
}

/// A table decoding error.
///
/// Table construction is all-or-nothing: the first truncated or
/// out-of-range read aborts parsing and reports the failing position here.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecodeError {
    /// Absolute offset at which decoding failed.
    pub offset: usize,
    /// Name of the field that was being decoded.
    pub field: &'static str,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to read {} at offset {}: unexpected end of data",
            self.field, self.offset
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
