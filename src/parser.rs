//! Binary parsing primitives.
//!
//! This is a low-level module. You should not need it unless you are
//! decoding a table layout this crate does not cover.

/// A trait for parsing raw binary data.
pub trait FromData: Sized {
    /// Object's raw data size.
    const SIZE: usize;

    /// Parses an object from raw data.
    ///
    /// `data` is guaranteed to be exactly `SIZE` bytes long.
    fn parse(data: &[u8]) -> Option<Self>;
}

impl FromData for u16 {
    const SIZE: usize = 2;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        use core::convert::TryInto;
        data.try_into().ok().map(u16::from_be_bytes)
    }
}

/// A streaming binary parser over a borrowed byte slice.
///
/// The cursor position is absolute within `data`, so offsets read from one
/// table can be chased into another without rebasing the slice. All reads
/// are big-endian and bounds-checked. `seek` itself is unchecked; a cursor
/// placed out of range fails on the next read instead.
#[derive(Clone, Copy, Debug)]
pub struct Stream<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Stream<'a> {
    /// Creates a new `Stream` positioned at the start of `data`.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Stream { data, offset: 0 }
    }

    /// Returns the current cursor position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the cursor to an absolute position.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Returns the number of bytes between the cursor and the end of data.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Advances the cursor past one `T` without decoding it.
    #[inline]
    pub fn skip<T: FromData>(&mut self) {
        self.offset += T::SIZE;
    }

    /// Reads one `T` at the cursor and advances past it.
    ///
    /// On failure the cursor is left where the read was attempted.
    #[inline]
    pub fn read<T: FromData>(&mut self) -> Option<T> {
        let start = self.offset;
        let end = start.checked_add(T::SIZE)?;
        let data = self.data.get(start..end)?;
        self.offset = end;
        T::parse(data)
    }
}
