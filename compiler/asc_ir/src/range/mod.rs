//! Source ranges.
//!
//! A [`Range`] is a half-open `[start, end)` byte-offset pair plus the
//! [`SourceId`] of the source it points into. Ranges never own their source;
//! the id is resolved through a [`SourceMap`](crate::SourceMap) that outlives
//! every range handed out for it.

use std::fmt;

use thiserror::Error;

/// Handle of a registered source inside a [`SourceMap`](crate::SourceMap).
///
/// Layout: 4 bytes, the index of the source in registration order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceId(u32);

impl SourceId {
    /// Create an id from a raw registry index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        SourceId(raw)
    }

    /// The raw registry index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceId({})", self.0)
    }
}

/// Errors raised when building or combining ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Two ranges from different sources were joined.
    #[error("source mismatch: cannot join ranges of {left:?} and {right:?}")]
    SourceMismatch { left: SourceId, right: SourceId },
    /// The offsets do not describe a valid `[start, end)` pair.
    #[error("invalid range {start}..{end}")]
    OutOfBounds { start: usize, end: usize },
}

/// Half-open byte range inside one source.
///
/// Layout: 12 bytes total
/// - source: `SourceId` - owning source handle
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
///
/// Equality is structural: same source and same offsets.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub source: SourceId,
    pub start: u32,
    pub end: u32,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub fn new(source: SourceId, start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "range start {start} exceeds end {end}");
        Range { source, start, end }
    }

    /// Try to create a range from `usize` offsets.
    ///
    /// Fails if `start > end` or either offset does not fit into a `u32`.
    pub fn try_new(source: SourceId, start: usize, end: usize) -> Result<Self, RangeError> {
        let out_of_bounds = || RangeError::OutOfBounds { start, end };
        if start > end {
            return Err(out_of_bounds());
        }
        let start32 = u32::try_from(start).map_err(|_| out_of_bounds())?;
        let end32 = u32::try_from(end).map_err(|_| out_of_bounds())?;
        Ok(Range::new(source, start32, end32))
    }

    /// Zero-width range at `offset`.
    #[inline]
    pub fn point(source: SourceId, offset: u32) -> Self {
        Range {
            source,
            start: offset,
            end: offset,
        }
    }

    /// Smallest range covering both `self` and `other`.
    ///
    /// Both ranges must belong to the same source.
    pub fn join(self, other: Range) -> Result<Range, RangeError> {
        if self.source != other.source {
            return Err(RangeError::SourceMismatch {
                left: self.source,
                right: other.source,
            });
        }
        Ok(Range {
            source: self.source,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// Zero-width range at this range's start.
    #[inline]
    #[must_use]
    pub fn at_start(self) -> Range {
        Range::point(self.source, self.start)
    }

    /// Zero-width range at this range's end.
    #[inline]
    #[must_use]
    pub fn at_end(self) -> Range {
        Range::point(self.source, self.end)
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this range.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Convert to a `std::ops::Range` for slicing source text.
    #[inline]
    pub fn to_std(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The source text covered by this range.
    ///
    /// Returns an empty string if the offsets do not fall on character
    /// boundaries of the source text.
    pub fn text<'a>(&self, sources: &'a crate::SourceMap) -> &'a str {
        sources[self.source].text().get(self.to_std()).unwrap_or("")
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.source.0, self.start, self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Range;
    crate::static_assert_size!(Range, 12);
}

#[cfg(test)]
mod tests;
