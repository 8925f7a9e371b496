// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::TextStorage;

/// Error returned when a link range cannot be applied to (or removed from) a text.
///
/// Carries a non-exhaustive [`ErrorKind`], the rejected range, the text length at the time of
/// the failure and, for boundary failures, the character span around the offending index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    text_len: usize,
    boundary: Option<BoundaryInfo>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte range that was rejected.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The length in bytes of the text the range was checked against.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Extra details for [`ErrorKind::NotOnCharBoundary`] errors.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    fn new(kind: ErrorKind, range: &Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            range: range.clone(),
            text_len,
            boundary: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Range { start, end } = self.range;
        match self.kind {
            ErrorKind::InvalidRange => write!(f, "link range {start}..{end} is reversed"),
            ErrorKind::InvalidBounds => write!(
                f,
                "link range {start}..{end} exceeds text length {}",
                self.text_len
            ),
            ErrorKind::NotOnCharBoundary => match self.boundary {
                Some(b) => write!(
                    f,
                    "link range {start}..{end}: {} index {} splits the character at {}..{}",
                    b.which.name(),
                    b.index,
                    b.char_start,
                    b.char_end
                ),
                None => write!(f, "link range {start}..{end} splits a character"),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range had `start > end`.
    InvalidRange,

    /// The range reached past the end of the text.
    InvalidBounds,

    /// Either `start` or `end` fell inside a multi-byte UTF-8 character.
    NotOnCharBoundary,
}

/// Which end of a range failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` of the range.
    Start,

    /// The `end` of the range.
    End,
}

impl Endpoint {
    fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// The character that an invalid range endpoint fell inside of.
///
/// Returned by [`Error::boundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The first byte of the enclosing character.
    pub char_start: usize,

    /// One past the last byte of the enclosing character.
    pub char_end: usize,
}

/// Checks that `range` is ordered, in bounds and on character boundaries of `text`.
pub(crate) fn validate_range<T: TextStorage>(text: &T, range: &Range<usize>) -> Result<(), Error> {
    let text_len = text.len();
    if range.start > range.end {
        return Err(Error::new(ErrorKind::InvalidRange, range, text_len));
    }
    if range.end > text_len {
        return Err(Error::new(ErrorKind::InvalidBounds, range, text_len));
    }
    for (which, index) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
        if !text.is_char_boundary(index) {
            let (char_start, char_end) = enclosing_char(text, index);
            let mut error = Error::new(ErrorKind::NotOnCharBoundary, range, text_len);
            error.boundary = Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            });
            return Err(error);
        }
    }
    Ok(())
}

/// Finds the character boundaries around `index`, which must be in bounds.
///
/// A UTF-8 character is at most 4 bytes, so both searches stop within 3 steps.
fn enclosing_char<T: TextStorage>(text: &T, index: usize) -> (usize, usize) {
    let start = (index.saturating_sub(3)..index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let end = (index + 1..=(index + 3).min(text.len()))
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(text.len());
    (start, end)
}
