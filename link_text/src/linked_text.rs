// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::error::validate_range;
use crate::{Error, Segments, TextStorage};

/// A contiguous byte range of a [`LinkedText`] that carries a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRun<L> {
    /// The half-open byte range covered by the link.
    pub range: Range<usize>,
    /// The link value.
    pub link: L,
}

/// A block of text with links applied to ranges within it.
///
/// Link runs are kept in document order, are never empty and never overlap.
#[derive(Clone, Debug)]
pub struct LinkedText<T: Debug + TextStorage, L: Debug> {
    text: T,
    runs: Vec<LinkRun<L>>,
}

impl<T: Debug + TextStorage, L: Debug> LinkedText<T, L> {
    /// Create a `LinkedText` without any links.
    pub fn new(text: T) -> Self {
        Self {
            text,
            runs: Vec::new(),
        }
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrow the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Tag `range` with `link`.
    ///
    /// Any part of an existing run that falls inside `range` is replaced. Parts outside of it
    /// keep their old link, so a run that spans the whole of `range` is split in two.
    /// Tagging an empty range is valid and does nothing.
    pub fn set_link(&mut self, range: Range<usize>, link: L) -> Result<(), Error>
    where
        L: Clone,
    {
        validate_range(&self.text, &range)?;
        if range.is_empty() {
            return Ok(());
        }
        let index = self.carve(&range);
        self.runs.insert(index, LinkRun { range, link });
        Ok(())
    }

    /// Tag the first literal occurrence of `needle` with `link`.
    ///
    /// Returns `false`, leaving the text untouched, if `needle` does not occur (or is empty).
    /// Later occurrences are never tagged.
    pub fn set_as_link(&mut self, needle: &str, link: L) -> bool
    where
        L: Clone,
    {
        let Some(start) = self.text.find(needle) else {
            return false;
        };
        self.set_link(start..start + needle.len(), link).is_ok()
    }

    /// Remove link coverage from `range`, trimming or splitting the runs it touches.
    pub fn remove_links(&mut self, range: Range<usize>) -> Result<(), Error>
    where
        L: Clone,
    {
        validate_range(&self.text, &range)?;
        if !range.is_empty() {
            self.carve(&range);
        }
        Ok(())
    }

    /// Returns the run containing the byte at `index`, if that byte is part of a link.
    pub fn link_at(&self, index: usize) -> Option<(Range<usize>, &L)> {
        let position = self.runs.partition_point(|run| run.range.end <= index);
        let run = self.runs.get(position)?;
        run.range
            .contains(&index)
            .then(|| (run.range.clone(), &run.link))
    }

    /// Iterate over the link runs in document order.
    pub fn links(&self) -> impl ExactSizeIterator<Item = &LinkRun<L>> + Clone {
        self.runs.iter()
    }

    /// Iterate over the segments covering the whole text, linked or not, in document order.
    pub fn segments(&self) -> Segments<'_, L> {
        Segments::new(&self.runs, self.text.len())
    }

    /// Returns the number of link runs.
    pub fn links_len(&self) -> usize {
        self.runs.len()
    }

    /// Remove all links.
    pub fn clear_links(&mut self) {
        self.runs.clear();
    }

    /// Clears `range` out of the existing runs and returns where a run starting at
    /// `range.start` belongs.
    fn carve(&mut self, range: &Range<usize>) -> usize
    where
        L: Clone,
    {
        let mut index = self.runs.partition_point(|run| run.range.end <= range.start);
        let mut tail = None;
        while index < self.runs.len() && self.runs[index].range.start < range.end {
            let run = &mut self.runs[index];
            if run.range.start < range.start {
                if run.range.end > range.end {
                    tail = Some(LinkRun {
                        range: range.end..run.range.end,
                        link: run.link.clone(),
                    });
                }
                run.range.end = range.start;
                index += 1;
            } else if run.range.end > range.end {
                run.range.start = range.end;
                break;
            } else {
                self.runs.remove(index);
            }
        }
        if let Some(tail) = tail {
            self.runs.insert(index, tail);
        }
        index
    }
}
