// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contiguous segmentation of a [`LinkedText`](crate::LinkedText).

use core::ops::Range;

use crate::LinkRun;

/// One contiguous piece of a text, with the link covering it (if any).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a, L> {
    /// The byte range of the segment.
    pub range: Range<usize>,
    /// The link covering the whole segment, or `None` for plain text.
    pub link: Option<&'a L>,
}

/// Iterator over the [`Segment`]s of a text, in document order.
///
/// Segments are non-empty and together cover the text exactly once. Gaps between link runs
/// are reported as segments without a link.
#[derive(Clone, Debug)]
pub struct Segments<'a, L> {
    runs: &'a [LinkRun<L>],
    position: usize,
    len: usize,
}

impl<'a, L> Segments<'a, L> {
    pub(crate) fn new(runs: &'a [LinkRun<L>], len: usize) -> Self {
        Self {
            runs,
            position: 0,
            len,
        }
    }
}

impl<'a, L> Iterator for Segments<'a, L> {
    type Item = Segment<'a, L>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.len {
            return None;
        }
        match self.runs.split_first() {
            Some((run, rest)) if run.range.start <= self.position => {
                self.runs = rest;
                self.position = run.range.end;
                Some(Segment {
                    range: run.range.clone(),
                    link: Some(&run.link),
                })
            }
            next => {
                let end = next.map_or(self.len, |(run, _)| run.range.start);
                let range = self.position..end;
                self.position = end;
                Some(Segment { range, link: None })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{LinkedText, Segment};
    use alloc::vec::Vec;

    #[test]
    fn segments_cover_text() {
        let mut text = LinkedText::new("Hello! This is link");
        assert!(text.set_as_link("This", 1));
        assert!(text.set_as_link("link", 2));
        let segments: Vec<_> = text.segments().collect();
        assert_eq!(
            segments,
            [
                Segment {
                    range: 0..7,
                    link: None
                },
                Segment {
                    range: 7..11,
                    link: Some(&1)
                },
                Segment {
                    range: 11..15,
                    link: None
                },
                Segment {
                    range: 15..19,
                    link: Some(&2)
                },
            ]
        );
    }

    #[test]
    fn segments_of_plain_and_empty_text() {
        let text = LinkedText::<_, u8>::new("plain");
        assert_eq!(
            text.segments().collect::<Vec<_>>(),
            [Segment {
                range: 0..5,
                link: None
            }]
        );
        let empty = LinkedText::<_, u8>::new("");
        assert_eq!(empty.segments().count(), 0);
    }
}
