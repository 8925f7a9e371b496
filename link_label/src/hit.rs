// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::ops::Range;

use link_text::{LinkedText, Segment, TextStorage};
use peniko::kurbo::{Point, Size};

use crate::{container_offset, to_container, LaidOutText, Link, TextAlignment};

/// A link found under a tap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkHit {
    /// The character index the tap resolved to.
    pub index: usize,
    /// The byte range of the link run containing `index`.
    pub range: Range<usize>,
    /// The link value of the run.
    pub link: Link,
}

/// Finds the link covering the character at `index`.
///
/// Segments are scanned in document order and the first linked one containing `index` wins.
/// Link runs never overlap, so there is at most one.
pub fn resolve_link<T>(text: &LinkedText<T, Link>, index: usize) -> Option<LinkHit>
where
    T: Debug + TextStorage,
{
    text.segments()
        .find_map(|Segment { range, link }| match link {
            Some(link) if range.contains(&index) => Some(LinkHit {
                index,
                range,
                link: link.clone(),
            }),
            _ => None,
        })
}

/// Resolves a tap at `point`, in label coordinates, to the link under it.
///
/// The point is moved into layout coordinates using the alignment offset of `layout` inside
/// `bounds`, the layout is asked for the nearest character, and that character is looked up
/// in the link runs of `text`. `None` means there is no link at the point; that is not an error.
pub fn hit_test<L, T>(
    layout: &L,
    text: &LinkedText<T, Link>,
    alignment: TextAlignment,
    bounds: Size,
    point: Point,
) -> Option<LinkHit>
where
    L: LaidOutText + ?Sized,
    T: Debug + TextStorage,
{
    let offset = container_offset(alignment, bounds, layout.used_rect());
    let index = layout.character_index_at(to_container(point, offset))?;
    resolve_link(text, index)
}
