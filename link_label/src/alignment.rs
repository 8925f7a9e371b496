// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between label (view) coordinates and layout (container) coordinates.

use peniko::kurbo::{Point, Rect, Size, Vec2};

/// Horizontal alignment of the label's text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Aligned according to the writing direction. Positioned like [`Left`](Self::Left).
    #[default]
    Natural,
    /// Aligned to the left edge.
    Left,
    /// Centered.
    Center,
    /// Aligned to the right edge.
    Right,
    /// Justified. Positioned like [`Left`](Self::Left).
    Justified,
}

impl TextAlignment {
    /// The fraction of the free space placed before the used bounding box.
    ///
    /// Only `Left`, `Center` and `Right` have their own ratio; every other alignment uses the
    /// left ratio.
    pub fn ratio(self) -> f64 {
        match self {
            Self::Center => 0.5,
            Self::Right => 1.0,
            Self::Left | Self::Natural | Self::Justified => 0.0,
        }
    }
}

/// The offset of the layout's coordinate space inside the label bounds.
///
/// `used` is the bounding box of the laid-out text in layout coordinates and `container` the
/// label bounds. On each axis the free space is split by the alignment ratio, which places the
/// used box where the text is drawn:
///
/// `offset = (container - used.size) * ratio - used.origin`
///
/// The ratio applies to the vertical axis as well.
pub fn container_offset(alignment: TextAlignment, container: Size, used: Rect) -> Vec2 {
    let ratio = alignment.ratio();
    Vec2::new(
        (container.width - used.width()) * ratio - used.x0,
        (container.height - used.height()) * ratio - used.y0,
    )
}

/// Maps a view-local point into layout coordinates, given the [`container_offset`].
pub fn to_container(point: Point, offset: Vec2) -> Point {
    point - offset
}
