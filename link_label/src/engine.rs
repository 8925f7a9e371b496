// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the label and the text layout engine.

use core::ops::Range;

use peniko::kurbo::{Point, Rect, Size};

use crate::{LabelStyle, LabelText};

/// Everything an engine needs to lay out a label.
#[derive(Clone, Copy, Debug)]
pub struct LayoutRequest<'a> {
    /// The text and its link runs.
    pub text: &'a LabelText,
    /// Font, colors, alignment and line breaking.
    pub style: &'a LabelStyle,
    /// The label bounds. Wrapping lines uses `container.width`.
    pub container: Size,
}

/// The box of one glyph cluster, in layout coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRect {
    /// The byte range of the text the cluster was shaped from.
    pub range: Range<usize>,
    /// The box covering the cluster's advance and its line's height.
    pub rect: Rect,
}

/// The result of laying out a label's text.
///
/// Coordinates are relative to the layout's own origin. A [`LinkLabel`](crate::LinkLabel)
/// positions the [`used_rect`](Self::used_rect) inside its bounds with
/// [`container_offset`](crate::container_offset).
pub trait LaidOutText {
    /// The bounding box of the laid-out text.
    fn used_rect(&self) -> Rect;

    /// The byte index of the character whose glyph is nearest to `point`.
    ///
    /// Returns `None` only when there is nothing to hit, such as for empty text.
    /// Ties are resolved by the engine.
    fn character_index_at(&self, point: Point) -> Option<usize>;

    /// One box per glyph cluster, in visual order.
    fn glyph_rects(&self) -> Vec<GlyphRect>;
}

/// Builds [`LaidOutText`] values for a label.
pub trait TextLayoutEngine {
    /// The layout type produced.
    type Layout: LaidOutText;

    /// Lay out `request.text` inside `request.container`.
    fn layout(&mut self, request: &LayoutRequest<'_>) -> Self::Layout;
}
