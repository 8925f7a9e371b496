// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{BezPath, Point, Shape, Vec2};
use peniko::Color;

use crate::{GlyphRect, LaidOutText};

/// Glyph boxes of a label in view coordinates, for checking hit-test alignment by eye.
///
/// Purely diagnostic: building or drawing an overlay has no effect on hit testing.
#[derive(Clone, Debug)]
pub struct DebugOverlay {
    /// One box per glyph cluster, already moved by the label's alignment offset.
    pub glyphs: Vec<GlyphRect>,
    /// Suggested fill color for the boxes.
    pub fill: Color,
    /// Suggested stroke color for the box outlines.
    pub stroke: Color,
    /// Suggested stroke width.
    pub stroke_width: f64,
}

impl DebugOverlay {
    /// Collects the glyph boxes of `layout` and moves them by `offset` into view coordinates.
    pub fn new<L: LaidOutText + ?Sized>(layout: &L, offset: Vec2) -> Self {
        let glyphs = layout
            .glyph_rects()
            .into_iter()
            .map(|glyph| GlyphRect {
                range: glyph.range,
                rect: glyph.rect + offset,
            })
            .collect();
        Self {
            glyphs,
            fill: Color::from_rgba8(255, 0, 0, 40),
            stroke: Color::from_rgba8(255, 0, 0, 255),
            stroke_width: 1.0,
        }
    }

    /// A single path outlining every glyph box.
    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        for glyph in &self.glyphs {
            path.extend(glyph.rect.path_elements(0.1));
        }
        path
    }

    /// The glyph box containing `point`, if any.
    pub fn glyph_at(&self, point: Point) -> Option<&GlyphRect> {
        self.glyphs.iter().find(|glyph| glyph.rect.contains(point))
    }
}
