// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley backend for [`link_label`].
//!
//! [`ParleyEngine`] owns a Parley [`FontContext`] and [`LayoutContext`] and turns a
//! [`LayoutRequest`] into a [`ParleyText`], which answers the hit-testing and debug queries of
//! [`LaidOutText`].
//!
//! ```no_run
//! use link_label::kurbo::{Point, Size};
//! use link_label::{LabelText, Link, LinkLabel, TextAlignment};
//! use link_label_parley::ParleyEngine;
//!
//! let mut text = LabelText::new("Hello! This is link".to_string());
//! text.set_as_link("link", Link::from("https://www.google1.com"));
//!
//! let mut label = LinkLabel::new(ParleyEngine::new())
//!     .with_bounds(Size::new(300.0, 40.0))
//!     .with_text(text);
//! label.set_alignment(TextAlignment::Center);
//! let hit = label.handle_tap(Point::new(150.0, 20.0));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::fmt;

use link_label::kurbo::{Point, Rect};
use link_label::{
    GlyphRect, LabelStyle, LabelText, LaidOutText, LayoutRequest, LineBreak, TextAlignment,
    TextLayoutEngine,
};
use parley::{
    Affinity, Alignment, AlignmentOptions, Cursor, FontContext, Layout, LayoutContext,
    OverflowWrap, PositionedLayoutItem, StyleProperty,
};
use peniko::Color;

#[cfg(test)]
mod tests;

/// The brush attached to every run of a label's layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkBrush {
    /// Text color of the run.
    pub color: Color,
}

impl Default for LinkBrush {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
        }
    }
}

/// Lays label text out with Parley.
pub struct ParleyEngine {
    font_cx: FontContext,
    layout_cx: LayoutContext<LinkBrush>,
    quantize: bool,
}

impl fmt::Debug for ParleyEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyEngine")
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl Default for ParleyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyEngine {
    /// Create an engine with fresh font and layout contexts.
    ///
    /// With the `system` feature the font context discovers system fonts; without it, register
    /// fonts through [`ParleyEngine::font_cx_mut`] before laying anything out.
    pub fn new() -> Self {
        Self::with_contexts(FontContext::new(), LayoutContext::new())
    }

    /// Create an engine from existing contexts, e.g. to share a font collection.
    pub fn with_contexts(font_cx: FontContext, layout_cx: LayoutContext<LinkBrush>) -> Self {
        Self {
            font_cx,
            layout_cx,
            quantize: true,
        }
    }

    /// Builder method for glyph position quantization. On by default.
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    /// The font context.
    pub fn font_cx(&self) -> &FontContext {
        &self.font_cx
    }

    /// Mutable access to the font context.
    pub fn font_cx_mut(&mut self) -> &mut FontContext {
        &mut self.font_cx
    }

    fn shape(&mut self, text: &str, label: &LabelText, style: &LabelStyle) -> Layout<LinkBrush> {
        let mut builder =
            self.layout_cx
                .ranged_builder(&mut self.font_cx, text, style.scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(style.font_size));
        builder.push_default(StyleProperty::Brush(LinkBrush {
            color: style.text_color,
        }));
        if style.line_break == LineBreak::CharWrap {
            builder.push_default(StyleProperty::OverflowWrap(OverflowWrap::Anywhere));
        }
        for run in label.links() {
            // Runs past a truncated prefix are dropped; the rest are clamped to it.
            if run.range.start >= text.len() {
                break;
            }
            let range = run.range.start..run.range.end.min(text.len());
            if let Some(color) = style.link_color {
                builder.push(StyleProperty::Brush(LinkBrush { color }), range.clone());
            }
            if style.underline_links {
                builder.push(StyleProperty::Underline(true), range);
            }
        }
        builder.build(text)
    }
}

impl TextLayoutEngine for ParleyEngine {
    type Layout = ParleyText;

    fn layout(&mut self, request: &LayoutRequest<'_>) -> ParleyText {
        let style = request.style;
        let full = request.text.as_str();
        let max_advance = style
            .line_break
            .wraps()
            .then_some(to_f32(request.container.width));

        let mut layout = self.shape(full, request.text, style);
        layout.break_all_lines(max_advance);
        let mut text_len = full.len();
        if let Some(max_lines) = style.max_lines {
            let cut = (layout.len() > max_lines.get())
                .then(|| layout.get(max_lines.get() - 1))
                .flatten()
                .map(|line| trim_line_break(&full[..line.text_range().end]).len());
            if let Some(cut) = cut {
                tracing::trace!(
                    target: "link_label_parley",
                    lines = layout.len(),
                    max_lines = max_lines.get(),
                    cut,
                    "truncating layout"
                );
                text_len = cut;
                layout = self.shape(&full[..cut], request.text, style);
                layout.break_all_lines(max_advance);
            }
        }
        layout.align(
            None,
            to_parley_alignment(style.alignment),
            AlignmentOptions::default(),
        );
        tracing::trace!(
            target: "link_label_parley",
            lines = layout.len(),
            width = layout.width(),
            height = layout.height(),
            "built layout"
        );
        ParleyText { layout, text_len }
    }
}

/// Drops a hard line break ending `text`, which would otherwise start one more empty line.
fn trim_line_break(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| {
            text.strip_suffix(|c: char| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
        })
        .unwrap_or(text)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Parley works in f32; label geometry never needs more precision."
)]
fn to_f32(value: f64) -> f32 {
    value as f32
}

fn to_parley_alignment(alignment: TextAlignment) -> Alignment {
    match alignment {
        TextAlignment::Natural => Alignment::Start,
        TextAlignment::Left => Alignment::Left,
        TextAlignment::Center => Alignment::Center,
        TextAlignment::Right => Alignment::Right,
        TextAlignment::Justified => Alignment::Justify,
    }
}

/// A label's text laid out by Parley.
#[derive(Clone)]
pub struct ParleyText {
    layout: Layout<LinkBrush>,
    text_len: usize,
}

impl fmt::Debug for ParleyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyText")
            .field("lines", &self.layout.len())
            .field("width", &self.layout.width())
            .field("height", &self.layout.height())
            .field("text_len", &self.text_len)
            .finish_non_exhaustive()
    }
}

impl ParleyText {
    /// The underlying Parley layout, e.g. for rendering.
    pub fn layout(&self) -> &Layout<LinkBrush> {
        &self.layout
    }

    /// Length in bytes of the text that was laid out.
    ///
    /// Shorter than the label text when a line limit cut it.
    pub fn text_len(&self) -> usize {
        self.text_len
    }
}

impl LaidOutText for ParleyText {
    fn used_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.layout.width()),
            f64::from(self.layout.height()),
        )
    }

    fn character_index_at(&self, point: Point) -> Option<usize> {
        if self.text_len == 0 {
            return None;
        }
        let cursor = Cursor::from_point(&self.layout, to_f32(point.x), to_f32(point.y));
        let [upstream, downstream] = cursor.logical_clusters(&self.layout);
        let cluster = match cursor.affinity() {
            Affinity::Upstream => upstream.or(downstream),
            Affinity::Downstream => downstream.or(upstream),
        }?;
        Some(cluster.text_range().start)
    }

    fn glyph_rects(&self) -> Vec<GlyphRect> {
        let mut rects = Vec::new();
        for line in self.layout.lines() {
            let metrics = line.metrics();
            let (y0, y1) = (f64::from(metrics.min_coord), f64::from(metrics.max_coord));
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = f64::from(glyph_run.offset());
                for cluster in glyph_run.run().visual_clusters() {
                    let advance = f64::from(cluster.advance());
                    rects.push(GlyphRect {
                        range: cluster.text_range(),
                        rect: Rect::new(x, y0, x + advance, y1),
                    });
                    x += advance;
                }
            }
        }
        rects
    }
}
