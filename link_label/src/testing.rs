// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic layout engine for tests.
//!
//! Every character advances by [`ADVANCE`] and every line is [`LINE_HEIGHT`] tall, so
//! expected geometry can be computed by hand without any fonts.

use peniko::kurbo::{Point, Rect};

use crate::{GlyphRect, LaidOutText, LayoutRequest, TextAlignment, TextLayoutEngine};

pub(crate) const ADVANCE: f64 = 10.0;
pub(crate) const LINE_HEIGHT: f64 = 20.0;

/// Lays text out on a fixed grid, counting how many layouts it built.
#[derive(Debug, Default)]
pub(crate) struct MonospaceEngine {
    pub(crate) layouts_built: usize,
}

#[derive(Debug)]
struct Line {
    /// Byte index and character of every glyph on the line.
    glyphs: Vec<(usize, char)>,
    /// Alignment offset of the line inside the used box.
    offset: f64,
}

#[derive(Debug)]
pub(crate) struct MonospaceLayout {
    lines: Vec<Line>,
    width: f64,
}

impl TextLayoutEngine for MonospaceEngine {
    type Layout = MonospaceLayout;

    fn layout(&mut self, request: &LayoutRequest<'_>) -> MonospaceLayout {
        self.layouts_built += 1;
        let style = request.style;
        let wrap_width = style.line_break.wraps().then_some(request.container.width);
        let char_wrap = style.line_break == crate::LineBreak::CharWrap;
        let mut lines = break_lines(request.text.as_str(), wrap_width, char_wrap);
        if let Some(max_lines) = style.max_lines {
            lines.truncate(max_lines.get());
        }
        let width = lines
            .iter()
            .map(|glyphs| glyphs.len() as f64 * ADVANCE)
            .fold(0.0, f64::max);
        let ratio = match style.alignment {
            TextAlignment::Center => 0.5,
            TextAlignment::Right => 1.0,
            _ => 0.0,
        };
        let lines = lines
            .into_iter()
            .map(|glyphs| Line {
                offset: (width - glyphs.len() as f64 * ADVANCE) * ratio,
                glyphs,
            })
            .collect();
        MonospaceLayout { lines, width }
    }
}

fn break_lines(text: &str, wrap_width: Option<f64>, char_wrap: bool) -> Vec<Vec<(usize, char)>> {
    let mut lines = vec![Vec::new()];
    for (index, ch) in text.char_indices() {
        if ch == '\n' {
            lines.push(Vec::new());
            continue;
        }
        let line = lines.last_mut().unwrap();
        if let Some(width) = wrap_width {
            let overflows = (line.len() + 1) as f64 * ADVANCE > width;
            if ch != ' ' && overflows && !line.is_empty() {
                let split = if char_wrap {
                    line.len()
                } else {
                    line.iter()
                        .rposition(|&(_, c)| c == ' ')
                        .map_or(line.len(), |space| space + 1)
                };
                let carried = line.split_off(split);
                lines.push(carried);
            }
        }
        lines.last_mut().unwrap().push((index, ch));
    }
    lines
}

impl LaidOutText for MonospaceLayout {
    fn used_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.lines.len() as f64 * LINE_HEIGHT)
    }

    fn character_index_at(&self, point: Point) -> Option<usize> {
        let last_line = self.lines.len().checked_sub(1)?;
        let line_index = ((point.y / LINE_HEIGHT).floor().max(0.0) as usize).min(last_line);
        let line = &self.lines[line_index];
        let last_glyph = line.glyphs.len().checked_sub(1)?;
        let column = ((point.x - line.offset) / ADVANCE).floor().max(0.0) as usize;
        Some(line.glyphs[column.min(last_glyph)].0)
    }

    fn glyph_rects(&self) -> Vec<GlyphRect> {
        let mut rects = Vec::new();
        for (line_index, line) in self.lines.iter().enumerate() {
            let y0 = line_index as f64 * LINE_HEIGHT;
            for (column, &(index, ch)) in line.glyphs.iter().enumerate() {
                let x0 = line.offset + column as f64 * ADVANCE;
                rects.push(GlyphRect {
                    range: index..index + ch.len_utf8(),
                    rect: Rect::new(x0, y0, x0 + ADVANCE, y0 + LINE_HEIGHT),
                });
            }
        }
        rects
    }
}
