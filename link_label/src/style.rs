// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroUsize;

use peniko::Color;

use crate::TextAlignment;

/// How text that does not fit on one line is handled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreak {
    /// Wrap at word boundaries.
    #[default]
    WordWrap,
    /// Wrap at any character.
    CharWrap,
    /// Do not wrap; overflowing text is clipped.
    Clip,
    /// Do not wrap; the start of the line is elided when drawn.
    TruncateHead,
    /// Do not wrap; the end of the line is elided when drawn.
    TruncateTail,
    /// Do not wrap; the middle of the line is elided when drawn.
    TruncateMiddle,
}

impl LineBreak {
    /// Whether lines are wrapped to the label width.
    pub fn wraps(self) -> bool {
        matches!(self, Self::WordWrap | Self::CharWrap)
    }
}

/// Appearance and layout options of a label.
///
/// Changing any of these on a [`LinkLabel`](crate::LinkLabel) invalidates its layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Horizontal alignment of the text.
    pub alignment: TextAlignment,
    /// Line wrapping behavior.
    pub line_break: LineBreak,
    /// Maximum number of lines, or `None` for no limit.
    pub max_lines: Option<NonZeroUsize>,
    /// Font size, in layout units.
    pub font_size: f32,
    /// Color of plain text.
    pub text_color: Color,
    /// Color of link text, or `None` to draw links in the text color.
    pub link_color: Option<Color>,
    /// Whether links are underlined.
    pub underline_links: bool,
    /// Display scale handed to the layout engine.
    pub scale: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            alignment: TextAlignment::default(),
            line_break: LineBreak::default(),
            max_lines: None,
            font_size: 17.0,
            text_color: Color::BLACK,
            link_color: None,
            underline_links: false,
            scale: 1.0,
        }
    }
}

impl LabelStyle {
    /// Builder method for setting the alignment.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder method for setting the line break mode.
    pub fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }

    /// Builder method for limiting the number of lines. `0` means no limit.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = NonZeroUsize::new(max_lines);
        self
    }

    /// Builder method for setting the font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Builder method for setting the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Builder method for setting the link color.
    pub fn with_link_color(mut self, color: Color) -> Self {
        self.link_color = Some(color);
        self
    }

    /// Builder method for underlining links.
    pub fn with_underline_links(mut self, underline: bool) -> Self {
        self.underline_links = underline;
        self
    }

    /// Builder method for setting the display scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelStyle, LineBreak};
    use crate::TextAlignment;

    #[test]
    fn builders_and_defaults() {
        let style = LabelStyle::default();
        assert_eq!(style.alignment, TextAlignment::Natural);
        assert_eq!(style.max_lines, None);

        let style = style
            .with_alignment(TextAlignment::Center)
            .with_line_break(LineBreak::TruncateTail)
            .with_max_lines(2)
            .with_font_size(10.0);
        assert_eq!(style.alignment, TextAlignment::Center);
        assert_eq!(style.max_lines.map(usize::from), Some(2));
        assert!(!style.line_break.wraps());
        assert_eq!(style.with_max_lines(0).max_lines, None);
    }
}
