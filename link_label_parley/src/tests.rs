// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! These tests only check properties that hold whatever fonts the machine has.

use link_label::kurbo::{Point, Size};
use link_label::{
    LabelStyle, LabelText, LaidOutText, LayoutRequest, Link, LinkLabel, TextAlignment,
    TextLayoutEngine,
};
use parley::Alignment;

use crate::{to_parley_alignment, trim_line_break, ParleyEngine};

fn sample() -> LabelText {
    let mut text = LabelText::new("Hello! This is link".to_string());
    assert!(text.set_as_link("link", Link::from("https://www.google1.com")));
    text
}

fn lay_out(text: &LabelText, style: &LabelStyle, container: Size) -> crate::ParleyText {
    ParleyEngine::new().layout(&LayoutRequest {
        text,
        style,
        container,
    })
}

#[test]
fn maps_alignment() {
    assert_eq!(to_parley_alignment(TextAlignment::Natural), Alignment::Start);
    assert_eq!(to_parley_alignment(TextAlignment::Left), Alignment::Left);
    assert_eq!(to_parley_alignment(TextAlignment::Center), Alignment::Center);
    assert_eq!(to_parley_alignment(TextAlignment::Right), Alignment::Right);
    assert_eq!(
        to_parley_alignment(TextAlignment::Justified),
        Alignment::Justify
    );
}

#[test]
fn empty_text_has_no_characters() {
    let text = LabelText::new(String::new());
    let layout = lay_out(&text, &LabelStyle::default(), Size::new(300.0, 40.0));
    assert_eq!(layout.text_len(), 0);
    assert_eq!(layout.character_index_at(Point::new(0.0, 0.0)), None);
    assert!(layout.glyph_rects().is_empty());
}

#[test]
fn used_rect_starts_at_origin() {
    let layout = lay_out(&sample(), &LabelStyle::default(), Size::new(300.0, 40.0));
    let used = layout.used_rect();
    assert_eq!(used.origin(), Point::ZERO);
    assert!(used.width() >= 0.0);
    assert!(used.height() >= 0.0);
}

#[test]
fn glyph_ranges_stay_inside_text() {
    let text = sample();
    let layout = lay_out(&text, &LabelStyle::default(), Size::new(300.0, 40.0));
    for glyph in layout.glyph_rects() {
        assert!(glyph.range.start < glyph.range.end);
        assert!(glyph.range.end <= text.len());
        assert!(glyph.rect.width() >= 0.0);
    }
}

#[test]
fn character_index_is_a_char_boundary() {
    let text = LabelText::new("añb 漢字 link".to_string());
    let layout = lay_out(&text, &LabelStyle::default(), Size::new(300.0, 40.0));
    for x in [-10.0, 0.0, 5.0, 20.0, 50.0, 1000.0] {
        for y in [-10.0, 5.0, 1000.0] {
            let Some(index) = layout.character_index_at(Point::new(x, y)) else {
                continue;
            };
            assert!(text.as_str().is_char_boundary(index));
            assert!(index < text.len());
        }
    }
}

#[test]
fn glyph_boxes_resolve_to_their_own_character() {
    let text = sample();
    let layout = lay_out(&text, &LabelStyle::default(), Size::new(300.0, 40.0));
    for glyph in layout.glyph_rects() {
        if glyph.rect.width() <= 0.0 {
            continue;
        }
        let inside = Point::new(
            glyph.rect.x0 + glyph.rect.width() * 0.25,
            glyph.rect.center().y,
        );
        assert_eq!(
            layout.character_index_at(inside),
            Some(glyph.range.start),
            "glyph {:?}",
            glyph.range
        );
    }
}

#[test]
fn line_limit_cuts_text() {
    let text = LabelText::new("one\ntwo\nthree".to_string());
    let style = LabelStyle::default().with_max_lines(2);
    let container = Size::new(300.0, 100.0);
    let layout = lay_out(&text, &style, container);
    assert_eq!(layout.layout().len(), 2);
    assert_eq!(layout.text_len(), "one\ntwo".len());
    assert!(layout
        .glyph_rects()
        .iter()
        .all(|glyph| glyph.range.end <= layout.text_len()));

    let prefix = LabelText::new("one\ntwo".to_string());
    let expected = lay_out(&prefix, &LabelStyle::default(), container);
    assert_eq!(layout.used_rect(), expected.used_rect());

    let unlimited = lay_out(&text, &LabelStyle::default(), container);
    assert_eq!(unlimited.layout().len(), 3);
    assert_eq!(unlimited.text_len(), text.len());
}

#[test]
fn line_limit_drops_every_kind_of_line_break() {
    let container = Size::new(300.0, 100.0);
    let style = LabelStyle::default().with_max_lines(1);
    for text in ["one\r\ntwo", "one\rtwo", "one\u{2028}two", "one\u{2029}two"] {
        let layout = lay_out(&LabelText::new(text.to_string()), &style, container);
        assert_eq!(layout.layout().len(), 1, "{text:?}");
        assert_eq!(layout.text_len(), 3, "{text:?}");
    }
}

#[test]
fn trims_trailing_line_break() {
    assert_eq!(trim_line_break("one\n"), "one");
    assert_eq!(trim_line_break("one\r\n"), "one");
    assert_eq!(trim_line_break("one\u{2029}"), "one");
    assert_eq!(trim_line_break("one "), "one ");
    assert_eq!(trim_line_break("one\n\n"), "one\n");
    assert_eq!(trim_line_break(""), "");
}

#[test]
fn tap_on_link_glyph_reaches_handler() {
    let mut label = LinkLabel::new(ParleyEngine::new())
        .with_bounds(Size::new(300.0, 40.0))
        .with_text(sample());
    label.set_alignment(TextAlignment::Center);
    label.set_debug(true);
    let overlay = label.debug_overlay().expect("debug overlay");
    // Without any fonts every glyph box is empty and there is nothing to tap.
    let Some(glyph) = overlay
        .glyphs
        .iter()
        .find(|glyph| glyph.range.start == 16 && glyph.rect.width() > 0.0)
    else {
        return;
    };
    let point = Point::new(
        glyph.rect.x0 + glyph.rect.width() * 0.25,
        glyph.rect.center().y,
    );
    let hit = label.handle_tap(point).expect("tap on link");
    assert_eq!(hit.range, 15..19);
    assert_eq!(hit.link.as_str(), "https://www.google1.com");
}
