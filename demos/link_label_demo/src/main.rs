// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out three labels with Parley, taps the middle of every link and logs what was hit.
//!
//! Set `RUST_LOG` to change what is logged, e.g. `RUST_LOG=link_label=trace`.

use link_label::kurbo::{Point, Rect, Size};
use link_label::{LabelStyle, LabelText, LineBreak, Link, LinkLabel, TextAlignment};
use link_label_parley::ParleyEngine;
use tracing_subscriber::EnvFilter;

const MULTILINE: &str = "\
Lorem ipsum dolor sit amet, consectetur adipiscing elit,
    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.
Aliquet nibh praesent tristique magna sit. Aliquam nulla facilisi cras fermentum odio eu feugiat pretium.
Porta nibh venenatis cras sed felis eget velit aliquet.
Consequat nisl vel pretium link lectus quam id leo.
Eget velit aliquet sagittis id consectetur.
Tempus egestas sed sed risus pretium quam vulputate.
Eget gravida cum sociis natoque.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("link_label=debug,link_label_demo=info")),
        )
        .init();

    let short = label(
        "short",
        "Hello! This is link",
        "https://www.google1.com",
        LabelStyle::default()
            .with_font_size(10.0)
            .with_alignment(TextAlignment::Center),
        Size::new(320.0, 30.0),
    );
    let long = label(
        "long",
        "Lorem ipsum dolor sit amet, link consectetur adipiscing elit",
        "https://www.google2.com",
        LabelStyle::default()
            .with_font_size(15.0)
            .with_line_break(LineBreak::Clip)
            .with_max_lines(1),
        Size::new(320.0, 30.0),
    );
    let multiline = label(
        "multiline",
        MULTILINE,
        "https://www.google3.com",
        LabelStyle::default().with_font_size(20.0),
        Size::new(350.0, 800.0),
    );

    for (name, mut label) in [("short", short), ("long", long), ("multiline", multiline)] {
        match link_center(&mut label) {
            Some(point) => {
                if label.handle_tap(point).is_none() {
                    tracing::warn!(
                        target: "link_label_demo",
                        name,
                        x = point.x,
                        y = point.y,
                        "tap missed the link"
                    );
                }
            }
            None => tracing::warn!(target: "link_label_demo", name, "link is not visible"),
        }
        let miss = Point::new(1.0, 1.0);
        if label.handle_tap(miss).is_none() {
            tracing::info!(target: "link_label_demo", name, "tap in the corner hit nothing");
        }
    }
}

fn label(
    name: &'static str,
    text: &str,
    url: &'static str,
    style: LabelStyle,
    bounds: Size,
) -> LinkLabel<ParleyEngine> {
    let mut text = LabelText::new(text.to_string());
    if !text.set_as_link("link", Link::from(url)) {
        tracing::warn!(target: "link_label_demo", name, "no link in text");
    }
    let mut label = LinkLabel::new(ParleyEngine::new())
        .with_style(style)
        .with_bounds(bounds)
        .with_text(text);
    label.set_debug(true);
    label.subscribe(move |label, hit| {
        if hit.link.as_str() != url {
            tracing::warn!(target: "link_label_demo", name, link = %hit.link, url, "link changed");
        }
        tracing::info!(
            target: "link_label_demo",
            name,
            link = %hit.link,
            index = hit.index,
            bounds = ?label.bounds(),
            "link tapped"
        );
    });
    label
}

/// The center of the glyph boxes of the first link, in label coordinates.
fn link_center(label: &mut LinkLabel<ParleyEngine>) -> Option<Point> {
    let range = label.text()?.links().next()?.range.clone();
    let overlay = label.debug_overlay()?;
    tracing::debug!(
        target: "link_label_demo",
        glyphs = overlay.glyphs.len(),
        "debug overlay built"
    );
    overlay
        .glyphs
        .iter()
        .filter(|glyph| range.contains(&glyph.range.start) && glyph.rect.width() > 0.0)
        .map(|glyph| glyph.rect)
        .reduce(|a: Rect, b| a.union(b))
        .map(|rect| rect.center())
}
