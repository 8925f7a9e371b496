// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tappable text label that reports which inline link a tap landed on.
//!
//! The label does not lay text out itself. A [`TextLayoutEngine`] turns the label's text,
//! [`LabelStyle`] and bounds into a [`LaidOutText`], which answers three geometric queries:
//! the used bounding box, the character nearest to a point, and per-glyph boxes.
//! On top of that this crate provides:
//!
//! - [`container_offset`]: where the used bounding box sits inside the label bounds for a
//!   given [`TextAlignment`], and therefore how to map a view-local tap into layout space.
//! - [`hit_test`] and [`resolve_link`]: map a tap to a character index, then to the link run
//!   (if any) containing it.
//! - [`LinkLabel`]: a controller that keeps the text, style and bounds, owns the engine,
//!   caches layouts according to its [`LayoutPolicy`] and notifies subscribed handlers.
//! - [`DebugOverlay`]: glyph boxes in view coordinates, for checking hit-test alignment.
//!
//! ## Example
//!
//! ```
//! use link_label::kurbo::{Point, Rect, Size};
//! use link_label::{container_offset, TextAlignment};
//!
//! // A 50x10 run of text centered in a 100x20 label.
//! let used = Rect::new(0.0, 0.0, 50.0, 10.0);
//! let offset = container_offset(TextAlignment::Center, Size::new(100.0, 20.0), used);
//! assert_eq!((offset.x, offset.y), (25.0, 5.0));
//! ```
//!
//! The [`link_label_parley`] crate provides an engine backed by Parley.
//!
//! [`link_label_parley`]: https://docs.rs/link_label_parley
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

mod alignment;
mod debug;
mod engine;
mod hit;
mod label;
mod link;
mod style;

#[cfg(test)]
mod testing;

pub use link_text;
pub use peniko::kurbo;
pub use url::Url;

pub use crate::alignment::{container_offset, to_container, TextAlignment};
pub use crate::debug::DebugOverlay;
pub use crate::engine::{GlyphRect, LaidOutText, LayoutRequest, TextLayoutEngine};
pub use crate::hit::{hit_test, resolve_link, LinkHit};
pub use crate::label::{HandlerId, LayoutPolicy, LinkLabel};
pub use crate::link::Link;
pub use crate::style::{LabelStyle, LineBreak};

/// The attributed text held by a [`LinkLabel`].
pub type LabelText = link_text::LinkedText<String, Link>;
