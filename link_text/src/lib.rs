// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link Text holds a block of text together with the link runs applied to it.
//!
//! A link run is a half-open byte range `[start, end)` carrying a link value of any type.
//! Runs are kept sorted in document order and never overlap: tagging a range that overlaps
//! existing runs replaces the overlapped part, keeping whatever lies outside the new range.
//!
//! ```
//! use link_text::LinkedText;
//!
//! let mut text = LinkedText::new("Hello! This is link");
//! assert!(text.set_as_link("link", "https://www.google1.com"));
//! assert!(!text.set_as_link("missing", "https://example.com"));
//!
//! let (range, link) = text.link_at(16).unwrap();
//! assert_eq!(range, 15..19);
//! assert_eq!(*link, "https://www.google1.com");
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod error;
mod linked_text;
mod segments;
mod text_storage;

pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::linked_text::{LinkRun, LinkedText};
pub use crate::segments::{Segment, Segments};
pub use crate::text_storage::TextStorage;
