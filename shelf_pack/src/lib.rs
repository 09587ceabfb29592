// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shelf Pack places rectangles onto a fixed-size canvas using a skyline heuristic.
//!
//! The packer never frees space. Every successful [`ShelfPacker::reserve`] call
//! consumes part of the canvas for good, and once no placement is possible the
//! call fails with [`AtlasFull`].
//!
//! A one pixel border is kept clear on every side of the canvas, so a
//! `64x64` canvas accepts rectangles inside `x, y ∈ [1, 63)`.
//!
//! ```
//! use shelf_pack::{Region, ShelfPacker};
//!
//! let mut packer = ShelfPacker::new(64, 64);
//! assert_eq!(packer.reserve(10, 10), Ok(Region::new(1, 1, 10, 10)));
//! assert_eq!(packer.reserve(10, 10), Ok(Region::new(11, 1, 10, 10)));
//! assert!(packer.reserve(100, 5).is_err());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwarded to `log`; the packer itself only needs `alloc`.

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
mod packer;
mod region;
mod shelf;

pub use crate::error::AtlasFull;
pub use crate::packer::{BORDER, ShelfPacker};
pub use crate::region::Region;
pub use crate::shelf::Shelf;
