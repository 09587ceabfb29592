// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Atlas packs rasterized glyph bitmaps into one single-channel texture.
//!
//! The crate is built in two layers:
//!
//! - [`AtlasSurface`] owns the pixel buffer. It hands out [`Region`]s through a
//!   [`ShelfPacker`](shelf_pack::ShelfPacker), copies caller bitmaps into them
//!   and converts them to [`NormalizedRegion`] texture coordinates.
//! - [`AtlasLoader`] drives a [`GlyphRasterizer`] over a charset and records an
//!   [`AtlasFont`] of glyph metrics, texture coordinates and kerning for each
//!   loaded face. [`AtlasLoader::finish`] returns the completed [`Atlas`].
//!
//! Space is never reclaimed. When a glyph does not fit, loading stops with
//! [`AtlasError::Full`].
//!
//! Row 0 of [`AtlasSurface::pixels`] is the top row of the texture and rows
//! are stored top to bottom; the surface never flips them.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm].
//! - `png`: Enables [`AtlasSurface::write_png`] and [`AtlasSurface::save_png`] for
//!   inspecting an atlas.
//! - `bytemuck`: Implements `Pod` and `Zeroable` for [`NormalizedRegion`].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm

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

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("glyph_atlas requires either the `std` or `libm` feature to be enabled");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use core_maths as _;

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
mod font;
mod loader;
mod normalized;
mod rasterizer;
mod surface;

#[cfg(feature = "bytemuck")]
mod impl_bytemuck;

pub use shelf_pack;
pub use shelf_pack::{AtlasFull, Region};

pub use crate::config::AtlasConfig;
pub use crate::error::AtlasError;
pub use crate::font::{AtlasFont, AtlasGlyph, FontId, FontMetrics};
pub use crate::loader::{Atlas, AtlasLoader, DEFAULT_CHARSET, FALLBACK_CODEPOINT};
pub use crate::normalized::NormalizedRegion;
pub use crate::rasterizer::{FaceMetrics, GlyphRasterizer, RasterizedGlyph};
pub use crate::surface::AtlasSurface;

#[cfg(test)]
pub(crate) mod testing;
