// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary to the font rasterizer.

use alloc::vec::Vec;

use crate::surface::bitmap_len;

/// Face-wide metrics, in pixels at the size the rasterizer was set up for.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FaceMetrics {
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascender: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs;
    /// negative below the baseline.
    pub descender: f32,
    /// Default baseline-to-baseline distance suggested by the face.
    pub height: f32,
    /// Centre of the underline stem relative to the baseline.
    pub underline_position: f32,
    /// Thickness of the underline stem.
    pub underline_thickness: f32,
}

/// A coverage bitmap for one character, plus its placement metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RasterizedGlyph {
    /// Bitmap width in pixels.
    pub width: u16,
    /// Bitmap height in pixels.
    pub height: u16,
    /// Bytes between the starts of consecutive rows of `coverage`.
    pub stride: usize,
    /// Offset from the pen position to the left edge of the bitmap.
    pub bearing_x: i32,
    /// Offset from the baseline up to the top edge of the bitmap.
    pub bearing_y: i32,
    /// Horizontal pen advance, in fractional pixels.
    pub advance_x: f32,
    /// Vertical pen advance, in fractional pixels.
    pub advance_y: f32,
    /// 8-bit coverage samples, row-major, top row first.
    pub coverage: Vec<u8>,
}

impl RasterizedGlyph {
    /// Whether `coverage` holds every row of the bitmap at the given stride.
    ///
    /// Empty bitmaps are always well formed.
    pub fn is_well_formed(&self) -> bool {
        let width = usize::from(self.width);
        let height = usize::from(self.height);
        if width == 0 || height == 0 {
            return true;
        }
        self.stride >= width
            && bitmap_len(width, height, self.stride).is_some_and(|len| self.coverage.len() >= len)
    }
}

/// Produces glyph bitmaps for [`AtlasLoader`](crate::AtlasLoader).
///
/// Implementations wrap a font rasterizer that has already been set up for
/// one face at one size.
pub trait GlyphRasterizer {
    /// Metrics of the face at the configured size.
    fn face_metrics(&self) -> FaceMetrics;

    /// Renders `ch`.
    ///
    /// Characters the face lacks should still produce the face's missing
    /// glyph; `None` means the rasterizer itself failed. A bitmap that is
    /// not [well formed](RasterizedGlyph::is_well_formed) counts as a failure.
    fn rasterize(&mut self, ch: char) -> Option<RasterizedGlyph>;

    /// Horizontal adjustment to apply between `previous` and `current`.
    fn kerning(&self, previous: char, current: char) -> f32 {
        let _ = (previous, current);
        0.0
    }
}
