// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic rasterizer for exercising the loader.

use alloc::vec::Vec;

use crate::{FaceMetrics, GlyphRasterizer, RasterizedGlyph};

/// Written into the stride padding of every bitmap; must never reach the atlas.
pub(crate) const PADDING_BYTE: u8 = 0xEE;

/// Bytes of padding after each bitmap row.
const ROW_PADDING: usize = 2;

/// Renders every character as a solid box whose size and shade derive from
/// the codepoint. Space renders as an empty bitmap.
#[derive(Debug, Default)]
pub(crate) struct BoxRasterizer {
    /// Character for which `rasterize` reports failure.
    pub(crate) fail_on: Option<char>,
    /// Character whose bitmap comes back with its last row cut short.
    pub(crate) truncate_on: Option<char>,
    /// Number of `rasterize` calls so far.
    pub(crate) calls: usize,
    /// Render every box as a single pixel.
    pub(crate) tiny: bool,
}

impl BoxRasterizer {
    pub(crate) fn tiny() -> Self {
        Self {
            tiny: true,
            ..Self::default()
        }
    }

    /// Bitmap size of `ch` in a default rasterizer, at most 7x8.
    pub(crate) fn size(ch: char) -> (u16, u16) {
        if ch == ' ' {
            return (0, 0);
        }
        let code = u32::from(ch);
        let side = |base: u32, modulus: u32| u16::try_from(base + code % modulus).unwrap();
        (side(3, 5), side(5, 4))
    }

    /// Coverage value of every pixel of `ch`, never zero or [`PADDING_BYTE`].
    pub(crate) fn fill(ch: char) -> u8 {
        u8::try_from(u32::from(ch) % 200).unwrap() + 1
    }
}

impl GlyphRasterizer for BoxRasterizer {
    fn face_metrics(&self) -> FaceMetrics {
        FaceMetrics {
            ascender: 9.0,
            descender: -3.0,
            height: 13.0,
            underline_position: -1.2,
            underline_thickness: 0.6,
        }
    }

    fn rasterize(&mut self, ch: char) -> Option<RasterizedGlyph> {
        self.calls += 1;
        if self.fail_on == Some(ch) {
            return None;
        }

        let (width, height) = match (self.tiny, ch) {
            (_, ' ') => (0, 0),
            (true, _) => (1, 1),
            (false, _) => Self::size(ch),
        };
        let stride = usize::from(width) + ROW_PADDING;
        let mut coverage = Vec::with_capacity(stride * usize::from(height));
        for _ in 0..height {
            coverage.extend((0..width).map(|_| Self::fill(ch)));
            coverage.extend([PADDING_BYTE; ROW_PADDING]);
        }
        if self.truncate_on == Some(ch) {
            coverage.truncate(coverage.len().saturating_sub(ROW_PADDING + 1));
        }

        Some(RasterizedGlyph {
            width,
            height,
            stride,
            bearing_x: 1,
            bearing_y: i32::from(height) - 2,
            advance_x: f32::from(width) + 1.5,
            advance_y: 0.0,
            coverage,
        })
    }

    fn kerning(&self, previous: char, current: char) -> f32 {
        match (previous, current) {
            ('A', 'V') => -2.0,
            ('T', 'o') => -1.0,
            _ => 0.0,
        }
    }
}
