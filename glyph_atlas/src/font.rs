// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts and glyphs as they live in a finished atlas.

use hashbrown::HashMap;

#[cfg(all(feature = "libm", not(feature = "std")))]
use core_maths::CoreFloat;

use crate::{AtlasError, FaceMetrics, NormalizedRegion, FALLBACK_CODEPOINT};

/// Index of a font within an [`Atlas`](crate::Atlas), in load order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// Position of the font in load order.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Vertical metrics of a loaded font, in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Size the font was loaded at.
    pub size: f32,
    /// See [`FaceMetrics::ascender`].
    pub ascender: f32,
    /// See [`FaceMetrics::descender`].
    pub descender: f32,
    /// See [`FaceMetrics::height`].
    pub height: f32,
    /// Space between the descender of one line and the ascender of the next.
    pub line_gap: f32,
    /// Underline position, rounded and at least two pixels below the baseline.
    pub underline_position: f32,
    /// Underline thickness, rounded and at least one pixel.
    pub underline_thickness: f32,
}

impl FontMetrics {
    pub(crate) fn from_face(size: f32, face: FaceMetrics) -> Self {
        Self {
            size,
            ascender: face.ascender,
            descender: face.descender,
            height: face.height,
            line_gap: face.height - face.ascender + face.descender,
            underline_position: face.underline_position.round().min(-2.0),
            underline_thickness: face.underline_thickness.round().max(1.0),
        }
    }

    /// Distance between consecutive baselines.
    pub fn baseline_to_baseline(&self) -> f32 {
        self.ascender - self.descender + self.line_gap
    }
}

/// A glyph placed in the atlas.
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasGlyph {
    /// The character this glyph renders.
    pub codepoint: char,
    /// Bitmap width in pixels.
    pub width: f32,
    /// Bitmap height in pixels.
    pub height: f32,
    /// Left bearing in pixels.
    pub offset_x: f32,
    /// Top bearing in pixels.
    pub offset_y: f32,
    /// Pen advance for horizontal layouts.
    pub advance_x: f32,
    /// Pen advance for vertical layouts.
    pub advance_y: f32,
    /// Texture coordinates of the bitmap, without the separating padding.
    pub region: NormalizedRegion,
    /// Non-zero kerning keyed by the preceding character.
    pub(crate) kerning: HashMap<char, f32>,
}

impl AtlasGlyph {
    /// Kerning to apply when this glyph follows `previous`.
    pub fn kerning(&self, previous: char) -> f32 {
        self.kerning.get(&previous).copied().unwrap_or(0.0)
    }

    /// Every preceding character with a non-zero kerning value.
    pub fn kerning_pairs(&self) -> impl Iterator<Item = (char, f32)> + '_ {
        self.kerning.iter().map(|(&ch, &value)| (ch, value))
    }
}

/// One face at one size, loaded into an atlas.
#[derive(Clone, Debug)]
pub struct AtlasFont {
    metrics: FontMetrics,
    glyphs: HashMap<char, AtlasGlyph>,
}

impl AtlasFont {
    pub(crate) fn new(metrics: FontMetrics, glyphs: HashMap<char, AtlasGlyph>) -> Self {
        Self { metrics, glyphs }
    }

    /// Size the font was loaded at.
    pub fn size(&self) -> f32 {
        self.metrics.size
    }

    /// Vertical metrics.
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Number of loaded glyphs, the fallback included.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether no glyph was loaded.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether `ch` was part of the loaded charset.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// The glyph for `ch`, if it was loaded.
    pub fn glyph(&self, ch: char) -> Option<&AtlasGlyph> {
        self.glyphs.get(&ch)
    }

    /// The glyph for `ch`, or an error naming it.
    pub fn try_glyph(&self, ch: char) -> Result<&AtlasGlyph, AtlasError> {
        self.glyph(ch).ok_or(AtlasError::GlyphNotLoaded(ch))
    }

    /// The glyph for `ch`, or the [`FALLBACK_CODEPOINT`] glyph.
    ///
    /// Fonts built by [`AtlasLoader`](crate::AtlasLoader) always carry the
    /// fallback, so this only returns `None` for hand-built fonts.
    pub fn glyph_or_fallback(&self, ch: char) -> Option<&AtlasGlyph> {
        self.glyph(ch).or_else(|| self.glyph(FALLBACK_CODEPOINT))
    }

    /// Kerning to apply between `previous` and `current`.
    pub fn kerning(&self, previous: char, current: char) -> f32 {
        self.glyph(current).map_or(0.0, |g| g.kerning(previous))
    }

    /// All loaded glyphs, in no particular order.
    pub fn glyphs(&self) -> impl Iterator<Item = &AtlasGlyph> + '_ {
        self.glyphs.values()
    }
}
