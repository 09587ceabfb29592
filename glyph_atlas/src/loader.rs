// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building an atlas from one or more fonts.

use alloc::vec::Vec;
use hashbrown::HashMap;

use shelf_pack::Region;

use crate::font::FontId;
use crate::{
    AtlasConfig, AtlasError, AtlasFont, AtlasGlyph, AtlasSurface, FontMetrics, GlyphRasterizer,
    RasterizedGlyph,
};

/// Loaded ahead of every charset and returned for characters outside it.
pub const FALLBACK_CODEPOINT: char = '?';

/// Printable ASCII plus the Latin-1 letters and symbols most text needs.
pub const DEFAULT_CHARSET: &str = " -_.:,;<>|*'^?+´`!@\"#%&/\\~={}[]()€$\
    abcdefghijklmnopqrstuvwxyzåäö\
    ABCDEFGHIJKLMNOPQRSTUVWXYZÅÄÖ\
    0123456789";

/// Rasterizes fonts into a shared [`AtlasSurface`].
///
/// Every glyph is reserved with one extra column and row so neighbouring
/// bitmaps never bleed into each other when sampled.
#[derive(Debug)]
pub struct AtlasLoader {
    surface: AtlasSurface,
    fonts: Vec<AtlasFont>,
}

impl AtlasLoader {
    /// Creates a loader with an empty surface.
    pub fn new(config: AtlasConfig) -> Self {
        Self {
            surface: AtlasSurface::new(config),
            fonts: Vec::new(),
        }
    }

    /// The surface being filled.
    pub fn surface(&self) -> &AtlasSurface {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to drain pending uploads.
    pub fn surface_mut(&mut self) -> &mut AtlasSurface {
        &mut self.surface
    }

    /// Rasterizes [`FALLBACK_CODEPOINT`] and every character of `charset`.
    ///
    /// Duplicate characters are loaded once. If the atlas runs out of room
    /// the font is not registered, but the glyphs written before the failure
    /// keep their space.
    pub fn load<R: GlyphRasterizer + ?Sized>(
        &mut self,
        rasterizer: &mut R,
        size: f32,
        charset: &str,
    ) -> Result<FontId, AtlasError> {
        let metrics = FontMetrics::from_face(size, rasterizer.face_metrics());

        let mut glyphs = HashMap::new();
        for ch in core::iter::once(FALLBACK_CODEPOINT).chain(charset.chars()) {
            if glyphs.contains_key(&ch) {
                continue;
            }
            let glyph = self.place_glyph(rasterizer, ch).inspect_err(|err| {
                log::warn!("abandoning {size}px font at {ch:?}: {err}");
            })?;
            glyphs.insert(ch, glyph);
        }
        build_kerning(rasterizer, &mut glyphs);

        let id = FontId(self.fonts.len());
        log::debug!(
            "loaded {} glyphs at {size}px as font {}, atlas {:.1}% full",
            glyphs.len(),
            id.index(),
            self.surface.fill_ratio() * 100.0
        );
        self.fonts.push(AtlasFont::new(metrics, glyphs));
        Ok(id)
    }

    fn place_glyph<R: GlyphRasterizer + ?Sized>(
        &mut self,
        rasterizer: &mut R,
        ch: char,
    ) -> Result<AtlasGlyph, AtlasError> {
        let raster = rasterizer
            .rasterize(ch)
            .filter(RasterizedGlyph::is_well_formed)
            .ok_or(AtlasError::Rasterize(ch))?;
        let width = i32::from(raster.width);
        let height = i32::from(raster.height);

        let reserved = self.surface.reserve(width + 1, height + 1)?;
        let region = Region::new(reserved.x, reserved.y, width, height);
        self.surface
            .write_pixels(region, &raster.coverage, raster.stride);

        Ok(AtlasGlyph {
            codepoint: ch,
            width: f32::from(raster.width),
            height: f32::from(raster.height),
            offset_x: raster.bearing_x as f32,
            offset_y: raster.bearing_y as f32,
            advance_x: raster.advance_x,
            advance_y: raster.advance_y,
            region: self.surface.normalize(region),
            kerning: HashMap::new(),
        })
    }

    /// Fonts loaded so far.
    pub fn fonts(&self) -> &[AtlasFont] {
        &self.fonts
    }

    /// Ends loading and hands over the surface and fonts.
    pub fn finish(self) -> Atlas {
        Atlas {
            surface: self.surface,
            fonts: self.fonts,
        }
    }
}

/// Records every non-zero kerning pair between the loaded glyphs.
fn build_kerning<R: GlyphRasterizer + ?Sized>(
    rasterizer: &R,
    glyphs: &mut HashMap<char, AtlasGlyph>,
) {
    let chars: Vec<char> = glyphs.keys().copied().collect();
    for glyph in glyphs.values_mut() {
        for &previous in &chars {
            let value = rasterizer.kerning(previous, glyph.codepoint);
            if value != 0.0 {
                glyph.kerning.insert(previous, value);
            }
        }
    }
}

/// A finished atlas: the pixel data and the fonts whose glyphs it holds.
#[derive(Debug)]
pub struct Atlas {
    surface: AtlasSurface,
    fonts: Vec<AtlasFont>,
}

impl Atlas {
    /// The pixel data.
    pub fn surface(&self) -> &AtlasSurface {
        &self.surface
    }

    /// The font registered under `id`.
    pub fn font(&self, id: FontId) -> Option<&AtlasFont> {
        self.fonts.get(id.0)
    }

    /// All fonts, in load order.
    pub fn fonts(&self) -> &[AtlasFont] {
        &self.fonts
    }

    /// Splits the atlas into its surface and fonts.
    pub fn into_parts(self) -> (AtlasSurface, Vec<AtlasFont>) {
        (self.surface, self.fonts)
    }
}
