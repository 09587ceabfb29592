// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use shelf_pack::AtlasFull;

/// Errors raised while loading glyphs into an atlas or looking them up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AtlasError {
    /// The atlas had no room left for a glyph.
    ///
    /// The load that hit this is abandoned; other fonts are unaffected.
    Full(AtlasFull),

    /// The rasterizer could not produce a bitmap for this character.
    Rasterize(char),

    /// The character was not part of the charset the font was loaded with.
    GlyphNotLoaded(char),
}

impl core::fmt::Display for AtlasError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Full(full) => write!(f, "{full}"),
            Self::Rasterize(ch) => write!(f, "failed to rasterize {ch:?}"),
            Self::GlyphNotLoaded(ch) => write!(f, "glyph not loaded for {ch:?}"),
        }
    }
}

impl core::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Full(full) => Some(full),
            _ => None,
        }
    }
}

impl From<AtlasFull> for AtlasError {
    fn from(full: AtlasFull) -> Self {
        Self::Full(full)
    }
}
