// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Dimensions of an atlas canvas, fixed for its whole lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl AtlasConfig {
    /// Edge length used by [`AtlasConfig::default`].
    pub const DEFAULT_SIZE: u32 = 512;

    /// Creates a configuration for a `width` by `height` canvas.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a configuration for a square canvas.
    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self::square(Self::DEFAULT_SIZE)
    }
}
