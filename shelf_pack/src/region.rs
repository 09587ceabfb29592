// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An axis-aligned rectangle in canvas pixels.
///
/// Regions handed out by [`ShelfPacker::reserve`](crate::ShelfPacker::reserve)
/// are plain values; the packer keeps no record of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge.
    pub x: i32,
    /// Top edge. `y` grows downward.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Region {
    /// Creates a region from its top-left corner and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Number of pixels covered, or zero for an empty region.
    pub fn area(&self) -> u64 {
        u64::from(self.width.max(0).unsigned_abs()) * u64::from(self.height.max(0).unsigned_abs())
    }

    /// Whether the region covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the pixel at `(x, y)` lies inside the region.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the two regions share at least one pixel.
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
