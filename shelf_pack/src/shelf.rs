// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A horizontal free-space segment of the skyline.
///
/// Everything above `y` in the columns `x..x + width` is already taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shelf {
    /// Left edge.
    pub x: i32,
    /// First free row.
    pub y: i32,
    /// Horizontal extent. Always positive once a reservation has completed.
    pub width: i32,
}

impl Shelf {
    pub(crate) const fn new(x: i32, y: i32, width: i32) -> Self {
        Self { x, y, width }
    }

    /// One past the rightmost column.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }
}
