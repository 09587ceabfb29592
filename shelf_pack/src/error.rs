// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Returned by [`ShelfPacker::reserve`] when no shelf can hold the request.
///
/// The packer is left exactly as it was before the failed call.
///
/// [`ShelfPacker::reserve`]: crate::ShelfPacker::reserve
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AtlasFull {
    width: i32,
    height: i32,
}

impl AtlasFull {
    pub(crate) const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Width of the rejected request, in pixels.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height of the rejected request, in pixels.
    pub const fn height(&self) -> i32 {
        self.height
    }
}

impl core::fmt::Display for AtlasFull {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "atlas is full, cannot reserve a {}x{} block",
            self.width, self.height
        )
    }
}

impl core::error::Error for AtlasFull {}
