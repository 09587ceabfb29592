// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline placement over a list of shelves.

use alloc::vec;
use alloc::vec::Vec;

use crate::{AtlasFull, Region, Shelf};

/// Pixels kept clear along every edge of the canvas.
pub const BORDER: i32 = 1;

/// Places rectangles on a fixed-size canvas and never gives the space back.
///
/// The free space is tracked as a skyline: an ordered list of [`Shelf`]s that
/// together cover the usable width of the canvas. A new rectangle rests on the
/// tallest shelf it spans, and the position with the lowest resulting bottom
/// edge wins.
#[derive(Clone, Debug)]
pub struct ShelfPacker {
    width: i32,
    height: i32,
    shelves: Vec<Shelf>,
    used: u64,
}

/// A candidate position found during the search.
#[derive(Copy, Clone, Debug)]
struct Placement {
    index: usize,
    x: i32,
    y: i32,
    bottom: i32,
    shelf_width: i32,
}

impl ShelfPacker {
    /// Creates a packer for a `width` by `height` canvas.
    ///
    /// # Panics
    ///
    /// Panics if the canvas leaves no room inside its [`BORDER`].
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 2 * BORDER && height > 2 * BORDER,
            "canvas of {width}x{height} has no room inside its border"
        );
        Self {
            width,
            height,
            shelves: vec![Shelf::new(BORDER, BORDER, width - 2 * BORDER)],
            used: 0,
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The current skyline, ordered by `x`.
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// Sum of `width * height` over every successful reservation.
    pub fn used_area(&self) -> u64 {
        self.used
    }

    /// Whether nothing has been reserved yet.
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Reserves a `width` by `height` block.
    ///
    /// On failure the skyline is untouched, so retrying the same or a larger
    /// request fails again.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn reserve(&mut self, width: i32, height: i32) -> Result<Region, AtlasFull> {
        assert!(
            width > 0 && height > 0,
            "cannot reserve a {width}x{height} block"
        );

        let Some(best) = self.find_best(width, height) else {
            log::debug!(
                "no room for a {width}x{height} block in the {}x{} atlas ({} shelves)",
                self.width,
                self.height,
                self.shelves.len()
            );
            return Err(AtlasFull::new(width, height));
        };

        self.shelves
            .insert(best.index, Shelf::new(best.x, best.bottom, width));
        self.shrink_after(best.index);
        self.merge();
        self.used += u64::from(width.unsigned_abs()) * u64::from(height.unsigned_abs());

        let region = Region::new(best.x, best.y, width, height);
        log::trace!("reserved {region:?}, {} shelves", self.shelves.len());
        Ok(region)
    }

    /// Finds the placement with the lowest bottom edge.
    ///
    /// Ties go to the narrower start shelf, ignoring shelves without width.
    fn find_best(&self, width: i32, height: i32) -> Option<Placement> {
        let mut best: Option<Placement> = None;
        for (index, shelf) in self.shelves.iter().enumerate() {
            let Some(y) = self.fit(index, width, height) else {
                continue;
            };
            let bottom = y + height;
            let better = match best {
                None => true,
                Some(b) => {
                    bottom < b.bottom
                        || (bottom == b.bottom && shelf.width > 0 && shelf.width < b.shelf_width)
                }
            };
            if better {
                best = Some(Placement {
                    index,
                    x: shelf.x,
                    y,
                    bottom,
                    shelf_width: shelf.width,
                });
            }
        }
        best
    }

    /// Returns the row a block starting at shelf `index` would rest on.
    fn fit(&self, index: usize, width: i32, height: i32) -> Option<i32> {
        let start = self.shelves[index];
        if width > self.width - BORDER - start.x {
            return None;
        }

        let mut y = start.y;
        let mut remaining = width;
        for shelf in &self.shelves[index..] {
            y = y.max(shelf.y);
            if height > self.height - BORDER - y {
                return None;
            }
            remaining -= shelf.width;
            if remaining <= 0 {
                return Some(y);
            }
        }
        None
    }

    /// Trims the shelves covered by the one just inserted at `index`.
    fn shrink_after(&mut self, index: usize) {
        let i = index + 1;
        while i < self.shelves.len() {
            let prev_right = self.shelves[i - 1].right();
            let shelf = &mut self.shelves[i];
            if shelf.x >= prev_right {
                break;
            }

            let shrink = prev_right - shelf.x;
            shelf.x += shrink;
            shelf.width -= shrink;
            if shelf.width > 0 {
                break;
            }
            // The next shelf slides into slot `i` and may reach under the
            // inserted one as well.
            self.shelves.remove(i);
        }
    }

    /// Joins neighbouring shelves that sit at the same height.
    fn merge(&mut self) {
        let mut i = 0;
        while i + 1 < self.shelves.len() {
            if self.shelves[i].y == self.shelves[i + 1].y {
                let next = self.shelves.remove(i + 1);
                self.shelves[i].width += next.width;
            } else {
                i += 1;
            }
        }
    }
}
