// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use shelf_pack::Region;

/// A [`Region`] expressed as fractions of the atlas size.
///
/// These are the texture coordinates a sampler needs. `top` is smaller than
/// `bottom` because row 0 of the atlas is its top row.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct NormalizedRegion {
    /// Left edge, `x / width`.
    pub left: f32,
    /// Top edge, `y / height`.
    pub top: f32,
    /// Right edge, `(x + w) / width`.
    pub right: f32,
    /// Bottom edge, `(y + h) / height`.
    pub bottom: f32,
}

impl NormalizedRegion {
    /// Creates a normalized region from its edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Projects `region` onto a `width` by `height` canvas.
    pub fn from_region(region: Region, width: u32, height: u32) -> Self {
        let w = width as f32;
        let h = height as f32;
        Self {
            left: region.x as f32 / w,
            top: region.y as f32 / h,
            right: region.right() as f32 / w,
            bottom: region.bottom() as f32 / h,
        }
    }

    /// Horizontal extent as a fraction of the atlas width.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent as a fraction of the atlas height.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// `[left, top]`.
    pub const fn left_top(&self) -> [f32; 2] {
        [self.left, self.top]
    }

    /// `[right, top]`.
    pub const fn right_top(&self) -> [f32; 2] {
        [self.right, self.top]
    }

    /// `[left, bottom]`.
    pub const fn left_bottom(&self) -> [f32; 2] {
        [self.left, self.bottom]
    }

    /// `[right, bottom]`.
    pub const fn right_bottom(&self) -> [f32; 2] {
        [self.right, self.bottom]
    }
}

#[cfg(test)]
mod tests {
    use super::NormalizedRegion;
    use shelf_pack::Region;

    #[test]
    fn projects_onto_canvas() {
        let n = NormalizedRegion::from_region(Region::new(16, 32, 16, 8), 64, 128);
        assert_eq!(n, NormalizedRegion::new(0.25, 0.25, 0.5, 0.3125));
        assert_eq!(n.width(), 0.25);
        assert_eq!(n.height(), 0.0625);
        assert_eq!(n.left_top(), [0.25, 0.25]);
        assert_eq!(n.right_bottom(), [0.5, 0.3125]);
        assert_eq!(n.right_top(), [0.5, 0.25]);
        assert_eq!(n.left_bottom(), [0.25, 0.3125]);
    }

    #[test]
    fn round_trips_through_pixels() {
        let (w, h) = (509_u32, 331_u32);
        for region in [
            Region::new(1, 1, 10, 10),
            Region::new(37, 211, 3, 97),
            Region::new(497, 319, 11, 11),
        ] {
            let n = NormalizedRegion::from_region(region, w, h);
            let back = [
                n.left * w as f32,
                n.top * h as f32,
                n.right * w as f32,
                n.bottom * h as f32,
            ];
            let expected = [region.x, region.y, region.right(), region.bottom()];
            for (got, want) in back.iter().zip(expected) {
                assert!(
                    (got - want as f32).abs() < 1e-3,
                    "{region:?} came back as {back:?}"
                );
            }
        }
    }
}
