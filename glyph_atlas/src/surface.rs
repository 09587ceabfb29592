// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel storage for a single atlas texture.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use shelf_pack::{AtlasFull, BORDER, Region, Shelf, ShelfPacker};

use crate::{AtlasConfig, NormalizedRegion};

/// An 8-bit single-channel canvas that blocks are reserved on and written into.
///
/// The buffer is row-major with row 0 at the top, `width` bytes per row.
pub struct AtlasSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    packer: ShelfPacker,
    /// Regions written since the last `take_pending_uploads`.
    pending_uploads: Vec<Region>,
}

impl AtlasSurface {
    /// Creates a zeroed surface.
    ///
    /// # Panics
    ///
    /// Panics if a dimension does not fit in `i32` or leaves no room inside
    /// the one pixel border.
    pub fn new(config: AtlasConfig) -> Self {
        let AtlasConfig { width, height } = config;
        let (Ok(packer_width), Ok(packer_height)) = (i32::try_from(width), i32::try_from(height))
        else {
            panic!("atlas of {width}x{height} is too large");
        };
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![0; len],
            packer: ShelfPacker::new(packer_width, packer_height),
            pending_uploads: Vec::new(),
        }
    }

    /// Creates a zeroed `width` by `height` surface.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::new(AtlasConfig::new(width, height))
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reserves a `width` by `height` block.
    ///
    /// Callers that want blank space between blocks pad the request
    /// themselves. See [`ShelfPacker::reserve`].
    pub fn reserve(&mut self, width: i32, height: i32) -> Result<Region, AtlasFull> {
        self.packer.reserve(width, height)
    }

    /// Copies a bitmap into `region`.
    ///
    /// `source` holds `region.height` rows of at least `region.width` bytes,
    /// starting `source_stride` bytes apart. The region is queued for
    /// [`take_pending_uploads`](Self::take_pending_uploads).
    ///
    /// # Panics
    ///
    /// Panics if `region` reaches into the border or past the canvas, or if
    /// `source` is too short for the given stride.
    pub fn write_pixels(&mut self, region: Region, source: &[u8], source_stride: usize) {
        assert!(
            region.width >= 0 && region.height >= 0,
            "negative region size: {region:?}"
        );
        assert!(
            region.x >= BORDER
                && region.y >= BORDER
                && i64::from(region.right()) <= i64::from(self.width) - i64::from(BORDER)
                && i64::from(region.bottom()) <= i64::from(self.height) - i64::from(BORDER),
            "{region:?} is outside the usable area of a {}x{} atlas",
            self.width,
            self.height
        );
        if region.is_empty() {
            return;
        }

        let x = region.x as usize;
        let y = region.y as usize;
        let w = region.width as usize;
        let h = region.height as usize;
        assert!(
            source_stride >= w,
            "stride {source_stride} is shorter than a {w} pixel row"
        );
        assert!(
            bitmap_len(w, h, source_stride).is_some_and(|len| source.len() >= len),
            "{} bytes cannot hold {h} rows of {w} pixels at stride {source_stride}",
            source.len()
        );

        let atlas_stride = self.width as usize;
        for (row, src) in source.chunks(source_stride).take(h).enumerate() {
            let start = (y + row) * atlas_stride + x;
            self.pixels[start..start + w].copy_from_slice(&src[..w]);
        }
        self.pending_uploads.push(region);
    }

    /// Texture coordinates of `region` on this surface.
    pub fn normalize(&self, region: Region) -> NormalizedRegion {
        NormalizedRegion::from_region(region, self.width, self.height)
    }

    /// Fraction of the canvas consumed by reservations, in `[0, 1]`.
    ///
    /// Counts the full reserved blocks, padding included, and never decreases.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a ratio in [0, 1] only loses precision as f32"
    )]
    pub fn fill_ratio(&self) -> f32 {
        let total = u64::from(self.width) * u64::from(self.height);
        (self.packer.used_area() as f64 / total as f64) as f32
    }

    /// The whole buffer, row-major, row 0 at the top.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Row `y` of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not below [`height`](Self::height).
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} is outside a {} row atlas", self.height);
        let stride = self.width as usize;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    /// The bytes of `region` on row `row` of the region, for sub-image uploads.
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the canvas.
    pub fn region_row(&self, region: Region, row: i32) -> &[u8] {
        let y = u32::try_from(region.y + row).unwrap_or(u32::MAX);
        let line = self.row(y);
        let x = region.x as usize;
        &line[x..x + region.width as usize]
    }

    /// The current skyline of the packer.
    pub fn shelves(&self) -> &[Shelf] {
        self.packer.shelves()
    }

    /// Whether any region was written since the last
    /// [`take_pending_uploads`](Self::take_pending_uploads).
    pub fn has_pending_uploads(&self) -> bool {
        !self.pending_uploads.is_empty()
    }

    /// Takes the regions written since the last call, leaving the queue empty.
    ///
    /// The graphics layer uploads each one (see
    /// [`region_row`](Self::region_row)) to keep its texture in step.
    pub fn take_pending_uploads(&mut self) -> Vec<Region> {
        core::mem::take(&mut self.pending_uploads)
    }
}

/// Bytes needed for `height` rows of `width` pixels starting `stride` apart.
///
/// The last row needs no padding after it. `None` if the length overflows.
pub(crate) fn bitmap_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }
    (height - 1).checked_mul(stride)?.checked_add(width)
}

#[cfg(feature = "png")]
impl AtlasSurface {
    /// Encodes the buffer as an 8-bit grayscale PNG.
    pub fn write_png<W: std::io::Write>(&self, writer: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        Ok(())
    }

    /// Saves the buffer as an 8-bit grayscale PNG, creating parent directories.
    pub fn save_png(&self, path: &std::path::Path) -> std::io::Result<()> {
        use std::fs::File;
        use std::io::BufWriter;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_png(BufWriter::new(file))
            .map_err(std::io::Error::other)
    }
}

impl Debug for AtlasSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AtlasSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("shelves", &self.packer.shelves().len())
            .field("fill_ratio", &self.fill_ratio())
            .field("pending_uploads", &self.pending_uploads.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{AtlasSurface, bitmap_len};
    use crate::{AtlasConfig, NormalizedRegion};
    use alloc::vec;
    use alloc::vec::Vec;
    use quickcheck_macros::quickcheck;
    use shelf_pack::Region;

    #[test]
    fn starts_zeroed() {
        let surface = AtlasSurface::with_size(16, 8);
        assert_eq!(surface.pixels().len(), 128);
        assert!(surface.pixels().iter().all(|&p| p == 0));
        assert_eq!(surface.fill_ratio(), 0.0);
        assert!(!surface.has_pending_uploads());
    }

    #[test]
    fn default_config_is_512() {
        let surface = AtlasSurface::new(AtlasConfig::default());
        assert_eq!((surface.width(), surface.height()), (512, 512));
    }

    #[test]
    fn reserve_delegates_to_packer() {
        let mut surface = AtlasSurface::with_size(64, 64);
        assert_eq!(surface.reserve(10, 10), Ok(Region::new(1, 1, 10, 10)));
        assert_eq!(surface.reserve(10, 10), Ok(Region::new(11, 1, 10, 10)));
        assert!(surface.reserve(100, 5).is_err());
        assert_eq!(surface.shelves().len(), 2);
    }

    #[test]
    fn writes_rows_with_stride() {
        let mut surface = AtlasSurface::with_size(8, 8);
        let region = surface.reserve(3, 2).unwrap();
        // Two rows of three pixels, each followed by two bytes of junk.
        let source = [1, 2, 3, 0xEE, 0xEE, 4, 5, 6];
        surface.write_pixels(region, &source, 5);

        assert_eq!(surface.row(0), &[0; 8]);
        assert_eq!(surface.row(1), &[0, 1, 2, 3, 0, 0, 0, 0]);
        assert_eq!(surface.row(2), &[0, 4, 5, 6, 0, 0, 0, 0]);
        assert_eq!(surface.row(3), &[0; 8]);
        assert_eq!(surface.region_row(region, 1), &[4, 5, 6]);
        assert!(!surface.pixels().contains(&0xEE));
    }

    #[test]
    fn pending_uploads_are_drained() {
        let mut surface = AtlasSurface::with_size(32, 32);
        let a = surface.reserve(2, 2).unwrap();
        let b = surface.reserve(4, 1).unwrap();
        surface.write_pixels(a, &[9; 4], 2);
        surface.write_pixels(b, &[7; 4], 4);
        // Empty writes are not worth an upload.
        surface.write_pixels(Region::new(a.x, a.y, 0, 0), &[], 0);

        assert!(surface.has_pending_uploads());
        assert_eq!(surface.take_pending_uploads(), vec![a, b]);
        assert!(surface.take_pending_uploads().is_empty());
    }

    #[test]
    fn normalize_uses_canvas_size() {
        let surface = AtlasSurface::with_size(64, 32);
        assert_eq!(
            surface.normalize(Region::new(16, 8, 16, 8)),
            NormalizedRegion::new(0.25, 0.25, 0.5, 0.5)
        );
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "test ratios are compared at f32 precision"
    )]
    fn ratio(area: u64, total: u64) -> f32 {
        (area as f64 / total as f64) as f32
    }

    #[test]
    fn fill_ratio_counts_single_pixels() {
        let mut surface = AtlasSurface::with_size(64, 64);
        let mut count = 0_u32;
        while surface.reserve(1, 1).is_ok() {
            count += 1;
        }
        assert_eq!(count, 62 * 62);
        assert_eq!(surface.fill_ratio(), ratio(u64::from(count), 64 * 64));
        assert!(surface.reserve(1, 1).is_err());
    }

    #[quickcheck]
    fn fill_ratio_never_decreases(raw: Vec<(u8, u8)>) -> bool {
        let mut surface = AtlasSurface::with_size(80, 80);
        let mut area = 0_u64;
        let mut last = 0.0;
        for (w, h) in raw {
            let (w, h) = (i32::from(w % 20) + 1, i32::from(h % 20) + 1);
            if let Ok(region) = surface.reserve(w, h) {
                area += region.area();
            }
            let fill = surface.fill_ratio();
            if fill < last || fill != ratio(area, 6400) {
                return false;
            }
            last = fill;
        }
        true
    }

    #[test]
    #[should_panic(expected = "outside the usable area")]
    fn write_into_border_panics() {
        let mut surface = AtlasSurface::with_size(8, 8);
        surface.write_pixels(Region::new(0, 1, 2, 2), &[0; 4], 2);
    }

    #[test]
    #[should_panic(expected = "cannot hold 2 rows")]
    fn short_source_panics() {
        let mut surface = AtlasSurface::with_size(8, 8);
        let region = surface.reserve(3, 2).unwrap();
        surface.write_pixels(region, &[0; 5], 3);
    }

    #[test]
    #[should_panic(expected = "cannot hold 2 rows")]
    fn overflowing_stride_panics() {
        let mut surface = AtlasSurface::with_size(8, 8);
        let region = surface.reserve(3, 2).unwrap();
        surface.write_pixels(region, &[0; 5], usize::MAX);
    }

    #[test]
    fn bitmap_len_skips_trailing_padding() {
        assert_eq!(bitmap_len(3, 2, 5), Some(8));
        assert_eq!(bitmap_len(4, 1, 100), Some(4));
        assert_eq!(bitmap_len(0, 7, 9), Some(0));
        assert_eq!(bitmap_len(3, 0, 9), Some(0));
        assert_eq!(bitmap_len(3, 3, usize::MAX), None);
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_round_trip() {
        let mut surface = AtlasSurface::with_size(8, 4);
        let region = surface.reserve(2, 2).unwrap();
        surface.write_pixels(region, &[10, 20, 30, 40], 2);

        let mut encoded = Vec::new();
        surface.write_png(&mut encoded).unwrap();

        let decoder = png::Decoder::new(encoded.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut decoded = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut decoded).unwrap();
        assert_eq!((info.width, info.height), (8, 4));
        assert_eq!(info.color_type, png::ColorType::Grayscale);
        assert_eq!(&decoded[..info.buffer_size()], surface.pixels());
    }
}
