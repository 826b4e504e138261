//! Owned 8-bit RGBA image in row-major layout (stride == width).
//!
//! Four bytes per pixel, interleaved `[r, g, b, a]`. All pipeline stages
//! operate on this buffer; conversion to the `image` crate's types happens
//! only at the I/O and resampling boundaries.

use image::RgbaImage;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBuffer {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order, `CHANNELS` bytes per pixel
    pub data: Vec<u8>,
}

impl RgbaBuffer {
    /// Construct a fully transparent buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h * CHANNELS],
        }
    }

    /// Wrap raw interleaved RGBA bytes. Panics if the length does not match.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            w * h * CHANNELS,
            "raw buffer length must be w * h * 4"
        );
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to the index of the pixel's first byte in `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.stride + x) * CHANNELS
    }

    #[inline]
    /// Get the `[r, g, b, a]` channels at (x, y).
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.idx(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    /// Set the `[r, g, b, a]` channels at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 4]) {
        let i = self.idx(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    #[inline]
    /// Alpha channel at (x, y).
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y) + 3]
    }

    #[inline]
    /// Borrow row `y` as interleaved bytes.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride * CHANNELS;
        &self.data[start..start + self.w * CHANNELS]
    }

    #[inline]
    /// Mutably borrow row `y` as interleaved bytes.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride * CHANNELS;
        let end = start + self.w * CHANNELS;
        &mut self.data[start..end]
    }

    /// Convert into the `image` crate's buffer type.
    pub fn into_image(self) -> RgbaImage {
        RgbaImage::from_raw(self.w as u32, self.h as u32, self.data)
            .expect("buffer length matches dimensions")
    }

    /// Convert into the `image` crate's buffer type without consuming `self`.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.w as u32, self.h as u32, self.data.clone())
            .expect("buffer length matches dimensions")
    }

    /// Build from the `image` crate's buffer type.
    pub fn from_image(img: RgbaImage) -> Self {
        let w = img.width() as usize;
        let h = img.height() as usize;
        Self::from_raw(w, h, img.into_raw())
    }
}
