//! Resampling to the final favicon resolution.

use crate::image::RgbaBuffer;
use image::imageops::{self, FilterType};

/// Scale to `size × size` with Lanczos3 resampling.
pub fn resize_lanczos(img: &RgbaBuffer, size: usize) -> RgbaBuffer {
    let resized = imageops::resize(
        &img.to_image(),
        size as u32,
        size as u32,
        FilterType::Lanczos3,
    );
    RgbaBuffer::from_image(resized)
}
