//! Edge enhancement.

use crate::image::RgbaBuffer;
use image::imageops;

/// Standard 3×3 sharpening kernel `[-2 -2 -2; -2 32 -2; -2 -2 -2] / 16`.
const SHARPEN_KERNEL: [f32; 9] = [
    -0.125, -0.125, -0.125, //
    -0.125, 2.0, -0.125, //
    -0.125, -0.125, -0.125,
];

/// Sharpen all four channels with the standard 3×3 kernel.
pub fn sharpen(img: &RgbaBuffer) -> RgbaBuffer {
    let filtered = imageops::filter3x3(&img.to_image(), &SHARPEN_KERNEL);
    RgbaBuffer::from_image(filtered)
}
