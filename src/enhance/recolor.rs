//! Green-to-burgundy remap.
//!
//! A pixel is "green" when its green channel clears an absolute threshold,
//! dominates both red and blue by a fixed ratio, and the pixel is not fully
//! transparent. Matched pixels keep their alpha and take the target color
//! scaled by the original green brightness, so shading in the line art
//! survives the recolor.

use super::options::EnhanceOptions;
use crate::image::RgbaBuffer;

#[inline]
fn is_green(px: [u8; 4], threshold: u8, ratio: f32) -> bool {
    let [r, g, b, a] = px;
    g > threshold
        && f32::from(g) > ratio * f32::from(r)
        && f32::from(g) > ratio * f32::from(b)
        && a > 0
}

/// Recolor green-dominant pixels in place. Returns the number of pixels
/// rewritten.
///
/// Replacement channels are truncated to integers:
/// `r = target_r * brightness * red_boost`, `g = target_g * brightness`,
/// `b = target_b * brightness` with `brightness = green / 255`.
pub fn recolor_green_to_target(img: &mut RgbaBuffer, options: &EnhanceOptions) -> usize {
    let [tr, tg, tb] = options.target_color;
    let mut matched = 0usize;
    for y in 0..img.h {
        for x in 0..img.w {
            let px = img.get(x, y);
            if !is_green(px, options.green_threshold, options.dominance_ratio) {
                continue;
            }
            let brightness = f32::from(px[1]) / 255.0;
            let r = (f32::from(tr) * brightness * options.red_boost) as u8;
            let g = (f32::from(tg) * brightness) as u8;
            let b = (f32::from(tb) * brightness) as u8;
            img.set(x, y, [r, g, b, px[3]]);
            matched += 1;
        }
    }
    matched
}
