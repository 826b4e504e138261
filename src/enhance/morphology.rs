//! Morphological dilation (per-channel max filter).

use crate::image::rgba::{RgbaBuffer, CHANNELS};
use rayon::prelude::*;

/// Dilate with a `window × window` neighborhood, all four channels.
///
/// Each output channel takes the maximum of that channel over the window.
/// Odd windows are centered on the pixel; even windows extend one pixel
/// further toward the bottom-right. Neighbors outside the image are ignored.
/// A window of 0 or 1 returns the input unchanged.
pub fn dilate(img: &RgbaBuffer, window: usize) -> RgbaBuffer {
    if window <= 1 || img.w == 0 || img.h == 0 {
        return img.clone();
    }

    let lo = (window - 1) / 2;
    let hi = window / 2;
    let (w, h) = (img.w, img.h);

    let mut out = RgbaBuffer::new(w, h);
    out.data
        .par_chunks_mut(w * CHANNELS)
        .enumerate()
        .for_each(|(y, out_row)| {
            let y0 = y.saturating_sub(lo);
            let y1 = (y + hi).min(h - 1);
            for x in 0..w {
                let x0 = x.saturating_sub(lo);
                let x1 = (x + hi).min(w - 1);
                let mut acc = [0u8; 4];
                for ny in y0..=y1 {
                    let row = img.row(ny);
                    for nx in x0..=x1 {
                        let i = nx * CHANNELS;
                        for c in 0..CHANNELS {
                            acc[c] = acc[c].max(row[i + c]);
                        }
                    }
                }
                out_row[x * CHANNELS..(x + 1) * CHANNELS].copy_from_slice(&acc);
            }
        });
    out
}
