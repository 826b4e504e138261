//! Square canvas compositing.

use crate::image::rgba::{RgbaBuffer, CHANNELS};

/// Where the content landed inside the square canvas.
#[derive(Clone, Copy, Debug)]
pub struct CanvasPlacement {
    pub side: usize,
    pub offset_x: usize,
    pub offset_y: usize,
}

/// Paste `content` centered into a transparent square canvas with `margin`
/// transparent pixels on every side. The canvas side is
/// `max(w, h) + 2 * margin`, so the longer content edge sets the size.
pub fn composite_square(content: &RgbaBuffer, margin: usize) -> (RgbaBuffer, CanvasPlacement) {
    let side = (content.w + margin * 2).max(content.h + margin * 2);
    let offset_x = (side - content.w) / 2;
    let offset_y = (side - content.h) / 2;

    let mut canvas = RgbaBuffer::new(side, side);
    for y in 0..content.h {
        let src = content.row(y);
        let dst = canvas.row_mut(offset_y + y);
        dst[offset_x * CHANNELS..(offset_x + content.w) * CHANNELS].copy_from_slice(src);
    }
    (
        canvas,
        CanvasPlacement {
            side,
            offset_x,
            offset_y,
        },
    )
}
