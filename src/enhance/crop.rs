//! Content cropping: alpha bounding box, inward shrink, subimage copy.

use crate::image::rgba::{RgbaBuffer, CHANNELS};
use crate::types::BoundingBox;

/// Tight bounding box around pixels with non-zero alpha, or `None` when the
/// image is fully transparent. Right/bottom edges are exclusive.
pub fn alpha_bounding_box(img: &RgbaBuffer) -> Option<BoundingBox> {
    let mut left = img.w;
    let mut top = img.h;
    let mut right = 0usize;
    let mut bottom = 0usize;
    for y in 0..img.h {
        for x in 0..img.w {
            if img.alpha(x, y) == 0 {
                continue;
            }
            left = left.min(x);
            top = top.min(y);
            right = right.max(x + 1);
            bottom = bottom.max(y + 1);
        }
    }
    (right > left && bottom > top).then(|| BoundingBox::new(left, top, right, bottom))
}

/// Move each edge of `bbox` inward by `trunc(extent * fraction)`.
///
/// A shrink that would leave zero or negative area falls back to the
/// original box unchanged.
pub fn shrink_box(bbox: BoundingBox, fraction: f32) -> BoundingBox {
    shrink_box_with_fallback(bbox, fraction).0
}

/// Same as [`shrink_box`], but also reports whether the degenerate-shrink
/// fallback fired.
pub fn shrink_box_with_fallback(bbox: BoundingBox, fraction: f32) -> (BoundingBox, bool) {
    let dx = (bbox.width() as f32 * fraction) as usize;
    let dy = (bbox.height() as f32 * fraction) as usize;
    let shrunk = BoundingBox::new(
        bbox.left + dx,
        bbox.top + dy,
        bbox.right.saturating_sub(dx),
        bbox.bottom.saturating_sub(dy),
    );
    if shrunk.is_valid() {
        (shrunk, false)
    } else {
        (bbox, true)
    }
}

/// Copy the subimage enclosed by `bbox`. The box must lie inside the image.
pub fn crop(img: &RgbaBuffer, bbox: BoundingBox) -> RgbaBuffer {
    assert!(
        bbox.is_valid() && bbox.right <= img.w && bbox.bottom <= img.h,
        "crop box must be non-degenerate and inside the image"
    );
    let mut out = RgbaBuffer::new(bbox.width(), bbox.height());
    for y in 0..out.h {
        let src = img.row(bbox.top + y);
        let dst = out.row_mut(y);
        dst.copy_from_slice(&src[bbox.left * CHANNELS..bbox.right * CHANNELS]);
    }
    out
}
