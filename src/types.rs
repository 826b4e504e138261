use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle with exclusive right/bottom edges.
///
/// `width = right - left` and `height = bottom - top`, matching slice-range
/// conventions, so a box is non-degenerate iff both extents are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl BoundingBox {
    pub fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    /// Box height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the box encloses at least one pixel.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.right > self.left && self.bottom > self.top
    }
}

/// Summary of one pipeline run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResult {
    /// Output width in pixels (equals the configured favicon size).
    pub width: usize,
    /// Output height in pixels (equals the configured favicon size).
    pub height: usize,
    /// Number of pixels rewritten by the green-to-burgundy remap.
    pub recolored_pixels: usize,
    /// Tight box around opaque content after thickening, if any.
    pub content_box: Option<BoundingBox>,
    /// Whether the crop/canvas path ran (false: fully transparent input).
    pub cropped: bool,
    pub latency_ms: f64,
}
