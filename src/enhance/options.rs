use serde::Deserialize;

/// Replacement target for green line art: a muted burgundy.
pub const BURGUNDY: [u8; 3] = [139, 26, 50];

/// Options controlling the enhancement pipeline.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct EnhanceOptions {
    /// Minimum green channel value for a pixel to be considered green.
    pub green_threshold: u8,
    /// Green must exceed both red and blue by this factor.
    pub dominance_ratio: f32,
    /// RGB triple that replaces matched pixels (scaled by brightness).
    pub target_color: [u8; 3],
    /// Extra factor applied to the red channel of the replacement color.
    pub red_boost: f32,
    /// Max-filter window applied right after recoloring (pixels).
    pub thicken_window: usize,
    /// Max-filter window applied after canvas compositing (pixels).
    pub rescale_thicken_window: usize,
    /// Fraction of the content box trimmed from each side to zoom in.
    pub crop_fraction: f32,
    /// Transparent margin around the content in the square canvas (pixels).
    pub margin: usize,
    /// Side length of the final square favicon (pixels).
    pub output_size: usize,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            green_threshold: 100,
            dominance_ratio: 1.2,
            target_color: BURGUNDY,
            red_boost: 1.2,
            thicken_window: 3,
            rescale_thicken_window: 2,
            crop_fraction: 0.15,
            margin: 5,
            output_size: 256,
        }
    }
}

impl EnhanceOptions {
    pub fn with_target_color(mut self, target_color: [u8; 3]) -> Self {
        self.target_color = target_color;
        self
    }

    pub fn with_crop_fraction(mut self, crop_fraction: f32) -> Self {
        self.crop_fraction = crop_fraction;
        self
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_output_size(mut self, output_size: usize) -> Self {
        self.output_size = output_size;
        self
    }
}
