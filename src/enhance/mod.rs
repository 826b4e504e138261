//! Enhancement pipeline orchestrating the full favicon transformation.
//!
//! The [`FaviconEnhancer`] exposes a simple API: feed an RGBA buffer and get
//! the finished square favicon with a summary of what happened. Internally
//! it coordinates the green-to-burgundy recolor, two dilation passes, the
//! zoom crop, square canvas compositing, Lanczos resampling and the final
//! sharpening.
//!
//! Typical usage:
//! ```no_run
//! use favicon_enhancer::{EnhanceOptions, FaviconEnhancer};
//! use favicon_enhancer::image::RgbaBuffer;
//!
//! # fn example(src: RgbaBuffer) {
//! let enhancer = FaviconEnhancer::new(EnhanceOptions::default());
//! let enhanced = enhancer.process(src);
//! println!("{}x{}", enhanced.result.width, enhanced.result.height);
//! # }
//! ```

pub mod canvas;
pub mod crop;
pub mod morphology;
pub mod options;
pub mod recolor;
pub mod resize;
pub mod sharpen;


pub use canvas::{composite_square, CanvasPlacement};
pub use crop::{alpha_bounding_box, crop as crop_to_box, shrink_box};
pub use morphology::dilate;
pub use options::{EnhanceOptions, BURGUNDY};
pub use recolor::recolor_green_to_target;
pub use resize::resize_lanczos;
pub use sharpen::sharpen;

// Stages
// - Recolor: rewrite green-dominant pixels to brightness-scaled burgundy.
// - Thicken: per-channel max filter (window 3) to fatten the line art.
// - Crop: alpha bounding box, shrunk inward to zoom in on the subject.
// - Canvas: transparent square canvas with a small margin, content centered.
// - Prescale thicken: second max filter (window 2) before resampling.
// - Resize: Lanczos3 down/upscale to the favicon resolution.
// - Sharpen: 3x3 edge-enhancement kernel.
//
// A fully transparent image short-circuits after the bounding-box probe:
// the thickened buffer is resized directly and the remaining stages are
// skipped.

use crate::diagnostics::{
    CanvasStage, CropStage, EnhanceReport, InputDescriptor, OutputDescriptor, PipelineTrace,
    RecolorStage, TimingBreakdown,
};
use crate::image::RgbaBuffer;
use crate::types::EnhanceResult;
use log::debug;
use std::time::Instant;

/// Final favicon plus the run summary.
#[derive(Clone, Debug)]
pub struct Enhanced {
    pub favicon: RgbaBuffer,
    pub result: EnhanceResult,
}

/// Favicon enhancer orchestrating recolor, dilation, zoom crop, canvas
/// compositing, resampling and sharpening.
pub struct FaviconEnhancer {
    options: EnhanceOptions,
}

impl FaviconEnhancer {
    /// Create an enhancer with the supplied options.
    pub fn new(options: EnhanceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EnhanceOptions {
        &self.options
    }

    /// Run the full pipeline.
    pub fn process(&self, src: RgbaBuffer) -> Enhanced {
        let report = self.process_with_diagnostics(src);
        Enhanced {
            favicon: report.favicon,
            result: report.result,
        }
    }

    /// Run the full pipeline and capture detailed diagnostics.
    pub fn process_with_diagnostics(&self, mut src: RgbaBuffer) -> EnhanceReport {
        let opts = &self.options;
        let total_start = Instant::now();
        let input = InputDescriptor {
            width: src.w,
            height: src.h,
        };
        let mut timings = TimingBreakdown::default();

        let stage_start = Instant::now();
        let recolored_pixels = recolor::recolor_green_to_target(&mut src, opts);
        timings.push("recolor", elapsed_ms(stage_start));
        debug!("recolor: {recolored_pixels} pixels rewritten");

        let stage_start = Instant::now();
        let thick = morphology::dilate(&src, opts.thicken_window);
        timings.push("thicken", elapsed_ms(stage_start));

        let content_box = crop::alpha_bounding_box(&thick);
        debug!("content box: {content_box:?}");

        let mut crop_stage = None;
        let mut canvas_stage = None;
        let mut sharpened = false;

        let favicon = if let Some(bbox) = content_box {
            let stage_start = Instant::now();
            let (applied_box, used_fallback_box) =
                crop::shrink_box_with_fallback(bbox, opts.crop_fraction);
            let cropped = crop::crop(&thick, applied_box);
            timings.push("crop", elapsed_ms(stage_start));
            crop_stage = Some(CropStage {
                content_box: bbox,
                applied_box,
                used_fallback_box,
            });

            let stage_start = Instant::now();
            let (canvas_img, placement) = canvas::composite_square(&cropped, opts.margin);
            timings.push("canvas", elapsed_ms(stage_start));
            canvas_stage = Some(CanvasStage {
                side: placement.side,
                offset_x: placement.offset_x,
                offset_y: placement.offset_y,
                margin: opts.margin,
            });

            let stage_start = Instant::now();
            let rethickened = morphology::dilate(&canvas_img, opts.rescale_thicken_window);
            timings.push("prescale_thicken", elapsed_ms(stage_start));

            let stage_start = Instant::now();
            let resized = resize::resize_lanczos(&rethickened, opts.output_size);
            timings.push("resize", elapsed_ms(stage_start));

            let stage_start = Instant::now();
            let sharp = sharpen::sharpen(&resized);
            timings.push("sharpen", elapsed_ms(stage_start));
            sharpened = true;
            sharp
        } else {
            // Nothing opaque to frame: resize the whole canvas as-is.
            debug!("no opaque content found, skipping crop path");
            let stage_start = Instant::now();
            let resized = resize::resize_lanczos(&thick, opts.output_size);
            timings.push("resize", elapsed_ms(stage_start));
            resized
        };

        timings.total_ms = elapsed_ms(total_start);

        let result = EnhanceResult {
            width: favicon.w,
            height: favicon.h,
            recolored_pixels,
            content_box,
            cropped: crop_stage.is_some(),
            latency_ms: timings.total_ms,
        };
        let output = OutputDescriptor {
            width: favicon.w,
            height: favicon.h,
            sharpened,
        };

        EnhanceReport {
            favicon,
            result,
            trace: PipelineTrace {
                input,
                timings,
                recolor: RecolorStage {
                    matched_pixels: recolored_pixels,
                    target_color: opts.target_color,
                },
                crop: crop_stage,
                canvas: canvas_stage,
                output,
            },
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
