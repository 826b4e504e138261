//! Structured diagnostics for the enhancement pipeline.
//!
//! [`EnhanceReport`] pairs the final favicon and summary with a
//! [`PipelineTrace`] describing what each stage did and how long it took.
//! The trace serializes to camelCase JSON for the demo tooling.

mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::image::RgbaBuffer;
use crate::types::{BoundingBox, EnhanceResult};
use serde::Serialize;

/// Result produced by
/// [`FaviconEnhancer::process_with_diagnostics`](crate::FaviconEnhancer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceReport {
    #[serde(skip)]
    pub favicon: RgbaBuffer,
    pub result: EnhanceResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the pipeline.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub recolor: RecolorStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasStage>,
    pub output: OutputDescriptor,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecolorStage {
    pub matched_pixels: usize,
    pub target_color: [u8; 3],
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropStage {
    /// Tight box around opaque content after the first dilation.
    pub content_box: BoundingBox,
    /// Box actually cropped (shrunk, or the content box on fallback).
    pub applied_box: BoundingBox,
    /// True when the shrunk box was degenerate and the content box was used.
    pub used_fallback_box: bool,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasStage {
    pub side: usize,
    pub offset_x: usize,
    pub offset_y: usize,
    pub margin: usize,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    pub width: usize,
    pub height: usize,
    pub sharpened: bool,
}
