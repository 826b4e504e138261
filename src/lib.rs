#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod enhance;
pub mod image;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: enhancer + results.
pub use crate::enhance::{EnhanceOptions, Enhanced, FaviconEnhancer};
pub use crate::types::{BoundingBox, EnhanceResult};

// High-level diagnostics returned by the enhancer.
pub use crate::diagnostics::{EnhanceReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use favicon_enhancer::prelude::*;
///
/// # fn main() {
/// let src = RgbaBuffer::new(64, 64);
/// let enhancer = FaviconEnhancer::new(EnhanceOptions::default());
///
/// let enhanced = enhancer.process(src);
/// println!(
///     "favicon {}x{} latency_ms={:.3}",
///     enhanced.result.width, enhanced.result.height, enhanced.result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbaBuffer;
    pub use crate::{EnhanceOptions, EnhanceResult, Enhanced, FaviconEnhancer};
}
