//! Checks and adjustments over image metadata.

mod aspect_ratio;
mod max_size;

pub use aspect_ratio::AspectRatioGrape;
pub use max_size::MaxSizeGrape;

use serde::{Deserialize, Serialize};

/// Dimensions and format of an image; the pixel data itself never enters a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: String,
}

impl ImageMetadata {
    pub fn new(width: u32, height: u32, format: impl Into<String>) -> Self {
        Self {
            width,
            height,
            format: format.into(),
        }
    }

    /// Width divided by height; not finite when the height is zero.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}
