use super::ImageMetadata;
use crate::core::config::StageDefaults;
use crate::core::error::{GrapeError, GrapeResult};
use crate::core::grape::Grape;
use async_trait::async_trait;

const DEFAULT_TOLERANCE: f64 = 0.01;

/// Rejects images whose width/height ratio strays from the target by more than the tolerance.
#[derive(Debug, Clone, Copy)]
pub struct AspectRatioGrape {
    target_ratio: f64,
    tolerance: f64,
}

impl AspectRatioGrape {
    pub fn new(target_ratio: f64) -> Self {
        Self::with_tolerance(target_ratio, DEFAULT_TOLERANCE)
    }

    pub fn with_tolerance(target_ratio: f64, tolerance: f64) -> Self {
        Self {
            target_ratio,
            tolerance,
        }
    }

    pub fn from_defaults(target_ratio: f64, defaults: &StageDefaults) -> Self {
        Self::with_tolerance(target_ratio, defaults.aspect_ratio_tolerance)
    }
}

#[async_trait]
impl Grape<ImageMetadata, ImageMetadata> for AspectRatioGrape {
    async fn process(&self, input: ImageMetadata) -> GrapeResult<ImageMetadata> {
        let current_ratio = input.aspect_ratio();
        if !current_ratio.is_finite() {
            return Err(GrapeError::validation(format!(
                "Aspect ratio undefined for {}x{} image",
                input.width, input.height
            )));
        }

        let diff = (current_ratio - self.target_ratio).abs();
        if diff > self.tolerance {
            return Err(GrapeError::validation(format!(
                "Aspect ratio mismatch. Expected {}, got {} (tolerance: {})",
                self.target_ratio, current_ratio, self.tolerance
            )));
        }

        Ok(input)
    }
}
