use super::ImageMetadata;
use crate::core::error::GrapeResult;
use crate::core::grape::Grape;
use async_trait::async_trait;

/// Clamps each dimension independently to its maximum. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct MaxSizeGrape {
    max_width: u32,
    max_height: u32,
}

impl MaxSizeGrape {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }
}

#[async_trait]
impl Grape<ImageMetadata, ImageMetadata> for MaxSizeGrape {
    async fn process(&self, input: ImageMetadata) -> GrapeResult<ImageMetadata> {
        let mut output = input;
        output.width = output.width.min(self.max_width);
        output.height = output.height.min(self.max_height);
        Ok(output)
    }
}
