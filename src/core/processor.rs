// texture-downscale/src/core/processor.rs
use super::{validate_target_size, DownscaleReport, ImageDimensions, ResizeRequest, Result};
use crate::processors::{Encoder, Loader, Resizer};
use crate::utils::single_output_path;
use image::GenericImageView;

/// Runs one [`ResizeRequest`]: decode, nearest resize, encode.
#[derive(Debug, Clone, Default)]
pub struct Downscaler {
    loader: Loader,
    encoder: Encoder,
}

impl Downscaler {
    pub fn new() -> Self {
        Self {
            loader: Loader::new(),
            encoder: Encoder::new(),
        }
    }

    pub fn process(&self, request: &ResizeRequest) -> Result<DownscaleReport> {
        validate_target_size(request.target_size)?;

        let image = self.loader.load(&request.input)?;
        let original = ImageDimensions::from(image.dimensions());

        let resizer = Resizer::new(request.aspect);
        let resized_dims = resizer.calculate_dimensions(original, request.target_size);
        let resized = resizer.resize_to(&image, resized_dims);

        let output = single_output_path(
            &request.input,
            request.output.as_deref(),
            request.target_size,
        );
        self.encoder.save(&resized, &output)?;

        Ok(DownscaleReport {
            original,
            resized: resized_dims,
            output,
        })
    }
}
