// texture-downscale/src/processors/resizer.rs
use crate::core::{AspectMode, ImageDimensions};
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Nearest-neighbor resizer. Hard pixel edges are the point, so there is no
/// filter choice.
#[derive(Debug, Clone, Copy)]
pub struct Resizer {
    aspect: AspectMode,
}

impl Resizer {
    pub fn new(aspect: AspectMode) -> Self {
        Self { aspect }
    }

    pub fn resize(&self, image: &DynamicImage, target_size: u32) -> DynamicImage {
        let original = ImageDimensions::from(image.dimensions());
        let target = self.calculate_dimensions(original, target_size);
        self.resize_to(image, target)
    }

    pub fn resize_to(&self, image: &DynamicImage, target: ImageDimensions) -> DynamicImage {
        if target.width == image.width() && target.height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}",
            image.width(),
            image.height(),
            target
        );

        image.resize_exact(target.width, target.height, FilterType::Nearest)
    }

    pub fn calculate_dimensions(&self, original: ImageDimensions, target_size: u32) -> ImageDimensions {
        calculate_dimensions(original, target_size, self.aspect)
    }
}

/// Output dimensions for `original` at `target_size`.
///
/// `ForceSquare` ignores the source proportions. `Preserve` scales by
/// `target_size / max(w, h)`, truncating toward zero and never going below 1.
/// The scaling is done in integer arithmetic so the longer side lands exactly
/// on `target_size`.
pub fn calculate_dimensions(
    original: ImageDimensions,
    target_size: u32,
    aspect: AspectMode,
) -> ImageDimensions {
    match aspect {
        AspectMode::ForceSquare => ImageDimensions::new(target_size, target_size),
        AspectMode::Preserve => {
            let longest = original.width.max(original.height).max(1) as u64;
            let scale = |side: u32| -> u32 {
                let scaled = side as u64 * target_size as u64 / longest;
                (scaled as u32).max(1)
            };
            ImageDimensions::new(scale(original.width), scale(original.height))
        }
    }
}
