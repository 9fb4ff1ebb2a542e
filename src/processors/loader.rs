// texture-downscale/src/processors/loader.rs
use crate::core::{DownscaleError, ImageDimensions, Result};
use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `path`, guessing the format from content and falling back to
    /// the extension.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ImageError::IoError)?
            .decode()?;

        log::debug!(
            "Loaded image: {}, color: {:?}",
            ImageDimensions::from(image.dimensions()),
            image.color()
        );

        Ok(image)
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(DownscaleError::NotFound(path.to_path_buf()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");
        assert!(matches!(
            Loader::new().load(&path),
            Err(DownscaleError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn garbage_is_a_codec_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            Loader::new().load(&path),
            Err(DownscaleError::Codec(_))
        ));
    }

    #[test]
    fn format_is_guessed_from_content() {
        let dir = TempDir::new().unwrap();
        // PNG bytes behind a misleading extension.
        let path = dir.path().join("actually_png.bmp");
        image::RgbaImage::new(3, 5)
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let image = Loader::new().load(&path).unwrap();
        assert_eq!(image.dimensions(), (3, 5));
    }
}
