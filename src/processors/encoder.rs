// texture-downscale/src/processors/encoder.rs
use crate::core::Result;
use image::{ColorType, DynamicImage, ImageFormat};
use std::borrow::Cow;
use std::path::Path;

/// Output extensions that can carry an alpha channel.
const ALPHA_EXTENSIONS: [&str; 2] = ["png", "gif"];

#[derive(Debug, Clone, Default)]
pub struct Encoder;

impl Encoder {
    pub fn new() -> Self {
        Self
    }

    /// Writes `image` to `path` in the format named by its extension.
    ///
    /// Formats without alpha support get the image flattened to RGB first, so
    /// transparency is dropped rather than failing the encode.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path)?;
        let prepared = prepare_for_output(image, path);

        log::debug!(
            "Saving image to {} as {:?} ({:?})",
            path.display(),
            format,
            prepared.color()
        );

        prepared.save_with_format(path, format)?;
        self.log_save_result(path);
        Ok(())
    }

    fn log_save_result(&self, path: &Path) {
        match std::fs::metadata(path) {
            Ok(metadata) => log::debug!("Saved image: {} ({} bytes)", path.display(), metadata.len()),
            Err(e) => log::debug!("Saved image: {} (size unavailable: {})", path.display(), e),
        }
    }
}

pub fn keeps_alpha(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALPHA_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

fn is_gif(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gif"))
        .unwrap_or(false)
}

/// Applies the alpha policy for `path`: unchanged for PNG/GIF, flattened to
/// 8-bit RGB for anything else that has an alpha channel.
///
/// The GIF encoder only takes 8-bit RGB or RGBA, so other layouts are widened
/// to RGBA8 for `.gif` outputs.
pub fn prepare_for_output<'a>(image: &'a DynamicImage, path: &Path) -> Cow<'a, DynamicImage> {
    if is_gif(path) && !matches!(image.color(), ColorType::Rgb8 | ColorType::Rgba8) {
        log::debug!("Converting {:?} to RGBA8 for {}", image.color(), path.display());
        return Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()));
    }

    if keeps_alpha(path) || !image.color().has_alpha() {
        return Cow::Borrowed(image);
    }

    log::debug!("Dropping alpha channel for {}", path.display());
    Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
}
