pub mod cli;
pub mod core;
mod processors;
mod utils;

pub use cli::Cli;
pub use crate::core::{
    processor::Downscaler, validate_target_size, AspectMode, BatchFailure, BatchResult,
    DownscaleConfig, DownscaleError, DownscaleReport, ImageDimensions, ResizeRequest, Result,
    DEFAULT_TARGET_SIZE, MAX_TARGET_SIZE,
};
pub use processors::{
    calculate_dimensions, keeps_alpha, prepare_for_output, BatchProcessor, Encoder, Loader,
    Resizer,
};
pub use utils::{
    batch_output_dir, batch_output_path, is_supported_format, single_output_path,
    SUPPORTED_EXTENSIONS,
};

pub mod prelude {
    pub use crate::{
        AspectMode, BatchProcessor, DownscaleConfig, Downscaler, ResizeRequest, Resizer,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
