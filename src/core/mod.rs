// texture-downscale/src/core/mod.rs
pub mod processor;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_TARGET_SIZE: u32 = 16;
pub const MAX_TARGET_SIZE: u32 = 100_000;

/// How the target size maps onto output dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectMode {
    /// Output is always `size x size`, whatever the source proportions.
    #[default]
    ForceSquare,
    /// Longer side becomes `size`, shorter side scales by the same ratio.
    Preserve,
}

impl AspectMode {
    pub fn from_keep_aspect(keep_aspect: bool) -> Self {
        if keep_aspect {
            AspectMode::Preserve
        } else {
            AspectMode::ForceSquare
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for ImageDimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownscaleConfig {
    pub target_size: u32,
    pub aspect: AspectMode,
}

impl Default for DownscaleConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            aspect: AspectMode::ForceSquare,
        }
    }
}

impl DownscaleConfig {
    pub fn validate(&self) -> Result<()> {
        validate_target_size(self.target_size)
    }
}

/// A single resize job. Built once per invocation, or once per file in batch mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub target_size: u32,
    pub aspect: AspectMode,
}

impl ResizeRequest {
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>, config: DownscaleConfig) -> Self {
        Self {
            input: input.into(),
            output,
            target_size: config.target_size,
            aspect: config.aspect,
        }
    }
}

/// What a successful single-file downscale produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownscaleReport {
    pub original: ImageDimensions,
    pub resized: ImageDimensions,
    pub output: PathBuf,
}

impl fmt::Display for DownscaleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Downscaled: {} → {}", self.original, self.resized)?;
        write!(f, "  Output: {}", self.output.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub file_name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Successfully written files, in discovery order.
    pub outputs: Vec<PathBuf>,
    pub attempted: usize,
    pub failures: Vec<BatchFailure>,
    pub output_dir: PathBuf,
}

impl BatchResult {
    pub fn empty(output_dir: PathBuf) -> Self {
        Self {
            outputs: Vec::new(),
            attempted: 0,
            failures: Vec::new(),
            output_dir,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempted == 0
    }
}

#[derive(Error, Debug)]
pub enum DownscaleError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{0}")]
    Codec(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, DownscaleError>;

pub fn validate_target_size(target_size: u32) -> Result<()> {
    if target_size == 0 {
        return Err(DownscaleError::InvalidParameter(
            "Target size must be at least 1 pixel".to_string(),
        ));
    }

    if target_size > MAX_TARGET_SIZE {
        return Err(DownscaleError::InvalidParameter(format!(
            "Target size too large (max {} pixels)",
            MAX_TARGET_SIZE
        )));
    }

    Ok(())
}
