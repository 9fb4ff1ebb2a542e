use crate::core::{AspectMode, DownscaleConfig, DEFAULT_TARGET_SIZE};
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  # Downscale single image to 16x16
  texture-downscale image.png

  # Downscale to 32x32
  texture-downscale image.png -s 32

  # Downscale with custom output path
  texture-downscale image.png -o output.png

  # Keep the aspect ratio (longest side becomes the size)
  texture-downscale banner.png -s 64 --keep-aspect

  # Batch downscale entire directory
  texture-downscale textures/ --batch

  # Batch downscale to 64x64
  texture-downscale textures/ --batch -s 64";

/// Downscale images using nearest-neighbor interpolation for pixel art
#[derive(Parser, Debug, Clone)]
#[command(name = "texture-downscale", version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Input image file or directory (with --batch)
    pub input: PathBuf,

    /// Output file path (single file) or directory (batch mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target size in pixels
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TARGET_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub size: u32,

    /// Process all images in a directory
    #[arg(long)]
    pub batch: bool,

    /// Maintain aspect ratio instead of forcing square
    #[arg(long)]
    pub keep_aspect: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn aspect_mode(&self) -> AspectMode {
        AspectMode::from_keep_aspect(self.keep_aspect)
    }

    pub fn config(&self) -> DownscaleConfig {
        DownscaleConfig {
            target_size: self.size,
            aspect: self.aspect_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_single_square_sixteen() {
        let cli = Cli::try_parse_from(["texture-downscale", "icon.png"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("icon.png"));
        assert_eq!(cli.output, None);
        assert!(!cli.batch);
        assert_eq!(
            cli.config(),
            DownscaleConfig {
                target_size: 16,
                aspect: AspectMode::ForceSquare,
            }
        );
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "texture-downscale",
            "textures",
            "--batch",
            "-s",
            "64",
            "-o",
            "out",
            "--keep-aspect",
            "-v",
        ])
        .unwrap();
        assert!(cli.batch);
        assert!(cli.verbose);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.config().target_size, 64);
        assert_eq!(cli.aspect_mode(), AspectMode::Preserve);
    }

    #[test]
    fn long_flags_work() {
        let cli = Cli::try_parse_from([
            "texture-downscale",
            "icon.png",
            "--size",
            "32",
            "--output",
            "small.png",
        ])
        .unwrap();
        assert_eq!(cli.size, 32);
        assert_eq!(cli.output, Some(PathBuf::from("small.png")));
    }

    #[test]
    fn rejects_zero_and_non_numeric_sizes() {
        assert!(Cli::try_parse_from(["texture-downscale", "icon.png", "-s", "0"]).is_err());
        assert!(Cli::try_parse_from(["texture-downscale", "icon.png", "-s", "-4"]).is_err());
        assert!(Cli::try_parse_from(["texture-downscale", "icon.png", "-s", "big"]).is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["texture-downscale"]).is_err());
    }
}
