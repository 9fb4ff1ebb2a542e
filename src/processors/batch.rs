use crate::core::processor::Downscaler;
use crate::core::{
    BatchFailure, BatchResult, DownscaleConfig, DownscaleError, DownscaleReport, ResizeRequest,
    Result,
};
use crate::utils::{batch_output_dir, batch_output_path, is_supported_format};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Downscales every supported image directly inside a directory, one at a time.
///
/// A file that fails is reported and skipped; only directory-level problems
/// abort the batch.
pub struct BatchProcessor {
    config: DownscaleConfig,
    downscaler: Downscaler,
}

impl BatchProcessor {
    pub fn new(config: DownscaleConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            downscaler: Downscaler::new(),
        })
    }

    pub fn process_directory(&self, input_dir: &Path, output_dir: Option<&Path>) -> Result<BatchResult> {
        self.validate_input(input_dir)?;

        let output_dir = batch_output_dir(input_dir, output_dir, self.config.target_size);
        // Created before discovery, so an empty input still leaves the directory behind.
        std::fs::create_dir_all(&output_dir)?;

        let image_paths = self.collect_image_paths(input_dir);

        if image_paths.is_empty() {
            println!("No image files found in {}", input_dir.display());
            return Ok(BatchResult::empty(output_dir));
        }

        println!("Processing {} images...", image_paths.len());
        log::debug!(
            "Batch of {} images from {} into {}",
            image_paths.len(),
            input_dir.display(),
            output_dir.display()
        );

        let pb = self.create_progress_bar(image_paths.len());

        let result = image_paths.iter().fold(
            BatchResult {
                attempted: image_paths.len(),
                ..BatchResult::empty(output_dir.clone())
            },
            |mut result, input_path| {
                match self.process_single_image_in_batch(input_path, &output_dir) {
                    Ok(report) => {
                        pb.suspend(|| println!("{}", report));
                        result.outputs.push(report.output);
                    }
                    Err(e) => {
                        let failure = BatchFailure {
                            file_name: display_name(input_path),
                            message: e.to_string(),
                        };
                        pb.suspend(|| {
                            println!("✗ Error processing {}: {}", failure.file_name, failure.message)
                        });
                        log::debug!("Batch entry {} failed: {:?}", input_path.display(), e);
                        result.failures.push(failure);
                    }
                }
                pb.inc(1);
                result
            },
        );

        pb.finish_and_clear();

        Ok(result)
    }

    fn process_single_image_in_batch(
        &self,
        input_path: &Path,
        output_dir: &Path,
    ) -> Result<DownscaleReport> {
        let output_path = batch_output_path(input_path, output_dir).ok_or_else(|| {
            DownscaleError::InvalidParameter(format!("Invalid file name: {}", input_path.display()))
        })?;

        let request = ResizeRequest::new(input_path, Some(output_path), self.config);
        self.downscaler.process(&request)
    }

    /// Direct children only, regular files (following symlinks), sorted by name.
    fn collect_image_paths(&self, input_dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_supported_format(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }

    fn validate_input(&self, input_dir: &Path) -> Result<()> {
        if !input_dir.is_dir() {
            return Err(DownscaleError::NotADirectory(input_dir.to_path_buf()));
        }

        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
