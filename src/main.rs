use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use texture_downscale::{BatchProcessor, Cli, DownscaleConfig, Downscaler, ResizeRequest};

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let result = if cli.batch {
        process_batch(cli.input.clone(), cli.output.clone(), cli.config())
    } else {
        process_single(cli.input.clone(), cli.output.clone(), cli.config())
    };

    if let Err(e) = result {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn process_single(
    input: PathBuf,
    output: Option<PathBuf>,
    config: DownscaleConfig,
) -> anyhow::Result<()> {
    let request = ResizeRequest::new(input, output, config);
    let report = Downscaler::new().process(&request)?;

    println!("{}", report);

    Ok(())
}

fn process_batch(
    input: PathBuf,
    output: Option<PathBuf>,
    config: DownscaleConfig,
) -> anyhow::Result<()> {
    let processor = BatchProcessor::new(config)?;
    let result = processor.process_directory(&input, output.as_deref())?;

    if result.is_empty() {
        return Ok(());
    }

    println!();
    println!(
        "✓ Processed {}/{} images",
        result.succeeded(),
        result.attempted
    );
    println!("  Output directory: {}", result.output_dir.display());

    Ok(())
}
