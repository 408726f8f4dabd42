use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use bayer2tga::image_pipeline::{FrameConfig, Rg10ToTgaPipeline};
use bayer2tga::logger::{self, error, info};

/// Convert one raw RG10 Bayer frame into a 24-bit TGA image
#[derive(Parser)]
#[command(name = "bayer2tga", version)]
struct Cli {
    /// Raw RG10 frame to read
    input: PathBuf,
    /// TGA file to write
    output: PathBuf,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = FrameConfig::default();
    let pipeline = Rg10ToTgaPipeline::new(config).context("invalid frame configuration")?;

    info!(
        "Frame: {}x{}, {}-bit {} -> {}-bit RGB",
        pipeline.config().width,
        pipeline.config().height,
        pipeline.config().input_bits,
        pipeline.config().pattern.name(),
        pipeline.config().output_bits
    );

    let timings = pipeline
        .convert_file_with_timings(&cli.input, &cli.output)
        .with_context(|| format!("converting {}", cli.input.display()))?;
    timings.log_summary();

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init();

    match run(&cli) {
        Ok(()) => {
            info!("Conversion successful!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            // Printed as well so the failure is visible with RUST_LOG=off.
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
