use std::path::Path;

use anyhow::{bail, Context};
use apt_wedge_rs::apt_pipeline::{ChannelToImagePipeline, OutputFormat, PipelineConfig, TiffCompression};
use apt_wedge_rs::logger;

use tracing::{error, info, warn};

const USAGE: &str = "usage: apt_wedge_rs <channel.raw> [<infrared.raw>] <output.pgm|output.tiff>";

fn output_format(path: &str) -> OutputFormat {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("tif") | Some("tiff") => OutputFormat::Tiff,
        _ => OutputFormat::Pnm,
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting apt_wedge...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(output) = args.last() else {
        bail!(USAGE);
    };

    let config = PipelineConfig::builder()
        .output(output_format(output))
        .compression(TiffCompression::DeflateBalanced)
        .build();
    let pipeline = ChannelToImagePipeline::new(config);
    info!("Output format: {:?}", pipeline.config().output);

    let result = match args.as_slice() {
        [input, output] => pipeline.convert_file(input, output),
        [visible, infrared, output] => pipeline.convert_false_color_files(visible, infrared, output),
        _ => bail!(USAGE),
    };

    match result {
        Ok(()) => info!("Conversion successful!"),
        Err(e) if e.is_recoverable() => {
            warn!("Channel could not be converted: {}", e);
            return Err(e).context("conversion failed");
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
