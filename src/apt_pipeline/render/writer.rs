use std::io::Write;
use crate::apt_pipeline::common::error::Result;
use crate::apt_pipeline::render::pnm_writer::PnmWriter;
use crate::apt_pipeline::render::raster::Raster;
use crate::apt_pipeline::render::standard_tiff_writer::StandardTiffWriter;
use crate::apt_pipeline::render::types::{OutputFormat, PipelineConfig};

pub trait RasterWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, config: &PipelineConfig) -> Result<()>;
}

/// Picks the writer matching `config.output`.
pub struct FormatWriter;

impl RasterWriter for FormatWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, config: &PipelineConfig) -> Result<()> {
        match config.output {
            OutputFormat::Pnm => PnmWriter.write_raster(raster, output, config),
            OutputFormat::Tiff => StandardTiffWriter.write_raster(raster, output, config),
        }
    }
}
