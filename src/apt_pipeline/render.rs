//! Image rendering module
//!
//! Turns calibrated channels into rasters (grayscale, or false color from a visible and
//! an infrared channel) and serializes them as ASCII PNM or 16-bit TIFF.

mod raster;
mod palette;
mod writer;
mod pnm_writer;
mod standard_tiff_writer;
pub mod types;

pub use raster::{ColorMode, Raster};
pub use palette::{FalseColorPalette, SurfaceClass};
pub use writer::{FormatWriter, RasterWriter};
pub use pnm_writer::PnmWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{OutputFormat, PipelineConfig, PipelineConfigBuilder, TiffCompression};
