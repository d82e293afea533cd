//! APT channel decoding pipeline
//!
//! Accumulates the scanlines of one sensor channel, locates the telemetry wedge frame,
//! calibrates the samples against it and renders the result as grayscale or, together
//! with an infrared channel, as false color.

pub mod channel;
pub mod telemetry;
pub mod calibration;
pub mod render;
pub mod raw;
pub mod conversions;
pub mod common;
pub mod test_patterns;

pub use common::{
    ConversionError,
    Result,
};

pub use channel::{
    Channel,
    ChannelBuffer,
    ChannelLayout,
};

pub use telemetry::{
    FrameSynchronizer,
    LineStatistics,
    WedgeStatistics,
    Wedges,
};

pub use calibration::Normalizer;

pub use render::{
    FalseColorPalette,
    OutputFormat,
    PipelineConfig,
    PipelineConfigBuilder,
    PnmWriter,
    Raster,
    RasterWriter,
    StandardTiffWriter,
    TiffCompression,
};

pub use raw::{
    LittleEndianReader,
    ScanlineReader,
};

pub use conversions::{
    ChannelToImagePipeline,
};
