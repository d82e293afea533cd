//! Rendering and pipeline configuration types

use crate::apt_pipeline::channel::ChannelLayout;
use crate::apt_pipeline::render::palette::FalseColorPalette;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

/// Output container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// ASCII PGM/PPM dump
    Pnm,
    /// 16-bit TIFF
    Tiff,
}

/// Configuration for channel decoding and rendering
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Column layout of the incoming scanlines
    pub layout: ChannelLayout,
    /// Output container
    pub output: OutputFormat,
    /// Compression method, TIFF output only
    pub compression: TiffCompression,
    /// Horizontal differencing before compression, TIFF output only
    pub horizontal_predictor: bool,
    /// Thresholds and weights of the false color composite
    pub palette: FalseColorPalette,
    /// Whether to reject empty channels before calibration
    pub validate_dimensions: bool,
    /// Whether a trailing incomplete scanline is dropped instead of rejected
    pub allow_partial_line: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            layout: ChannelLayout::default(),
            output: OutputFormat::Pnm,
            compression: TiffCompression::None,
            horizontal_predictor: false,
            palette: FalseColorPalette::default(),
            validate_dimensions: true,
            allow_partial_line: false,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    layout: Option<ChannelLayout>,
    output: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    horizontal_predictor: Option<bool>,
    palette: Option<FalseColorPalette>,
    validate_dimensions: Option<bool>,
    allow_partial_line: Option<bool>,
}

impl PipelineConfigBuilder {
    pub fn layout(mut self, layout: ChannelLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn output(mut self, output: OutputFormat) -> Self {
        self.output = Some(output);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn horizontal_predictor(mut self, enable: bool) -> Self {
        self.horizontal_predictor = Some(enable);
        self
    }

    pub fn palette(mut self, palette: FalseColorPalette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn allow_partial_line(mut self, allow: bool) -> Self {
        self.allow_partial_line = Some(allow);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            layout: self.layout.unwrap_or(default.layout),
            output: self.output.unwrap_or(default.output),
            compression: self.compression.unwrap_or(default.compression),
            horizontal_predictor: self.horizontal_predictor.unwrap_or(default.horizontal_predictor),
            palette: self.palette.unwrap_or(default.palette),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            allow_partial_line: self.allow_partial_line.unwrap_or(default.allow_partial_line),
        }
    }
}
