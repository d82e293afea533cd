use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::apt_pipeline::{
    channel::Channel,
    common::error::{ConversionError, Result},
    raw::{LittleEndianReader, ScanlineReader},
    render::{FormatWriter, PipelineConfig, Raster, RasterWriter},
};

pub struct ChannelToImagePipeline<R: ScanlineReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
}

impl ChannelToImagePipeline<LittleEndianReader, FormatWriter> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: LittleEndianReader,
            writer: FormatWriter,
            config,
        }
    }
}

impl<R: ScanlineReader, W: RasterWriter> ChannelToImagePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Reads one channel and calibrates it against its telemetry wedges.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn calibrate(&self, input_data: &[u8]) -> Result<Channel> {
        let buffer = {
            let _span = tracing::info_span!("read_scanlines").entered();
            self.reader.read_channel(input_data, &self.config)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = buffer.width(),
                height = buffer.height()
            ).entered();
            self.validate_dimensions(buffer.width(), buffer.height())?;
        }

        let mut channel = Channel::from_buffer(self.config.layout, buffer)?;

        {
            let _span = tracing::info_span!("detect_telemetry").entered();
            channel.detect_telemetry()?;
        }

        {
            let _span = tracing::info_span!("normalize").entered();
            channel.normalize()?;
        }

        Ok(channel)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting channel to grayscale conversion");

        let channel = self.calibrate(input_data)?;

        let raster = {
            let _span = tracing::info_span!("rasterize").entered();
            Raster::gray(channel.buffer())
        };

        {
            let _span = tracing::info_span!("encode_image").entered();
            self.writer.write_raster(&raster, output, &self.config)?;
        }

        info!(
            width = raster.width,
            height = raster.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Renders a visible and an infrared channel of the same pass as false color.
    ///
    /// The two channels are calibrated in parallel.
    #[instrument(skip(self, visible_data, infrared_data, output))]
    pub fn convert_false_color(
        &self,
        visible_data: &[u8],
        infrared_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<()>
    where
        R: Sync,
        W: Sync,
    {
        info!("Starting false color conversion");

        let (visible, infrared) = rayon::join(
            || self.calibrate(visible_data),
            || self.calibrate(infrared_data),
        );
        let (visible, infrared) = (visible?, infrared?);

        let raster = {
            let _span = tracing::info_span!("composite").entered();
            Raster::false_color(
                visible.buffer(),
                infrared.buffer(),
                &self.config.layout,
                &self.config.palette,
            )?
        };

        {
            let _span = tracing::info_span!("encode_image").entered();
            self.writer.write_raster(&raster, output, &self.config)?;
        }

        info!(
            width = raster.width,
            height = raster.height,
            "False color conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = read_input(input_path)?;
        let mut output_file = create_output(output_path)?;

        self.convert(&input_data, &mut output_file)?;

        Ok(())
    }

    #[instrument(skip(self, visible_path, infrared_path, output_path))]
    pub fn convert_false_color_files<P: AsRef<Path>, Q: AsRef<Path>, O: AsRef<Path>>(
        &self,
        visible_path: P,
        infrared_path: Q,
        output_path: O,
    ) -> Result<()>
    where
        R: Sync,
        W: Sync,
    {
        let visible_path = visible_path.as_ref();
        let infrared_path = infrared_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            visible = %visible_path.display(),
            infrared = %infrared_path.display(),
            output = %output_path.display(),
            "Converting file pair"
        );

        let visible_data = read_input(visible_path)?;
        let infrared_data = read_input(infrared_path)?;
        let mut output_file = create_output(output_path)?;

        self.convert_false_color(&visible_data, &infrared_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let _span = tracing::info_span!("read_input_file").entered();
    std::fs::read(path).map_err(|e| {
        ConversionError::InputReadError(format!("{}: {}", path.display(), e))
    })
}

fn create_output(path: &Path) -> Result<std::fs::File> {
    let _span = tracing::info_span!("create_output_file").entered();
    std::fs::File::create(path).map_err(|e| {
        ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
    })
}
