//! Reader for raw little-endian sample dumps.

use tracing::{debug, warn};
use crate::apt_pipeline::channel::ChannelBuffer;
use crate::apt_pipeline::common::error::{Result, ConversionError};
use crate::apt_pipeline::raw::reader::ScanlineReader;
use crate::apt_pipeline::render::PipelineConfig;

const BYTES_PER_SAMPLE: usize = 2;

/// Reads consecutive little-endian `u16` samples, one layout width per scanline.
pub struct LittleEndianReader;

impl ScanlineReader for LittleEndianReader {
    fn read_channel(&self, data: &[u8], config: &PipelineConfig) -> Result<ChannelBuffer> {
        config.layout.validate()?;
        let width = config.layout.width();
        let line_bytes = width * BYTES_PER_SAMPLE;

        debug!("Reading scanlines, {} bytes at {} words per line", data.len(), width);

        let lines = data.chunks_exact(line_bytes);
        let remainder = lines.remainder().len();
        if remainder > 0 {
            if !config.allow_partial_line {
                return Err(ConversionError::InputReadError(format!(
                    "{} trailing bytes do not fill a {}-word scanline",
                    remainder, width
                )));
            }
            warn!("Dropping incomplete trailing scanline ({} bytes)", remainder);
        }

        let mut buffer = ChannelBuffer::with_capacity(width, data.len() / line_bytes);
        let mut line = Vec::with_capacity(width);
        for bytes in lines {
            line.clear();
            line.extend(
                bytes
                    .chunks_exact(BYTES_PER_SAMPLE)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]])),
            );
            buffer.push_line(&line)?;
        }

        debug!("Read {} scanlines", buffer.height());
        Ok(buffer)
    }
}
