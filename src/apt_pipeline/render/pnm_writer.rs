use std::io::{BufWriter, Write};
use tracing::debug;
use crate::apt_pipeline::common::error::Result;
use crate::apt_pipeline::render::raster::{ColorMode, Raster};
use crate::apt_pipeline::render::types::PipelineConfig;
use crate::apt_pipeline::render::writer::RasterWriter;

/// Plain (ASCII) PGM/PPM writer.
///
/// `P2` for grayscale, `P3` for RGB. Every value is followed by a space and every
/// image row ends with a newline.
pub struct PnmWriter;

impl PnmWriter {
    fn magic(mode: ColorMode) -> &'static str {
        match mode {
            ColorMode::Gray => "P2",
            ColorMode::Rgb => "P3",
        }
    }
}

impl RasterWriter for PnmWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, _config: &PipelineConfig) -> Result<()> {
        debug!("Writing {} image: {}x{}", Self::magic(raster.mode), raster.width, raster.height);

        let mut out = BufWriter::new(output);
        writeln!(
            out,
            "{} {} {} {}",
            Self::magic(raster.mode),
            raster.width,
            raster.height,
            Raster::MAX_VALUE
        )?;

        for y in 0..raster.height {
            for value in raster.row(y) {
                write!(out, "{} ", value)?;
            }
            writeln!(out)?;
        }
        out.flush()?;

        debug!("PNM encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apt_pipeline::channel::ChannelBuffer;

    fn write(raster: &Raster) -> String {
        let mut output = Vec::new();
        PnmWriter
            .write_raster(raster, &mut output, &PipelineConfig::default())
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_gray_dump() {
        let mut buffer = ChannelBuffer::new(3);
        buffer.push_line(&[1, 2, 3]).unwrap();
        buffer.push_line(&[4, 5, 65535]).unwrap();

        assert_eq!(write(&Raster::gray(&buffer)), "P2 3 2 65535\n65535 5 4 \n3 2 1 \n");
    }

    #[test]
    fn test_rgb_dump() {
        let raster = Raster {
            width: 2,
            height: 1,
            mode: ColorMode::Rgb,
            data: vec![1, 2, 3, 4, 5, 6],
        };
        assert_eq!(write(&raster), "P3 2 1 65535\n1 2 3 4 5 6 \n");
    }

    #[test]
    fn test_empty_raster_has_header_only() {
        let raster = Raster::gray(&ChannelBuffer::new(5));
        assert_eq!(write(&raster), "P2 5 0 65535\n");
    }
}
