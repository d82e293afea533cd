use std::io::Write;
use tracing::debug;
use tiff::encoder::colortype::{Gray16, RGB16};
use crate::apt_pipeline::common::error::{Result, ConversionError};
use crate::apt_pipeline::render::raster::{ColorMode, Raster};
use crate::apt_pipeline::render::types::{PipelineConfig, TiffCompression};
use crate::apt_pipeline::render::writer::RasterWriter;

/// Binary 16-bit TIFF writer, far smaller than the ASCII dumps.
pub struct StandardTiffWriter;

impl RasterWriter for StandardTiffWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write, config: &PipelineConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{} {:?}", raster.width, raster.height, raster.mode);

        // The encoder needs to seek, so encode into memory first
        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if config.horizontal_predictor {
            encoder = encoder.with_predictor(tiff::tags::Predictor::Horizontal);
        }

        let width = u32::try_from(raster.width)
            .map_err(|_| ConversionError::InvalidDimensions(raster.width, raster.height))?;
        let height = u32::try_from(raster.height)
            .map_err(|_| ConversionError::InvalidDimensions(raster.width, raster.height))?;

        match raster.mode {
            ColorMode::Gray => encoder.write_image::<Gray16>(width, height, &raster.data),
            ColorMode::Rgb => encoder.write_image::<RGB16>(width, height, &raster.data),
        }
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(raster: &Raster, config: &PipelineConfig) -> Vec<u8> {
        let mut output = Vec::new();
        StandardTiffWriter.write_raster(raster, &mut output, config).unwrap();
        output
    }

    #[test]
    fn test_gray_tiff_decodes_back() {
        let raster = Raster {
            width: 3,
            height: 2,
            mode: ColorMode::Gray,
            data: vec![0, 100, 200, 300, 400, 65535],
        };
        let bytes = encode(&raster, &PipelineConfig::default());

        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(bytes)).unwrap();
        assert_eq!(decoder.dimensions().unwrap(), (3, 2));
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U16(data) => assert_eq!(data, raster.data),
            _ => panic!("expected 16-bit samples"),
        }
    }

    #[test]
    fn test_compressed_rgb_tiff() {
        let raster = Raster {
            width: 4,
            height: 4,
            mode: ColorMode::Rgb,
            data: (0..48u16).map(|v| v * 1000).collect(),
        };
        let config = PipelineConfig::builder()
            .compression(TiffCompression::Lzw)
            .build();
        let bytes = encode(&raster, &config);

        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(bytes)).unwrap();
        assert_eq!(
            decoder.colortype().unwrap(),
            tiff::ColorType::RGB(16)
        );
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U16(data) => assert_eq!(data, raster.data),
            _ => panic!("expected 16-bit samples"),
        }
    }
}
