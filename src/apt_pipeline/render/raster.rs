//! Oriented rasters built from channel buffers
//!
//! Passes are recorded south to north, so both the line order and the column order are
//! reversed to present the image north-up.

use tracing::debug;

use crate::apt_pipeline::channel::{ChannelBuffer, ChannelLayout};
use crate::apt_pipeline::common::error::{ConversionError, Result};
use crate::apt_pipeline::render::palette::FalseColorPalette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Gray,
    Rgb,
}

impl ColorMode {
    pub fn samples_per_pixel(self) -> usize {
        match self {
            ColorMode::Gray => 1,
            ColorMode::Rgb => 3,
        }
    }
}

/// Display-ready image, 16 bits per sample.
#[derive(Debug, Clone)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub mode: ColorMode,
    /// Row-major samples, RGB interleaved in [`ColorMode::Rgb`]
    pub data: Vec<u16>,
}

impl Raster {
    pub const MAX_VALUE: u16 = u16::MAX;

    /// Grayscale image of a channel, flipped both ways.
    pub fn gray(buffer: &ChannelBuffer) -> Self {
        let data = buffer
            .lines()
            .rev()
            .flat_map(|line| line.iter().rev().copied())
            .collect();

        Self {
            width: buffer.width(),
            height: buffer.height(),
            mode: ColorMode::Gray,
            data,
        }
    }

    /// False color composite of a visible and an infrared channel.
    ///
    /// Columns outside the layout's image data are blacked out.
    pub fn false_color(
        visible: &ChannelBuffer,
        infrared: &ChannelBuffer,
        layout: &ChannelLayout,
        palette: &FalseColorPalette,
    ) -> Result<Self> {
        if visible.width() != infrared.width() || visible.height() != infrared.height() {
            return Err(ConversionError::DimensionMismatch(
                visible.width(),
                visible.height(),
                infrared.width(),
                infrared.height(),
            ));
        }

        let width = visible.width();
        let height = visible.height();
        let data_columns = layout.data_range();
        debug!(
            "Compositing false color {}x{}, image columns {:?}",
            width, height, data_columns
        );

        let mut data = Vec::with_capacity(width * height * 3);
        for (line, ir_line) in visible.lines().rev().zip(infrared.lines().rev()) {
            for column in (0..width).rev() {
                let rgb = if data_columns.contains(&column) {
                    palette.color(line[column], ir_line[column])
                } else {
                    [0; 3]
                };
                data.extend_from_slice(&rgb);
            }
        }

        Ok(Self {
            width,
            height,
            mode: ColorMode::Rgb,
            data,
        })
    }

    /// Samples of row `y`, in output order.
    pub fn row(&self, y: usize) -> &[u16] {
        let stride = self.width * self.mode.samples_per_pixel();
        &self.data[y * stride..(y + 1) * stride]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ChannelLayout {
        ChannelLayout {
            sync_words: 1,
            space_words: 0,
            data_words: 2,
            telemetry_words: 1,
        }
    }

    fn buffer(lines: &[[u16; 4]]) -> ChannelBuffer {
        let mut buffer = ChannelBuffer::new(4);
        for line in lines {
            buffer.push_line(line).unwrap();
        }
        buffer
    }

    #[test]
    fn test_gray_is_flipped_both_ways() {
        let raster = Raster::gray(&buffer(&[[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]]));

        assert_eq!((raster.width, raster.height), (4, 3));
        assert_eq!(raster.mode, ColorMode::Gray);
        assert_eq!(raster.row(0), &[12, 11, 10, 9]);
        assert_eq!(raster.row(2), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_false_color_blacks_out_margins() {
        let visible = buffer(&[[50000, 5000, 20000, 50000]]);
        let infrared = buffer(&[[0, 0, 0, 0]]);
        let raster =
            Raster::false_color(&visible, &infrared, &layout(), &FalseColorPalette::default())
                .unwrap();

        assert_eq!(raster.mode, ColorMode::Rgb);
        assert_eq!(
            raster.row(0),
            &[
                0, 0, 0, // telemetry column
                16000, 18000, 12000, // vegetation
                3048, 10120, 16550, // water
                0, 0, 0, // sync column
            ]
        );
    }

    #[test]
    fn test_false_color_needs_matching_channels() {
        let visible = buffer(&[[0; 4], [0; 4]]);
        let infrared = buffer(&[[0; 4]]);
        let result =
            Raster::false_color(&visible, &infrared, &layout(), &FalseColorPalette::default());
        assert!(matches!(result, Err(ConversionError::DimensionMismatch(4, 2, 4, 1))));
    }
}
