use tracing::debug;

use crate::apt_pipeline::channel::ChannelBuffer;
use crate::apt_pipeline::common::error::{ConversionError, Result};
use crate::apt_pipeline::telemetry::Wedges;

/// Wedge 9, zero modulation.
pub const BLACK_WEDGE: usize = 8;

/// Wedge 8, the top of the brightness ramp.
pub const WHITE_WEDGE: usize = 7;

const FULL_SCALE: f64 = u16::MAX as f64;

pub struct Normalizer;

impl Normalizer {
    /// Black and white reference levels, each widened by one standard deviation.
    pub fn reference_levels(wedges: &Wedges) -> (i32, i32) {
        let low = i32::from(wedges.mean[BLACK_WEDGE]) - i32::from(wedges.stddev[BLACK_WEDGE]);
        let high = i32::from(wedges.mean[WHITE_WEDGE]) + i32::from(wedges.stddev[WHITE_WEDGE]);
        (low, high)
    }

    /// Maps a single raw sample onto the calibrated range.
    #[inline]
    pub fn scale(value: u16, low: i32, high: i32) -> u16 {
        let v = FULL_SCALE * f64::from(i32::from(value) - low) / f64::from(high - low);
        v.round().clamp(0.0, FULL_SCALE) as u16
    }

    /// Rescales every sample in place.
    ///
    /// The wedges are not updated, running this twice stretches the buffer again.
    pub fn normalize(buffer: &mut ChannelBuffer, wedges: &Wedges) -> Result<()> {
        let (low, high) = Self::reference_levels(wedges);
        if low == high {
            return Err(ConversionError::DegenerateCalibration { level: low });
        }

        debug!(
            "Normalizing {}x{} samples, black={} white={}",
            buffer.width(),
            buffer.height(),
            low,
            high
        );

        for sample in buffer.samples_mut() {
            *sample = Self::scale(*sample, low, high);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apt_pipeline::telemetry::WEDGE_COUNT;

    fn wedges(black: (u16, u16), white: (u16, u16)) -> Wedges {
        let mut wedges = Wedges {
            offset: 0,
            mean: [1000; WEDGE_COUNT],
            stddev: [0; WEDGE_COUNT],
        };
        wedges.mean[BLACK_WEDGE] = black.0;
        wedges.stddev[BLACK_WEDGE] = black.1;
        wedges.mean[WHITE_WEDGE] = white.0;
        wedges.stddev[WHITE_WEDGE] = white.1;
        wedges
    }

    fn buffer(samples: &[u16]) -> ChannelBuffer {
        let mut buffer = ChannelBuffer::new(samples.len());
        buffer.push_line(samples).unwrap();
        buffer
    }

    #[test]
    fn test_reference_levels_include_deviation() {
        let wedges = wedges((2000, 100), (40000, 250));
        assert_eq!(Normalizer::reference_levels(&wedges), (1900, 40250));
    }

    #[test]
    fn test_references_map_to_full_range() {
        let wedges = wedges((2000, 0), (42000, 0));
        let mut buffer = buffer(&[2000, 42000, 22000, 0, 1999, 42001, 65535]);
        Normalizer::normalize(&mut buffer, &wedges).unwrap();

        assert_eq!(buffer.samples(), &[0, 65535, 32768, 0, 0, 65535, 65535]);
    }

    #[test]
    fn test_black_stddev_below_zero_does_not_wrap() {
        let wedges = wedges((50, 100), (10050, 0));
        let mut buffer = buffer(&[0, 10050]);
        Normalizer::normalize(&mut buffer, &wedges).unwrap();

        // low = -50, so 0 maps a little above black
        assert_eq!(buffer.samples(), &[324, 65535]);
    }

    #[test]
    fn test_degenerate_calibration_is_reported() {
        let wedges = wedges((3000, 0), (3000, 0));
        let mut buffer = buffer(&[1, 2, 3]);
        let result = Normalizer::normalize(&mut buffer, &wedges);

        assert!(matches!(
            result,
            Err(ConversionError::DegenerateCalibration { level: 3000 })
        ));
        assert_eq!(buffer.samples(), &[1, 2, 3]);
    }

    #[test]
    fn test_second_pass_stretches_again() {
        let wedges = wedges((10000, 0), (30000, 0));
        let mut buffer = buffer(&[15000, 20000, 25000]);
        Normalizer::normalize(&mut buffer, &wedges).unwrap();
        let first = buffer.samples().to_vec();

        Normalizer::normalize(&mut buffer, &wedges).unwrap();
        assert_ne!(buffer.samples(), first.as_slice());
    }

    #[test]
    fn test_inverted_references() {
        let wedges = wedges((32768, 0), (28672, 0));
        assert_eq!(Normalizer::scale(32768, 32768, 28672), 0);
        assert_eq!(Normalizer::scale(28672, 32768, 28672), 65535);
        assert_eq!(Normalizer::reference_levels(&wedges), (32768, 28672));
    }
}
