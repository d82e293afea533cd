//! Column layout of one APT channel scanline

use std::ops::Range;

use crate::apt_pipeline::common::error::{ConversionError, Result};
use crate::apt_pipeline::telemetry::WEDGE_LINES;

/// Column structure of a channel scanline, in words.
///
/// A line is laid out as `sync | space | data | telemetry`. The upstream demodulator
/// hands over lines of exactly [`ChannelLayout::width`] words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLayout {
    /// Sync burst at the start of the line
    pub sync_words: usize,
    /// Space view / minute marker margin before the image
    pub space_words: usize,
    /// Earth image samples
    pub data_words: usize,
    /// Telemetry zone carrying the calibration wedges
    pub telemetry_words: usize,
}

impl Default for ChannelLayout {
    fn default() -> Self {
        Self {
            sync_words: 39,
            space_words: 47,
            data_words: 909,
            telemetry_words: 45,
        }
    }
}

impl ChannelLayout {
    pub fn width(&self) -> usize {
        self.sync_words + self.space_words + self.data_words + self.telemetry_words
    }

    /// Columns holding earth image data. Everything outside is margin.
    pub fn data_range(&self) -> Range<usize> {
        let start = self.sync_words + self.space_words;
        start..start + self.data_words
    }

    pub fn telemetry_range(&self) -> Range<usize> {
        let width = self.width();
        width - self.telemetry_words..width
    }

    /// Samples covered by one smoothing window of the wedge statistics.
    pub fn wedge_window_words(&self) -> usize {
        WEDGE_LINES * self.telemetry_words
    }

    pub fn validate(&self) -> Result<()> {
        if self.width() == 0 {
            return Err(ConversionError::InvalidLayout("line width is zero".to_string()));
        }
        if self.telemetry_words == 0 {
            return Err(ConversionError::InvalidLayout(
                "telemetry zone is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_apt_line() {
        let layout = ChannelLayout::default();
        assert_eq!(layout.width(), 1040);
        assert_eq!(layout.data_range(), 86..995);
        assert_eq!(layout.telemetry_range(), 995..1040);
        assert_eq!(layout.wedge_window_words(), 360);
    }

    #[test]
    fn test_empty_telemetry_is_rejected() {
        let layout = ChannelLayout {
            telemetry_words: 0,
            ..ChannelLayout::default()
        };
        assert!(matches!(layout.validate(), Err(ConversionError::InvalidLayout(_))));
    }
}
