use tracing::{debug, info};

use crate::apt_pipeline::calibration::Normalizer;
use crate::apt_pipeline::channel::{ChannelBuffer, ChannelLayout};
use crate::apt_pipeline::common::error::{ConversionError, Result};
use crate::apt_pipeline::telemetry::{
    FrameSynchronizer, LineStatistics, WEDGE_COUNT, WedgeStatistics, Wedges,
};

/// One APT channel on its way from raw scanlines to a calibrated image.
///
/// Lines are appended in arrival order. Once the buffer is complete,
/// [`Channel::detect_telemetry`] locates the wedge frame and [`Channel::normalize`]
/// rewrites the samples in place.
#[derive(Debug, Clone)]
pub struct Channel {
    layout: ChannelLayout,
    buffer: ChannelBuffer,
    stats: Option<LineStatistics>,
    wedges: Option<Wedges>,
}

impl Channel {
    pub fn new(layout: ChannelLayout) -> Self {
        Self {
            layout,
            buffer: ChannelBuffer::new(layout.width()),
            stats: None,
            wedges: None,
        }
    }

    /// Wraps an existing buffer whose lines are one layout width long.
    pub fn from_buffer(layout: ChannelLayout, buffer: ChannelBuffer) -> Result<Self> {
        if buffer.width() != layout.width() {
            return Err(ConversionError::LineWidthMismatch {
                expected: layout.width(),
                actual: buffer.width(),
            });
        }
        Ok(Self {
            layout,
            buffer,
            stats: None,
            wedges: None,
        })
    }

    pub fn append_line(&mut self) -> &mut [u16] {
        self.buffer.append_line()
    }

    pub fn layout(&self) -> &ChannelLayout {
        &self.layout
    }

    pub fn buffer(&self) -> &ChannelBuffer {
        &self.buffer
    }

    pub fn stats(&self) -> Option<&LineStatistics> {
        self.stats.as_ref()
    }

    pub fn wedges(&self) -> Option<&Wedges> {
        self.wedges.as_ref()
    }

    pub fn is_calibrated(&self) -> bool {
        self.wedges.is_some()
    }

    /// Wedge means, all zero until the telemetry frame has been found.
    pub fn wedge_means(&self) -> [u16; WEDGE_COUNT] {
        self.wedges.as_ref().map_or([0; WEDGE_COUNT], |w| w.mean)
    }

    pub fn wedge_stddevs(&self) -> [u16; WEDGE_COUNT] {
        self.wedges.as_ref().map_or([0; WEDGE_COUNT], |w| w.stddev)
    }

    /// Computes the telemetry statistics and captures the wedges of the first frame.
    pub fn detect_telemetry(&mut self) -> Result<&Wedges> {
        let stats = WedgeStatistics::compute(&self.buffer, &self.layout);
        let result = FrameSynchronizer::synchronize(&stats);
        self.stats = Some(stats);
        self.wedges = None;

        let wedges = self.wedges.insert(result?);
        info!(offset = wedges.offset, "Telemetry frame located");
        Ok(wedges)
    }

    /// Calibrates the samples against the captured wedges.
    pub fn normalize(&mut self) -> Result<()> {
        let wedges = self
            .wedges
            .as_ref()
            .ok_or(ConversionError::InvalidCalibrationState)?;
        Normalizer::normalize(&mut self.buffer, wedges)?;
        debug!("Channel normalized");
        Ok(())
    }
}
