//! Telemetry frame types

use crate::apt_pipeline::telemetry::{WEDGE_COUNT, WEDGE_LINES};

/// The 16 calibration wedges captured from a synchronized telemetry frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wedges {
    /// Line at which the first wedge's smoothing window is complete
    pub offset: usize,
    /// Mean telemetry value of each wedge
    pub mean: [u16; WEDGE_COUNT],
    /// Standard deviation of each wedge
    pub stddev: [u16; WEDGE_COUNT],
}

impl Wedges {
    /// Line holding the statistics of wedge `k`.
    pub fn line_of(&self, k: usize) -> usize {
        self.offset + k * WEDGE_LINES
    }
}
