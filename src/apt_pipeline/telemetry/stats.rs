use tracing::debug;

use crate::apt_pipeline::channel::{ChannelBuffer, ChannelLayout};
use crate::apt_pipeline::telemetry::WEDGE_LINES;

/// Per-line mean and standard deviation of the telemetry zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStatistics {
    pub mean: Vec<u16>,
    pub stddev: Vec<u16>,
}

impl LineStatistics {
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Sliding 8-line accumulator over telemetry zones.
///
/// Each line replaces the contribution of the line 8 positions earlier, so the totals
/// always cover the most recent window. Mean and deviation are normalized by the full
/// window size even while the window is still filling.
#[derive(Debug, Clone)]
pub struct WedgeAccumulator {
    window_words: u64,
    sums: [u64; WEDGE_LINES],
    sq_sums: [u64; WEDGE_LINES],
    sum: u64,
    sq_sum: u64,
    line: usize,
}

impl WedgeAccumulator {
    pub fn new(window_words: usize) -> Self {
        Self {
            window_words: window_words.max(1) as u64,
            sums: [0; WEDGE_LINES],
            sq_sums: [0; WEDGE_LINES],
            sum: 0,
            sq_sum: 0,
            line: 0,
        }
    }

    /// Feeds the telemetry zone of the next line, returning `(mean, stddev)` of the window.
    pub fn push(&mut self, zone: &[u16]) -> (u16, u16) {
        let phase = self.line % WEDGE_LINES;
        self.line += 1;

        self.sum -= self.sums[phase];
        self.sq_sum -= self.sq_sums[phase];

        let (sum, sq_sum) = zone.iter().fold((0u64, 0u64), |(sum, sq_sum), &v| {
            let v = u64::from(v);
            (sum + v, sq_sum + v * v)
        });
        self.sums[phase] = sum;
        self.sq_sums[phase] = sq_sum;

        self.sum += sum;
        self.sq_sum += sq_sum;

        (self.mean(), self.stddev())
    }

    fn mean(&self) -> u16 {
        u16::try_from(self.sum / self.window_words).unwrap_or(u16::MAX)
    }

    fn stddev(&self) -> u16 {
        let n = u128::from(self.window_words);
        let sum = u128::from(self.sum);
        // sum^2 / n never exceeds sq_sum, saturate anyway against rounding
        let spread = u128::from(self.sq_sum).saturating_sub(sum * sum / n);
        let variance = (spread / n) as f64;
        u16::try_from(variance.sqrt() as u64).unwrap_or(u16::MAX)
    }

    pub fn lines(&self) -> usize {
        self.line
    }
}

pub struct WedgeStatistics;

impl WedgeStatistics {
    /// Computes the telemetry statistics of every line in the buffer.
    pub fn compute(buffer: &ChannelBuffer, layout: &ChannelLayout) -> LineStatistics {
        let telemetry = layout.telemetry_range();
        let mut accumulator = WedgeAccumulator::new(layout.wedge_window_words());
        let mut stats = LineStatistics {
            mean: Vec::with_capacity(buffer.height()),
            stddev: Vec::with_capacity(buffer.height()),
        };

        for line in buffer.lines() {
            let (mean, stddev) = accumulator.push(&line[telemetry.clone()]);
            stats.mean.push(mean);
            stats.stddev.push(stddev);
        }

        debug!(
            "Computed wedge statistics for {} lines over {} words per window",
            accumulator.lines(),
            layout.wedge_window_words()
        );
        stats
    }
}
