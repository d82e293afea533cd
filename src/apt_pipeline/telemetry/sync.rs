//! Telemetry frame synchronization
//!
//! The frame start is found from the statistics alone. A wedge settles for 8 lines, so
//! its smoothed deviation has a local minimum once the window covers a single wedge,
//! and the first 8 wedges of a frame are strictly increasing in brightness.

use tracing::{debug, warn};

use crate::apt_pipeline::common::error::{ConversionError, Result};
use crate::apt_pipeline::telemetry::{LineStatistics, Wedges, RAMP_WEDGES, WEDGE_COUNT, WEDGE_LINES};

/// Iterator over every line offset at which 8 ramp wedges are confirmed.
///
/// After a candidate is yielded the run counter starts over from the line the search
/// stopped at. A wedge that is no brighter than the previous one ends the run, so flat
/// telemetry never forms a ramp.
pub struct FrameCandidates<'a> {
    mean: &'a [u16],
    stddev: &'a [u16],
    line: usize,
    run: usize,
}

impl<'a> FrameCandidates<'a> {
    pub fn new(stats: &'a LineStatistics) -> Self {
        Self {
            mean: &stats.mean,
            stddev: &stats.stddev,
            line: 0,
            run: 0,
        }
    }
}

impl Iterator for FrameCandidates<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let height = self.mean.len().min(self.stddev.len());
        let (mean, stddev) = (self.mean, self.stddev);

        while self.line < height {
            let i = self.line;

            // Must be a minimum wrt the previous line, unless this is the first wedge
            if self.run > 0 && i > 0 && stddev[i - 1] < stddev[i] {
                self.run = 0;
                self.line += 1;
                continue;
            }

            // ... and wrt the next line, unless this is the last ramp wedge
            if self.run < RAMP_WEDGES - 1 && i + 1 < height && stddev[i + 1] < stddev[i] {
                self.run = 0;
                self.line += 1;
                continue;
            }

            // Brightness did not rise: still a minimum, so retry this line as a first wedge
            if self.run > 0 && mean[i] <= mean[i - WEDGE_LINES] {
                self.run = 0;
                continue;
            }

            self.run += 1;
            self.line += WEDGE_LINES;
            if self.run == RAMP_WEDGES {
                self.run = 0;
                let mut start = self.line - RAMP_WEDGES * WEDGE_LINES;
                // The stepping is phase locked inside flat telemetry, so the first
                // wedge of a ramp rising out of a background of the same level is
                // only seen from the second one.
                while start >= WEDGE_LINES && self.precedes_ramp(start - WEDGE_LINES, start) {
                    start -= WEDGE_LINES;
                }
                return Some(start);
            }
        }

        None
    }
}

impl FrameCandidates<'_> {
    /// Whether `line` is a settled wedge darker than the ramp wedge at `next`.
    fn precedes_ramp(&self, line: usize, next: usize) -> bool {
        let stddev = self.stddev;
        self.mean[line] < self.mean[next]
            && (line == 0 || stddev[line - 1] >= stddev[line])
            && stddev[line + 1] >= stddev[line]
    }
}

pub struct FrameSynchronizer;

impl FrameSynchronizer {
    /// Returns the first line offset at which 8 consecutive ramp wedges are found.
    pub fn find_frame_offset(stats: &LineStatistics) -> Option<usize> {
        FrameCandidates::new(stats).next()
    }

    /// Locates the telemetry frame and captures its 16 wedges.
    pub fn synchronize(stats: &LineStatistics) -> Result<Wedges> {
        let lines = stats.len();

        let Some(offset) = Self::find_frame_offset(stats) else {
            warn!("No telemetry frame found in {} lines", lines);
            return Err(ConversionError::SyncNotFound { lines });
        };

        let last = offset + (WEDGE_COUNT - 1) * WEDGE_LINES;
        if last >= lines {
            warn!(
                "Telemetry frame at line {} needs {} lines, channel has {}",
                offset,
                last + 1,
                lines
            );
            return Err(ConversionError::TruncatedFrame { offset, lines });
        }

        let mut wedges = Wedges {
            offset,
            mean: [0; WEDGE_COUNT],
            stddev: [0; WEDGE_COUNT],
        };
        for k in 0..WEDGE_COUNT {
            let line = wedges.line_of(k);
            wedges.mean[k] = stats.mean[line];
            wedges.stddev[k] = stats.stddev[line];
        }

        debug!("Telemetry frame found at line {}: {:?}", offset, wedges.mean);
        Ok(wedges)
    }
}
