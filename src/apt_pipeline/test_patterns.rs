//! Synthetic channel generation
//!
//! Builds channels with a telemetry frame at a known position, for exercising the
//! calibration chain without a recorded pass.

use crate::apt_pipeline::channel::{ChannelBuffer, ChannelLayout};
use crate::apt_pipeline::telemetry::{WEDGE_COUNT, WEDGE_LINES};

/// Wedge values of an evenly stepped ramp: `base, base + step, ...`.
pub fn linear_wedges(base: u16, step: u16) -> [u16; WEDGE_COUNT] {
    std::array::from_fn(|k| base.saturating_add(step.saturating_mul(k as u16)))
}

/// Channel whose telemetry zone carries `wedges` so that wedge `k` fills the 8 lines
/// ending at `offset + 8k`.
///
/// The smoothed statistics of line `offset + 8k` then see wedge `k` alone, which is the
/// offset the frame synchronizer reports. Telemetry outside the frame is `background`,
/// and `offset` should leave at least two wedges' worth of background lines in front of
/// the frame. The image columns hold a diagonal gradient.
pub fn wedge_frame_channel(
    layout: &ChannelLayout,
    height: usize,
    offset: usize,
    wedges: &[u16; WEDGE_COUNT],
    background: u16,
) -> ChannelBuffer {
    let telemetry = layout.telemetry_range();
    let mut buffer = ChannelBuffer::with_capacity(layout.width(), height);

    for row in 0..height {
        let line = buffer.append_line();
        for (column, sample) in line[..telemetry.start].iter_mut().enumerate() {
            *sample = ((row * 97 + column * 61) % 65536) as u16;
        }

        let wedge = (row + WEDGE_LINES - 1)
            .checked_sub(offset)
            .map(|d| d / WEDGE_LINES)
            .filter(|&k| k < WEDGE_COUNT);
        let value = wedge.map_or(background, |k| wedges[k]);
        line[telemetry.clone()].fill(value);
    }

    buffer
}
