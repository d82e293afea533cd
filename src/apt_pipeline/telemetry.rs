//! Telemetry wedge module
//!
//! Every APT channel carries a telemetry frame in the trailing columns of its lines:
//! 16 wedges of 8 lines each. The first 8 wedges form a brightness ramp, which is what
//! the frame synchronizer looks for since no explicit frame marker is transmitted.

mod stats;
mod sync;
pub mod types;

pub use stats::{LineStatistics, WedgeAccumulator, WedgeStatistics};
pub use sync::{FrameCandidates, FrameSynchronizer};
pub use types::Wedges;

/// Lines covered by a single wedge.
pub const WEDGE_LINES: usize = 8;

/// Wedges in a telemetry frame.
pub const WEDGE_COUNT: usize = 16;

/// Leading wedges forming the increasing brightness ramp.
pub const RAMP_WEDGES: usize = 8;
