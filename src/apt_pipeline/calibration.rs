//! Radiometric calibration module
//!
//! Stretches raw channel samples so the telemetry frame's black and white references
//! span the full 16-bit range.

mod normalizer;

pub use normalizer::{Normalizer, BLACK_WEDGE, WHITE_WEDGE};
