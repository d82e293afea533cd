//! Channel storage module
//!
//! This module holds the scanline buffer of a single APT channel, its column layout,
//! and the calibration state that travels with it through the pipeline.

mod buffer;
mod layout;
mod apt_channel;

pub use buffer::ChannelBuffer;
pub use layout::ChannelLayout;
pub use apt_channel::Channel;
