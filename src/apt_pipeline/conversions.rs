//! Pipeline conversions module
//!
//! This module contains the orchestration from raw channel samples to rendered images.

mod channel_to_image;

pub use channel_to_image::ChannelToImagePipeline;
