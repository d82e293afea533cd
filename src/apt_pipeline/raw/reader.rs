use crate::apt_pipeline::channel::ChannelBuffer;
use crate::apt_pipeline::common::error::Result;
use crate::apt_pipeline::render::PipelineConfig;

pub trait ScanlineReader {
    fn read_channel(&self, data: &[u8], config: &PipelineConfig) -> Result<ChannelBuffer>;
}
