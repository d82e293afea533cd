pub mod apt_pipeline;
pub mod logger;
