pub mod logger;
pub mod sample_pipeline;
