//! Pipeline conversions module
//!
//! This module contains orchestration logic for dump to image conversions.

mod dump_to_image;

#[cfg(test)]
mod tests;

pub use dump_to_image::DumpToImagePipeline;
