use std::io::Write;

use crate::sample_pipeline::common::error::Result;
use crate::sample_pipeline::encode::types::ImageFormat;
use crate::sample_pipeline::sample_image::ScaledFrame;

pub trait ImageWriter {
    fn write_image(&self, frame: &ScaledFrame, output: &mut dyn Write, format: ImageFormat) -> Result<()>;
}
