use std::io::Write;

use crate::sample_pipeline::common::error::Result;
use crate::sample_pipeline::dump::types::PixelGrid;
use crate::sample_pipeline::encode::types::TiffCompression;

pub trait TiffWriter {
    fn write_tiff(&self, grid: &PixelGrid, output: &mut dyn Write, compression: TiffCompression) -> Result<()>;
}
