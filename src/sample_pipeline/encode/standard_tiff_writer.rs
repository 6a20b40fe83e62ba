use std::io::Write;

use tracing::debug;

use crate::sample_pipeline::common::error::{Result, SampleImageError};
use crate::sample_pipeline::dump::types::PixelGrid;
use crate::sample_pipeline::encode::tiff_writer::TiffWriter;
use crate::sample_pipeline::encode::types::TiffCompression;

/// Writes unscaled samples as single-channel 16-bit TIFF.
pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(&self, grid: &PixelGrid, output: &mut dyn Write, compression: TiffCompression) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", grid.width(), grid.height());

        let mut buffer = Vec::new();

        // predictor is only applied to compressed output
        let use_predictor = compression != TiffCompression::None;

        let compression = match compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let width = u32::try_from(grid.width())
            .map_err(|_| SampleImageError::InvalidDimensions(grid.width(), grid.height()))?;
        let height = u32::try_from(grid.height())
            .map_err(|_| SampleImageError::InvalidDimensions(grid.width(), grid.height()))?;

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| SampleImageError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if use_predictor {
            encoder = encoder.with_predictor(tiff::tags::Predictor::Horizontal);
        }

        encoder
            .write_image::<tiff::encoder::colortype::Gray16>(width, height, grid.as_slice())
            .map_err(|e| SampleImageError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}
