use std::io::{Cursor, Write};

use image::GrayImage;
use tracing::debug;

use crate::sample_pipeline::common::error::{Result, SampleImageError};
use crate::sample_pipeline::encode::types::ImageFormat;
use crate::sample_pipeline::encode::writer::ImageWriter;
use crate::sample_pipeline::sample_image::ScaledFrame;

/// Encodes 8-bit grayscale frames with the `image` crate.
pub struct StandardImageWriter;

impl StandardImageWriter {
    fn to_gray_image(frame: &ScaledFrame) -> Result<GrayImage> {
        let width = u32::try_from(frame.width)
            .map_err(|_| SampleImageError::InvalidDimensions(frame.width, frame.height))?;
        let height = u32::try_from(frame.height)
            .map_err(|_| SampleImageError::InvalidDimensions(frame.width, frame.height))?;

        GrayImage::from_raw(width, height, frame.data.clone())
            .ok_or(SampleImageError::InvalidDimensions(frame.width, frame.height))
    }
}

impl ImageWriter for StandardImageWriter {
    fn write_image(&self, frame: &ScaledFrame, output: &mut dyn Write, format: ImageFormat) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", format, frame.width, frame.height);

        let image = Self::to_gray_image(frame)?;

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, format)
            .map_err(|e| SampleImageError::EncodeError(e.to_string()))?;

        output.write_all(buffer.get_ref())?;

        debug!("Image encoding complete");
        Ok(())
    }
}
