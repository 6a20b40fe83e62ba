use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::sample_pipeline::{
    common::error::{Result, SampleImageError},
    config::ConversionConfig,
    dump::{DumpFormat, DumpReader, PixelGrid},
    encode::{ImageFormat, ImageWriter, StandardImageWriter},
    sample_image::SampleImage,
};

pub struct DumpToImagePipeline<R: DumpReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl DumpToImagePipeline<DumpFormat, StandardImageWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: config.input_format,
            writer: StandardImageWriter,
            config,
        }
    }
}

impl<R: DumpReader, W: ImageWriter> DumpToImagePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(SampleImageError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decodes a dump, encodes its 8-bit rendition into `output` and hands
    /// back the loaded image for further use.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write, format: ImageFormat) -> Result<SampleImage> {
        info!("Starting dump to image conversion");

        let mut image = SampleImage::with_overflow_policy(self.config.overflow_policy);

        {
            let _span = tracing::info_span!("decode_dump").entered();
            image.load_from(&self.reader, input_data, self.config.bits_per_pixel)?;
        }

        let (height, width) = image
            .pixels()
            .map(PixelGrid::shape)
            .ok_or(SampleImageError::NotLoaded)?;

        {
            let _span = tracing::info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        {
            let _span = tracing::info_span!("encode_image").entered();
            image.write_image(&self.writer, output, format)?;
        }

        info!(width, height, "Conversion complete");
        Ok(image)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<SampleImage> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let format = ImageFormat::from_path(output_path).map_err(|e| {
            SampleImageError::EncodeError(format!("{}: {}", output_path.display(), e))
        })?;

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                SampleImageError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // the output file is only created once conversion has succeeded
        let mut encoded = Vec::new();
        let image = self.convert(&input_data, &mut encoded, format)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                SampleImageError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(image)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
