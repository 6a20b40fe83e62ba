//! Conversion configuration types

use crate::sample_pipeline::dump::types::{BytesPerSample, DumpFormat};
use crate::sample_pipeline::encode::types::TiffCompression;
use crate::sample_pipeline::histogram::types::OverflowPolicy;

/// Bit depth assumed for CSV dumps when the caller does not name one.
pub const DEFAULT_BITS_PER_PIXEL: u32 = 10;

/// Configuration for dump to image conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Significant bits per sample produced by the sensor
    pub bits_per_pixel: u32,
    /// How the input dump is laid out
    pub input_format: DumpFormat,
    /// What the histogram does with samples of 1024 and above
    pub overflow_policy: OverflowPolicy,
    /// Compression for full-depth TIFF exports
    pub tiff_compression: TiffCompression,
    /// Whether to reject empty images before encoding
    pub validate_dimensions: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            bits_per_pixel: DEFAULT_BITS_PER_PIXEL,
            input_format: DumpFormat::Csv,
            overflow_policy: OverflowPolicy::Discard,
            tiff_compression: TiffCompression::None,
            validate_dimensions: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    bits_per_pixel: Option<u32>,
    input_format: Option<DumpFormat>,
    overflow_policy: Option<OverflowPolicy>,
    tiff_compression: Option<TiffCompression>,
    validate_dimensions: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn bits_per_pixel(mut self, bits: u32) -> Self {
        self.bits_per_pixel = Some(bits);
        self
    }

    pub fn input_format(mut self, format: DumpFormat) -> Self {
        self.input_format = Some(format);
        self
    }

    /// Shortcut for a two-byte packed dump of the given shape.
    pub fn packed(self, width: usize, height: usize) -> Self {
        self.input_format(DumpFormat::Packed {
            width,
            height,
            bytes_per_sample: BytesPerSample::Two,
        })
    }

    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = Some(policy);
        self
    }

    pub fn tiff_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            bits_per_pixel: self.bits_per_pixel.unwrap_or(default.bits_per_pixel),
            input_format: self.input_format.unwrap_or(default.input_format),
            overflow_policy: self.overflow_policy.unwrap_or(default.overflow_policy),
            tiff_compression: self.tiff_compression.unwrap_or(default.tiff_compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
