//! Sensor sample processing pipeline
//!
//! Raw sensor dumps go in, 8-bit images and intensity histograms come out.
//! `dump` decodes the input formats, `sample_image` holds the decoded frame
//! and rescales it, `encode`, `display` and `histogram` hand the results to
//! their collaborators, and `conversions` strings the steps together.

pub mod common;
pub mod config;
pub mod conversions;
pub mod display;
pub mod dump;
pub mod encode;
pub mod histogram;
pub mod sample_image;

pub use common::{Result, SampleImageError};

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_BITS_PER_PIXEL};

pub use dump::{BytesPerSample, CsvDumpReader, DumpFormat, DumpReader, PackedDumpReader, PixelGrid};

pub use sample_image::{MAX_BITS_PER_PIXEL, SampleImage, ScaledFrame};

pub use histogram::{HISTOGRAM_BINS, Histogram, HistogramPlotter, OverflowPolicy, PngHistogramPlotter};

pub use encode::{ImageFormat, ImageWriter, StandardImageWriter, StandardTiffWriter, TiffCompression, TiffWriter};

pub use display::ImageViewer;
#[cfg(feature = "window")]
pub use display::WindowViewer;

pub use conversions::DumpToImagePipeline;
