//! Image encoding module
//!
//! Writes 8-bit display frames through the `image` crate and full-depth
//! samples as 16-bit TIFF.

mod writer;
mod standard_image_writer;
mod tiff_writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::ImageWriter;
pub use standard_image_writer::StandardImageWriter;
pub use tiff_writer::TiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{ImageFormat, TiffCompression};
