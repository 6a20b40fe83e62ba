//! The in-memory sample image.
//!
//! A `SampleImage` owns at most one decoded frame together with the bit depth
//! it was loaded at. Loads validate everything before assigning, so a failed
//! load leaves the previous frame in place.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::sample_pipeline::common::error::{Result, SampleImageError};
use crate::sample_pipeline::config::DEFAULT_BITS_PER_PIXEL;
use crate::sample_pipeline::display::ImageViewer;
use crate::sample_pipeline::dump::{self, CsvDumpReader, DumpReader, PackedDumpReader, PixelGrid};
use crate::sample_pipeline::encode::{
    ImageFormat, ImageWriter, StandardImageWriter, StandardTiffWriter, TiffCompression, TiffWriter,
};
use crate::sample_pipeline::histogram::{Histogram, HistogramPlotter, OverflowPolicy};

/// Largest bit depth a `u16` sample can carry.
pub const MAX_BITS_PER_PIXEL: u32 = 16;

const DISPLAY_BITS: u32 = 8;

/// An 8-bit frame ready for display or encoding, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
struct LoadedFrame {
    bits_per_pixel: u32,
    pixels: PixelGrid,
}

#[derive(Debug, Clone, Default)]
pub struct SampleImage {
    frame: Option<LoadedFrame>,
    overflow_policy: OverflowPolicy,
}

fn validate_bit_depth(bits_per_pixel: u32) -> Result<()> {
    if bits_per_pixel == 0 || bits_per_pixel > MAX_BITS_PER_PIXEL {
        return Err(SampleImageError::InvalidBitDepth(bits_per_pixel));
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| SampleImageError::InputReadError(format!("{}: {}", path.display(), e)))
}

/// Writes fully encoded bytes, so a failed encode never leaves a file behind.
fn write_output(path: &Path, encoded: &[u8]) -> Result<()> {
    std::fs::write(path, encoded)
        .map_err(|e| SampleImageError::OutputWriteError(format!("{}: {}", path.display(), e)))
}

/// Drops the low `bits_per_pixel - 8` bits of a sample.
///
/// At 8 bits or fewer the sample passes through and the narrowing keeps its
/// low byte, so out-of-range values wrap instead of clamping.
fn scale_sample(sample: u16, bits_per_pixel: u32) -> u8 {
    let shift = bits_per_pixel.saturating_sub(DISPLAY_BITS);
    (sample >> shift) as u8
}

impl SampleImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overflow_policy(policy: OverflowPolicy) -> Self {
        Self {
            frame: None,
            overflow_policy: policy,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.frame.is_some()
    }

    pub fn bits_per_pixel(&self) -> Option<u32> {
        self.frame.as_ref().map(|f| f.bits_per_pixel)
    }

    pub fn pixels(&self) -> Option<&PixelGrid> {
        self.frame.as_ref().map(|f| &f.pixels)
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow_policy
    }

    pub fn set_overflow_policy(&mut self, policy: OverflowPolicy) {
        self.overflow_policy = policy;
    }

    /// Loads a CSV dump at the default depth of 10 bits.
    pub fn load_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.load_csv_with_depth(path, DEFAULT_BITS_PER_PIXEL)
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_csv_with_depth<P: AsRef<Path>>(&mut self, path: P, bits_per_pixel: u32) -> Result<()> {
        let data = read_input(path.as_ref())?;
        self.load_from(&CsvDumpReader, &data, bits_per_pixel)
    }

    /// Loads a packed dump of `width * height` MSB-first byte pairs.
    ///
    /// The pairs are decoded as 16-bit values whatever `bits_per_pixel` says;
    /// the depth only matters when rescaling.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_packed_binary<P: AsRef<Path>>(
        &mut self,
        path: P,
        width: usize,
        height: usize,
        bits_per_pixel: u32,
    ) -> Result<()> {
        let data = read_input(path.as_ref())?;
        self.load_from(&PackedDumpReader::new(width, height), &data, bits_per_pixel)
    }

    /// Decodes `data` with `reader` and replaces the current frame.
    pub fn load_from<R: DumpReader + ?Sized>(&mut self, reader: &R, data: &[u8], bits_per_pixel: u32) -> Result<()> {
        validate_bit_depth(bits_per_pixel)?;
        let pixels = reader.read_dump(data)?;

        info!(
            width = pixels.width(),
            height = pixels.height(),
            bits_per_pixel,
            "Loaded sample image"
        );

        self.frame = Some(LoadedFrame { bits_per_pixel, pixels });
        Ok(())
    }

    fn loaded(&self) -> Result<&LoadedFrame> {
        self.frame.as_ref().ok_or(SampleImageError::NotLoaded)
    }

    fn scale_to_8bit(&self) -> Result<ScaledFrame> {
        let frame = self.loaded()?;
        debug!("Rescaling {}-bit samples to 8 bits", frame.bits_per_pixel);

        let data = frame
            .pixels
            .as_slice()
            .iter()
            .map(|&sample| scale_sample(sample, frame.bits_per_pixel))
            .collect();

        Ok(ScaledFrame {
            width: frame.pixels.width(),
            height: frame.pixels.height(),
            data,
        })
    }

    /// Histogram of the unscaled samples over 1024 unit bins.
    pub fn histogram(&self) -> Result<Histogram> {
        let frame = self.loaded()?;
        Histogram::compute(frame.pixels.as_slice(), self.overflow_policy)
    }

    pub fn histogram_with_plot(&self, plotter: &mut dyn HistogramPlotter) -> Result<Histogram> {
        let histogram = self.histogram()?;
        plotter.plot(&histogram)?;
        Ok(histogram)
    }

    pub fn show_image(&self, viewer: &mut dyn ImageViewer) -> Result<()> {
        let frame = self.scale_to_8bit()?;
        viewer.present(&frame)
    }

    /// Encodes the rescaled frame with `writer` in the given format.
    pub fn write_image<W: ImageWriter + ?Sized>(
        &self,
        writer: &W,
        output: &mut dyn Write,
        format: ImageFormat,
    ) -> Result<()> {
        let frame = self.scale_to_8bit()?;
        writer.write_image(&frame, output, format)
    }

    /// Saves the rescaled frame, picking the format from the file extension.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_image<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)
            .map_err(|e| SampleImageError::EncodeError(format!("{}: {}", path.display(), e)))?;
        let frame = self.scale_to_8bit()?;

        let mut encoded = Vec::new();
        StandardImageWriter.write_image(&frame, &mut encoded, format)?;
        write_output(path, &encoded)?;

        info!("Saved {:?} image", format);
        Ok(())
    }

    /// Saves the unscaled samples as 16-bit grayscale TIFF.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_raw_tiff<P: AsRef<Path>>(&self, path: P, compression: TiffCompression) -> Result<()> {
        let frame = self.loaded()?;

        let mut encoded = Vec::new();
        StandardTiffWriter.write_tiff(&frame.pixels, &mut encoded, compression)?;
        write_output(path.as_ref(), &encoded)?;

        info!("Saved 16-bit TIFF");
        Ok(())
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let frame = self.loaded()?;

        let mut encoded = Vec::new();
        dump::write_csv(&frame.pixels, &mut encoded)?;
        write_output(path.as_ref(), &encoded)?;

        info!(samples = frame.pixels.len(), "Saved CSV dump");
        Ok(())
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_packed_binary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let frame = self.loaded()?;

        let mut encoded = Vec::new();
        dump::write_packed(&frame.pixels, &mut encoded)?;
        write_output(path.as_ref(), &encoded)?;

        info!(samples = frame.pixels.len(), "Saved packed dump");
        Ok(())
    }
}
