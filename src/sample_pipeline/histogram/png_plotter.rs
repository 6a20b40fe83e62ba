use std::path::PathBuf;

use image::{GrayImage, ImageFormat, Luma};
use tracing::debug;

use crate::sample_pipeline::common::error::{Result, SampleImageError};
use crate::sample_pipeline::histogram::plotter::HistogramPlotter;
use crate::sample_pipeline::histogram::types::Histogram;

const BACKGROUND: Luma<u8> = Luma([255]);
const BAR: Luma<u8> = Luma([0]);

/// Renders a histogram as a bar chart, one pixel column per bin, and saves it
/// to `path` as PNG whatever the extension.
pub struct PngHistogramPlotter {
    pub path: PathBuf,
    pub height: u32,
}

impl PngHistogramPlotter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            height: 256,
        }
    }

    pub fn render(&self, histogram: &Histogram) -> GrayImage {
        let width = histogram.counts.len() as u32;
        let mut plot = GrayImage::from_pixel(width, self.height, BACKGROUND);
        let max = histogram.max_count();
        if max == 0 || self.height == 0 {
            return plot;
        }

        for (x, &count) in histogram.counts.iter().enumerate() {
            let bar = ((count as u128 * self.height as u128) / max as u128) as u32;
            for y in (self.height - bar)..self.height {
                plot.put_pixel(x as u32, y, BAR);
            }
        }

        plot
    }
}

impl HistogramPlotter for PngHistogramPlotter {
    fn plot(&mut self, histogram: &Histogram) -> Result<()> {
        debug!("Plotting histogram to {}", self.path.display());

        self.render(histogram)
            .save_with_format(&self.path, ImageFormat::Png)
            .map_err(|e| SampleImageError::EncodeError(format!("{}: {}", self.path.display(), e)))
    }
}
