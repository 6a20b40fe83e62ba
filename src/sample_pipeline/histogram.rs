//! Intensity histogram module
//!
//! Fixed 1024-bin histograms over unscaled samples and the plotters that can
//! render them.

mod plotter;
mod png_plotter;
pub mod types;

pub use plotter::HistogramPlotter;
pub use png_plotter::PngHistogramPlotter;
pub use types::{HISTOGRAM_BINS, Histogram, OverflowPolicy};
