//! Pixel grid types

use std::slice::ChunksExact;

use crate::sample_pipeline::common::error::{Result, SampleImageError};

/// Number of bytes one sample occupies in a packed dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BytesPerSample {
    /// One byte per sample, used by 8-bit captures
    One,
    /// MSB then LSB
    #[default]
    Two,
}

impl BytesPerSample {
    pub fn byte_count(self) -> usize {
        match self {
            BytesPerSample::One => 1,
            BytesPerSample::Two => 2,
        }
    }
}

/// Layout of an input dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    /// Comma separated text, shape taken from the file
    #[default]
    Csv,
    /// Headerless packed samples with caller supplied shape
    Packed {
        width: usize,
        height: usize,
        bytes_per_sample: BytesPerSample,
    },
}

/// A rectangular grid of unscaled samples stored row-major, origin top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u16>,
}

impl PixelGrid {
    /// Wraps a flat row-major buffer, checking that it holds exactly
    /// `width * height` samples.
    pub fn from_vec(width: usize, height: usize, data: Vec<u16>) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            SampleImageError::ShapeError(format!("{}x{} overflows the sample count", width, height))
        })?;

        if data.len() != expected {
            return Err(SampleImageError::ShapeError(format!(
                "{} samples cannot be reshaped to {} rows of {}",
                data.len(),
                height,
                width
            )));
        }

        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, the order rows and columns are indexed in.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[row * self.width + col])
    }

    pub fn rows(&self) -> ChunksExact<'_, u16> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.width.max(1))
    }

    pub fn into_vec(self) -> Vec<u16> {
        self.data
    }
}
