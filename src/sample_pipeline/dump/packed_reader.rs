//! Packed binary dump reader.
//!
//! A packed dump has no header. Width, height and sample width come from the
//! caller. With two bytes per sample the first byte of every pair is the MSB,
//! so a pair decodes to `(msb << 8) + lsb` whatever the declared bit depth.

use tracing::debug;

use crate::sample_pipeline::common::error::{Result, SampleImageError};
use crate::sample_pipeline::dump::reader::DumpReader;
use crate::sample_pipeline::dump::types::{BytesPerSample, PixelGrid};

#[derive(Debug, Clone, Copy)]
pub struct PackedDumpReader {
    pub width: usize,
    pub height: usize,
    pub bytes_per_sample: BytesPerSample,
}

impl PackedDumpReader {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes_per_sample: BytesPerSample::Two,
        }
    }

    pub fn with_bytes_per_sample(mut self, bytes_per_sample: BytesPerSample) -> Self {
        self.bytes_per_sample = bytes_per_sample;
        self
    }
}

impl DumpReader for PackedDumpReader {
    fn read_dump(&self, data: &[u8]) -> Result<PixelGrid> {
        debug!(
            "Decoding packed dump, {} bytes as {}x{} ({:?})",
            data.len(),
            self.width,
            self.height,
            self.bytes_per_sample
        );

        let sample_bytes = self.bytes_per_sample.byte_count();
        if data.len() % sample_bytes != 0 {
            return Err(SampleImageError::ShapeError(format!(
                "{} bytes is not a whole number of {}-byte samples",
                data.len(),
                sample_bytes
            )));
        }

        let samples: Vec<u16> = match self.bytes_per_sample {
            BytesPerSample::One => data.iter().map(|&b| b as u16).collect(),
            BytesPerSample::Two => data
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect(),
        };

        PixelGrid::from_vec(self.width, self.height, samples)
    }
}
