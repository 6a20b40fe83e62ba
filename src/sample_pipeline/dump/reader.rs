use crate::sample_pipeline::common::error::Result;
use crate::sample_pipeline::dump::csv_reader::CsvDumpReader;
use crate::sample_pipeline::dump::packed_reader::PackedDumpReader;
use crate::sample_pipeline::dump::types::{DumpFormat, PixelGrid};

pub trait DumpReader {
    fn read_dump(&self, data: &[u8]) -> Result<PixelGrid>;
}

impl DumpReader for DumpFormat {
    fn read_dump(&self, data: &[u8]) -> Result<PixelGrid> {
        match *self {
            DumpFormat::Csv => CsvDumpReader.read_dump(data),
            DumpFormat::Packed {
                width,
                height,
                bytes_per_sample,
            } => PackedDumpReader::new(width, height)
                .with_bytes_per_sample(bytes_per_sample)
                .read_dump(data),
        }
    }
}
