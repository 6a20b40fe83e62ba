//! Raw sensor dump module
//!
//! Decoding and re-encoding of the two dump formats a camera produces: comma
//! separated text and packed MSB-first byte pairs.

mod reader;
mod csv_reader;
mod packed_reader;
mod writer;
pub mod types;

pub use reader::DumpReader;
pub use csv_reader::CsvDumpReader;
pub use packed_reader::PackedDumpReader;
pub use writer::{write_csv, write_packed};
pub use types::{BytesPerSample, DumpFormat, PixelGrid};
