use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleImageError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to parse CSV dump at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Packed dump does not match its shape: {0}")]
    ShapeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported bit depth: {0} bits per pixel (expected 1..=16)")]
    InvalidBitDepth(u32),

    #[error("Sample value {value} falls outside the histogram range")]
    HistogramOverflow { value: u16 },

    #[error("No image has been loaded")]
    NotLoaded,

    #[error("Display error: {0}")]
    DisplayError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SampleImageError>;
