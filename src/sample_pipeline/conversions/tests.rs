use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::sample_pipeline::common::error::{Result, SampleImageError};
use crate::sample_pipeline::config::ConversionConfig;
use crate::sample_pipeline::conversions::DumpToImagePipeline;
use crate::sample_pipeline::dump::{DumpReader, PixelGrid};
use crate::sample_pipeline::encode::{ImageFormat, ImageWriter};
use crate::sample_pipeline::histogram::OverflowPolicy;
use crate::sample_pipeline::sample_image::ScaledFrame;

struct MockReader {
    should_fail: bool,
    mock_data: Option<PixelGrid>,
}

impl DumpReader for MockReader {
    fn read_dump(&self, _data: &[u8]) -> Result<PixelGrid> {
        if self.should_fail {
            return Err(SampleImageError::ShapeError("Mock shape error".to_string()));
        }
        match &self.mock_data {
            Some(grid) => Ok(grid.clone()),
            None => PixelGrid::from_vec(10, 10, vec![512u16; 10 * 10]),
        }
    }
}

struct MockWriter {
    should_fail: bool,
    written_frames: Arc<Mutex<Vec<ScaledFrame>>>,
}

impl ImageWriter for MockWriter {
    fn write_image(&self, frame: &ScaledFrame, _output: &mut dyn Write, _format: ImageFormat) -> Result<()> {
        if self.should_fail {
            return Err(SampleImageError::EncodeError("Mock encode error".to_string()));
        }
        self.written_frames.lock().unwrap().push(frame.clone());
        Ok(())
    }
}

fn pipeline_with(
    reader: MockReader,
    writer_fails: bool,
    config: ConversionConfig,
) -> (DumpToImagePipeline<MockReader, MockWriter>, Arc<Mutex<Vec<ScaledFrame>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter {
        should_fail: writer_fails,
        written_frames: written.clone(),
    };
    (DumpToImagePipeline::with_custom(reader, writer, config), written)
}

#[test]
fn test_successful_conversion() {
    let reader = MockReader { should_fail: false, mock_data: None };
    let (pipeline, written) = pipeline_with(reader, false, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let image = pipeline.convert(b"fake dump", &mut output, ImageFormat::Png).unwrap();

    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].data.iter().all(|&v| v == 128));
    assert_eq!(image.bits_per_pixel(), Some(10));
}

#[test]
fn test_config_bit_depth_drives_rescale() {
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(PixelGrid::from_vec(2, 1, vec![4095, 16]).unwrap()),
    };
    let config = ConversionConfig::builder().bits_per_pixel(12).build();
    let (pipeline, written) = pipeline_with(reader, false, config);

    pipeline.convert(b"fake dump", &mut Vec::new(), ImageFormat::Png).unwrap();

    assert_eq!(written.lock().unwrap()[0].data, vec![255, 1]);
}

#[test]
fn test_reader_failure() {
    let reader = MockReader { should_fail: true, mock_data: None };
    let (pipeline, written) = pipeline_with(reader, false, ConversionConfig::default());

    let result = pipeline.convert(b"fake dump", &mut Vec::new(), ImageFormat::Png);

    assert!(matches!(result, Err(SampleImageError::ShapeError(_))));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let reader = MockReader { should_fail: false, mock_data: None };
    let (pipeline, _) = pipeline_with(reader, true, ConversionConfig::default());

    let result = pipeline.convert(b"fake dump", &mut Vec::new(), ImageFormat::Png);

    assert!(matches!(result, Err(SampleImageError::EncodeError(_))));
}

#[test]
fn test_invalid_bit_depth_fails() {
    let reader = MockReader { should_fail: false, mock_data: None };
    let config = ConversionConfig::builder().bits_per_pixel(17).build();
    let (pipeline, _) = pipeline_with(reader, false, config);

    let result = pipeline.convert(b"fake dump", &mut Vec::new(), ImageFormat::Png);

    assert!(matches!(result, Err(SampleImageError::InvalidBitDepth(17))));
}

#[test]
fn test_dimension_validation_failure() {
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(PixelGrid::from_vec(0, 5, Vec::new()).unwrap()),
    };
    let (pipeline, written) = pipeline_with(reader, false, ConversionConfig::default());

    let result = pipeline.convert(b"fake dump", &mut Vec::new(), ImageFormat::Png);

    assert!(matches!(result, Err(SampleImageError::InvalidDimensions(0, 5))));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_dimension_validation_disabled() {
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(PixelGrid::from_vec(0, 5, Vec::new()).unwrap()),
    };
    let config = ConversionConfig::builder().validate_dimensions(false).build();
    let (pipeline, written) = pipeline_with(reader, false, config);

    let result = pipeline.convert(b"fake dump", &mut Vec::new(), ImageFormat::Png);

    assert!(result.is_ok());
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_overflow_policy_reaches_image() {
    let reader = MockReader { should_fail: false, mock_data: None };
    let config = ConversionConfig::builder().overflow_policy(OverflowPolicy::Clamp).build();
    let (pipeline, _) = pipeline_with(reader, false, config);

    let image = pipeline.convert(b"fake dump", &mut Vec::new(), ImageFormat::Png).unwrap();

    assert_eq!(image.overflow_policy(), OverflowPolicy::Clamp);
}

#[test]
fn test_convert_file_packed_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("frame.dat");
    let output = dir.path().join("frame.png");
    let values: Vec<u16> = vec![0, 256, 512, 1023, 4, 8];
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
    std::fs::write(&input, bytes).unwrap();

    let config = ConversionConfig::builder().bits_per_pixel(10).packed(3, 2).build();
    let image = DumpToImagePipeline::new(config).convert_file(&input, &output).unwrap();

    assert_eq!(image.histogram().unwrap().total(), 6);
    let saved = image::open(&output).unwrap().to_luma8();
    assert_eq!(saved.dimensions(), (3, 2));
    assert_eq!(saved.into_raw(), vec![0, 64, 128, 255, 1, 2]);
}

#[test]
fn test_convert_file_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("frame.csv");
    let output = dir.path().join("frame.png");
    std::fs::write(&input, b"1,2\n3\n").unwrap();

    let result = DumpToImagePipeline::new(ConversionConfig::default()).convert_file(&input, &output);

    assert!(matches!(result, Err(SampleImageError::ParseError { line: 2, .. })));
    assert!(!output.exists());
}

#[test]
fn test_convert_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();

    let result = DumpToImagePipeline::new(ConversionConfig::default())
        .convert_file(dir.path().join("missing.csv"), dir.path().join("out.png"));

    assert!(matches!(result, Err(SampleImageError::InputReadError(_))));
}
