//! CSV dump reader.
//!
//! A CSV dump holds one image row per text line with comma separated integer
//! samples. Blank lines and `#` comments are skipped, every remaining row must
//! have the same number of samples.

use tracing::debug;

use crate::sample_pipeline::common::error::{Result, SampleImageError};
use crate::sample_pipeline::dump::reader::DumpReader;
use crate::sample_pipeline::dump::types::PixelGrid;

pub struct CsvDumpReader;

const COMMENT_MARKER: char = '#';

impl DumpReader for CsvDumpReader {
    /// Parses a whole CSV dump into a grid.
    ///
    /// Samples are stored verbatim. Nothing checks them against a bit depth,
    /// so a 10-bit dump containing 4095 is accepted as-is.
    ///
    /// # Errors
    ///
    /// * `ParseError` - a token is not an unsigned 16-bit integer, the rows
    ///   are ragged, or the dump contains no samples. `line` is 1-based; 0
    ///   refers to the whole input.
    fn read_dump(&self, data: &[u8]) -> Result<PixelGrid> {
        debug!("Parsing CSV dump, {} bytes", data.len());

        let text = std::str::from_utf8(data).map_err(|e| SampleImageError::ParseError {
            line: 0,
            message: format!("input is not valid UTF-8: {}", e),
        })?;

        let mut width: Option<usize> = None;
        let mut height = 0;
        let mut samples = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let content = match line.split_once(COMMENT_MARKER) {
                Some((before, _)) => before,
                None => line,
            };
            if content.trim().is_empty() {
                continue;
            }

            let row_start = samples.len();
            for token in content.split(',') {
                let token = token.trim();
                let value = token.parse::<u16>().map_err(|e| SampleImageError::ParseError {
                    line: line_number,
                    message: format!("invalid sample {:?}: {}", token, e),
                })?;
                samples.push(value);
            }

            let row_len = samples.len() - row_start;
            match width {
                None => width = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(SampleImageError::ParseError {
                        line: line_number,
                        message: format!("row has {} samples, expected {}", row_len, expected),
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or_else(|| SampleImageError::ParseError {
            line: 0,
            message: "dump contains no samples".to_string(),
        })?;

        debug!("Parsed CSV dump: {}x{}", width, height);

        PixelGrid::from_vec(width, height, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rectangular_dump() {
        let grid = CsvDumpReader.read_dump(b"1,2,3\n4,5,6\n").unwrap();

        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_tolerates_whitespace_crlf_and_comments() {
        let input = b"# capture 7\r\n 10, 20 \r\n\r\n30,40 # tail\r\n";
        let grid = CsvDumpReader.read_dump(input).unwrap();

        assert_eq!(grid.shape(), (2, 2));
        assert_eq!(grid.as_slice(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_keeps_values_above_nominal_depth() {
        let grid = CsvDumpReader.read_dump(b"4095,0\n").unwrap();
        assert_eq!(grid.get(0, 0), Some(4095));
    }

    #[test]
    fn test_values_beyond_u16_fail() {
        let result = CsvDumpReader.read_dump(b"1,70000\n");
        assert!(matches!(result, Err(SampleImageError::ParseError { line: 1, .. })));

        let grid = CsvDumpReader.read_dump(b"1,65535\n").unwrap();
        assert_eq!(grid.get(0, 1), Some(65535));
    }

    #[test]
    fn test_ragged_rows_fail() {
        let result = CsvDumpReader.read_dump(b"1,2,3\n4,5\n");
        assert!(matches!(result, Err(SampleImageError::ParseError { line: 2, .. })));
    }

    #[test]
    fn test_bad_token_fails() {
        let result = CsvDumpReader.read_dump(b"1,2\n3,x\n");
        assert!(matches!(result, Err(SampleImageError::ParseError { line: 2, .. })));

        let result = CsvDumpReader.read_dump(b"1,-2\n");
        assert!(matches!(result, Err(SampleImageError::ParseError { line: 1, .. })));

        let result = CsvDumpReader.read_dump(b"1,,2\n");
        assert!(matches!(result, Err(SampleImageError::ParseError { line: 1, .. })));
    }

    #[test]
    fn test_empty_dump_fails() {
        let result = CsvDumpReader.read_dump(b"\n\n");
        assert!(matches!(result, Err(SampleImageError::ParseError { line: 0, .. })));
    }
}
