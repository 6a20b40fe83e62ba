use std::io::Write;

use tracing::debug;

use crate::sample_pipeline::common::error::Result;
use crate::sample_pipeline::dump::types::PixelGrid;

/// Writes the grid as a CSV dump, one row per line.
pub fn write_csv(grid: &PixelGrid, output: &mut dyn Write) -> Result<()> {
    debug!("Writing CSV dump: {} samples", grid.len());

    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(output, "{}", line.join(","))?;
    }

    Ok(())
}

/// Writes the grid as a packed dump, two bytes per sample, MSB first.
pub fn write_packed(grid: &PixelGrid, output: &mut dyn Write) -> Result<()> {
    debug!("Writing packed dump: {} samples", grid.len());

    let bytes: Vec<u8> = grid.as_slice().iter().flat_map(|v| v.to_be_bytes()).collect();
    output.write_all(&bytes)?;

    Ok(())
}
