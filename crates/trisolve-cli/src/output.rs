//! Result grid output formatting.

use std::io::{self, Write};

use trisolve_core::SolveGrid;

/// Write the solved grid as CSV, one line per system, 10 decimal places.
pub fn write_csv<W: Write>(grid: &SolveGrid, writer: &mut W) -> io::Result<()> {
    for i in 0..grid.ni() {
        let row = grid.system(i).expect("index in range");
        for (k, value) in row.iter().enumerate() {
            if k > 0 {
                write!(writer, ",")?;
            }
            write!(writer, "{value:.10}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
