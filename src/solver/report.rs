use std::io::Write;

use crate::solver::constants::REPORT_HEADER;
use crate::value::ExpressionValue;

/// Write a header line followed by one description per solution
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_report<W: Write>(out: &mut W, solutions: &[ExpressionValue]) -> std::io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    for solution in solutions {
        writeln!(out, "{}", solution)?;
    }
    out.flush()
}
