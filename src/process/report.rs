//! Post-run report of captured child output.

use super::runner::ExecutionResult;
use std::io::{self, Write};

/// Write the captured stdout and stderr of a finished run.
pub fn write_report(result: &ExecutionResult, out: &mut dyn Write) -> io::Result<()> {
    write!(
        out,
        "\nout:\n{}\nerr:\n{}\n",
        String::from_utf8_lossy(&result.stdout),
        String::from_utf8_lossy(&result.stderr)
    )?;
    out.flush()
}
