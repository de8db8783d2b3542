// src/presentation.rs
use std::io::Write;

use chars_counter_core::{CountMode, MatchCount};
use serde::Serialize;

use crate::options::OutputFormat;

/// Result of one run, as emitted by `--format json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub count: MatchCount,
    #[serde(flatten)]
    pub mode: CountMode,
}

/// Emit the report in the selected format and flush `out`.
pub fn emit<W: Write>(report: &CountReport, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.count)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
