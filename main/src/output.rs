use std::io::Write;

use anyhow::Result;
use circular::stats::CircularSummary;
use clap::ValueEnum;

/// How samples and summaries are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One value per line
    Lines,

    /// A single JSON document
    Json,
}

/// Write the samples with enough digits to read back the exact values
pub fn write_samples<W: Write>(out: &mut W, samples: &[f64], format: Format) -> Result<()> {
    match format {
        Format::Lines => {
            for sample in samples {
                writeln!(out, "{sample}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, samples)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Write the circular statistics of a set of samples
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &CircularSummary,
    format: Format,
) -> Result<()> {
    match format {
        Format::Lines => {
            writeln!(out, "samples:            {}", summary.count)?;
            writeln!(out, "circular mean:      {:.6}", summary.mean)?;
            writeln!(out, "resultant length:   {:.6}", summary.resultant_length)?;
            writeln!(out, "circular variance:  {:.6}", summary.variance)?;
            writeln!(
                out,
                "rayleigh z:         {:.6} (p = {:.4e})",
                summary.rayleigh.statistic, summary.rayleigh.p_value
            )?;
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
