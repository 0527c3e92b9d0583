use crate::cli::OutputFormat;
use crate::record::SlowlogRecord;
use std::io::{self, Write};

pub fn render_records<W: Write>(
    records: &[SlowlogRecord],
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(out, "{record}")?;
            }
        }
        OutputFormat::Json => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
    }

    out.flush()
}
