use super::ReportWriter;
use crate::rules::Violation;
use anyhow::{Context, Result};
use std::io::Write;

/// A plain-text writer for violation reports.
///
/// Each violation is written on its own line, followed by a summary line with the violation count.
///
/// # Example
///
/// ```
/// # use rungcheck::io::{ReportWriter, TextReportWriter};
/// let writer = TextReportWriter;
/// let mut buffer = Vec::new();
/// writer.write_report(&mut buffer, &[]).unwrap();
/// assert_eq!("0 violation(s) found\n", String::from_utf8(buffer).unwrap());
/// ```
pub struct TextReportWriter;

impl ReportWriter for TextReportWriter {
    fn write_report(&self, writer: &mut dyn Write, violations: &[Violation]) -> Result<()> {
        let context = "while writing a violation report";
        for v in violations {
            writeln!(writer, "{}", v).context(context)?;
        }
        writeln!(writer, "{} violation(s) found", violations.len()).context(context)?;
        writer.flush().context(context)
    }
}
