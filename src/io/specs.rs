use crate::ladder::LadderProgram;
use crate::rules::Violation;
use crate::utils::LabelType;
use anyhow::Result;
use std::io::{Read, Write};

/// The type of callback functions to call when warnings are raised while reading a ladder program.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read ladder programs.
///
/// The [LabelType](crate::utils::LabelType) of the returned program depends on the reader.
/// In case warnings are raised while reading, the callback functions registered by
/// [add_warning_handler](Self::add_warning_handler) are triggered with the line number and the warning message.
pub trait ProgramReader<T>
where
    T: LabelType,
{
    /// Reads a [`LadderProgram`].
    ///
    /// # Example
    ///
    /// ```
    /// # use rungcheck::io::{LadderReader, ProgramReader};
    /// # use rungcheck::ladder::LadderProgram;
    /// fn read_program_from_str(s: &str) -> LadderProgram<String> {
    ///     let reader = LadderReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid ladder program")
    /// }
    /// # read_program_from_str("rung(main).");
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<LadderProgram<T>>;

    /// Adds a callback function to call when warnings are raised while reading a program.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects that write rule violation reports.
pub trait ReportWriter {
    /// Writes a report for the provided sequence of violations.
    fn write_report(&self, writer: &mut dyn Write, violations: &[Violation]) -> Result<()>;
}
