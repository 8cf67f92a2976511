//! This module contains the objects used to read ladder programs and to write violation reports.

mod specs;
pub use specs::ProgramReader;
pub use specs::ReportWriter;
pub use specs::WarningHandler;

mod ladder_reader;
pub use ladder_reader::LadderReader;

mod report_writer;
pub use report_writer::TextReportWriter;
