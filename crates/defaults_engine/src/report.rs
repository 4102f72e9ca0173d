use std::path::PathBuf;

use defaults_core::{Diagnostic, FormatEntry};

/// Everything a run wants the user to see, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// The document declares no formats; the built-in default is used.
    DefaultFormats,
    FormatsResolved(Vec<FormatEntry>),
    FirstOnly { format: String },
    ConversionStarted {
        format: String,
        profile_file: String,
        command_line: String,
    },
    ConverterOutput { diagnostic: Diagnostic, line: String },
    ConversionSucceeded { output: PathBuf },
    ConversionFailed { exit_code: i32 },
    /// Always follows a conversion, whatever its outcome.
    ConversionFinished,
}

pub trait ReportSink {
    fn emit(&self, event: ReportEvent);
}
