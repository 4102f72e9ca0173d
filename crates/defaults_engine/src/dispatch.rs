use defaults_core::{classify, Diagnostic};

use crate::convert::Converter;
use crate::document::DocumentPaths;
use crate::invocation::{profile_file, Invocation};
use crate::report::{ReportEvent, ReportSink};
use crate::RunError;

/// Outcome of converting the document into one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub format: String,
    pub profile: String,
    pub exit_code: i32,
    /// At least one output line was an attention warning.
    pub warned: bool,
}

impl Conversion {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Convert `document` into `format` using `profile`.
///
/// A non-zero exit code is part of the returned [`Conversion`]; only a
/// converter that cannot be started is an error.
pub fn dispatch(
    converter: &dyn Converter,
    document: &DocumentPaths,
    format: &str,
    profile: &str,
    sink: &dyn ReportSink,
) -> Result<Conversion, RunError> {
    let invocation = Invocation::new(converter.program(), document, format, profile);
    sink.emit(ReportEvent::ConversionStarted {
        format: format.to_string(),
        profile_file: profile_file(profile),
        command_line: invocation.command_line(),
    });
    defaults_logging::pd_info!(
        "converting {} to {format} in {}",
        document.file_name,
        invocation.cwd.display()
    );

    let mut warned = false;
    let result = converter.convert(&invocation, &mut |line| {
        let diagnostic = classify(&line);
        if diagnostic == Diagnostic::Warning {
            warned = true;
        }
        sink.emit(ReportEvent::ConverterOutput { diagnostic, line });
    });

    let exit_code = match result {
        Ok(code) => code,
        Err(err) => {
            sink.emit(ReportEvent::ConversionFinished);
            return Err(err);
        }
    };

    if exit_code == 0 {
        sink.emit(ReportEvent::ConversionSucceeded {
            output: document.output_path(format),
        });
    } else {
        sink.emit(ReportEvent::ConversionFailed { exit_code });
    }
    sink.emit(ReportEvent::ConversionFinished);

    Ok(Conversion {
        format: format.to_string(),
        profile: profile.to_string(),
        exit_code,
        warned,
    })
}
