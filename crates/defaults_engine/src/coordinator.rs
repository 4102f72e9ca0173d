use std::path::Path;

use defaults_core::{parse_metadata, resolve_formats, ExitStatus, FormatSource};
use defaults_logging::{pd_info, pd_warn};

use crate::convert::Converter;
use crate::dispatch::{dispatch, Conversion};
use crate::document::{read_header, DocumentPaths};
use crate::report::{ReportEvent, ReportSink};
use crate::settings::FormatSelection;
use crate::RunError;

/// Result of a run that got through every selected format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    /// One entry per dispatched format, in processing order.
    pub conversions: Vec<Conversion>,
    /// Some converter printed an attention warning.
    pub warned: bool,
}

impl RunReport {
    pub fn failed_formats(&self) -> Vec<String> {
        self.conversions
            .iter()
            .filter(|c| !c.succeeded())
            .map(|c| c.format.clone())
            .collect()
    }

    /// Raise the aggregate failure if any conversion exited non-zero.
    pub fn ensure_success(&self) -> Result<(), RunError> {
        let formats = self.failed_formats();
        if formats.is_empty() {
            Ok(())
        } else {
            Err(RunError::ConversionsFailed { formats })
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::for_completed_run(!self.failed_formats().is_empty(), self.warned)
    }
}

/// Drives one document through every format its header declares.
pub struct Coordinator<'a> {
    converter: &'a dyn Converter,
    sink: &'a dyn ReportSink,
}

impl<'a> Coordinator<'a> {
    pub fn new(converter: &'a dyn Converter, sink: &'a dyn ReportSink) -> Self {
        Self { converter, sink }
    }

    /// Resolve the document's formats and convert them one after another.
    ///
    /// Header and format list problems abort before any conversion. A
    /// failing conversion does not stop the ones after it; see
    /// [`RunReport::ensure_success`].
    pub fn run(&self, document: &Path, selection: FormatSelection) -> Result<RunReport, RunError> {
        let metadata = match read_header(document)? {
            Some(block) => parse_metadata(&block)?,
            None => None,
        };

        let resolved = resolve_formats(metadata.as_ref())?;
        if resolved.source == FormatSource::Default {
            self.sink.emit(ReportEvent::DefaultFormats);
        }
        let mut formats = resolved.formats;
        self.sink
            .emit(ReportEvent::FormatsResolved(formats.iter().cloned().collect()));

        if selection == FormatSelection::FirstOnly {
            formats.truncate_to_first();
            if let Some(first) = formats.first() {
                self.sink.emit(ReportEvent::FirstOnly {
                    format: first.format.clone(),
                });
            }
        }

        let paths = DocumentPaths::new(document);
        let mut report = RunReport::default();
        for entry in &formats {
            let conversion = dispatch(
                self.converter,
                &paths,
                &entry.format,
                &entry.profile,
                self.sink,
            )?;
            if !conversion.succeeded() {
                pd_warn!(
                    "format {} exited with code {}",
                    conversion.format,
                    conversion.exit_code
                );
            }
            report.warned |= conversion.warned;
            report.conversions.push(conversion);
        }

        pd_info!(
            "processed {} format(s), {} failed, warned={}",
            report.conversions.len(),
            report.failed_formats().len(),
            report.warned
        );
        Ok(report)
    }
}
