//! Renders report events and errors to standard output.

use std::io::{IsTerminal, Write};
use std::path::Path;

use defaults_core::Diagnostic;
use defaults_engine::{ReportEvent, ReportSink, RunError, CONVERTER_ENV};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::ColorMode;

const HEADING_WIDTH: usize = 79;

pub struct Terminal {
    stream: StandardStream,
}

impl Terminal {
    pub fn new(mode: ColorMode) -> Self {
        let choice = match mode {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
        };
        Self {
            stream: StandardStream::stdout(choice),
        }
    }

    pub fn banner(&self) {
        self.blank();
        self.styled(None, true, "Pandoc/Defaults");
        self.blank();
    }

    /// Echo the run as it could be repeated from a shell.
    pub fn invocation(&self, first_only: bool, document: &Path) {
        let flag = if first_only { " --first" } else { "" };
        self.plain(&format!("▶ pd{flag} {}", document.display()));
        self.blank();
    }

    pub fn report_error(&self, err: &RunError) {
        match err {
            RunError::Metadata(meta) => {
                self.error("cannot parse YAML header");
                self.error(meta.message());
                if let Some(pos) = meta.position() {
                    self.error(&format!(
                        "in header line {}, column {}",
                        pos.line, pos.column
                    ));
                }
            }
            RunError::ConverterNotFound { .. } => {
                self.error(&err.to_string());
                self.error(&format!(
                    "use the environment variable {CONVERTER_ENV} to set it"
                ));
            }
            _ => {
                for line in err.to_string().lines() {
                    self.error(line);
                }
            }
        }
        self.blank();
    }

    fn heading(&self, text: &str) {
        let heading: String = format!("――― {text} ")
            .chars()
            .chain(std::iter::repeat('―'))
            .take(HEADING_WIDTH)
            .collect();
        self.styled(Some(Color::Green), false, &heading);
    }

    fn error(&self, text: &str) {
        self.styled(Some(Color::Red), false, text);
    }

    fn plain(&self, text: &str) {
        self.styled(None, false, text);
    }

    fn blank(&self) {
        self.plain("");
    }

    fn styled(&self, color: Option<Color>, bold: bool, text: &str) {
        let mut out = self.stream.lock();
        let mut spec = ColorSpec::new();
        spec.set_fg(color).set_bold(bold);
        // A closed stdout is not worth aborting the conversions for.
        let _ = out.set_color(&spec);
        let _ = write!(out, "{text}");
        let _ = out.reset();
        let _ = writeln!(out);
    }
}

impl ReportSink for Terminal {
    fn emit(&self, event: ReportEvent) {
        match event {
            ReportEvent::DefaultFormats => {
                self.plain("no formats specified within file");
                self.blank();
            }
            ReportEvent::FormatsResolved(entries) => {
                self.plain("formats:");
                for entry in entries {
                    self.plain(&format!("    {} ← {}", entry.format, entry.profile));
                }
                self.blank();
            }
            ReportEvent::FirstOnly { format } => {
                self.plain(&format!("processing only first ({format})"));
                self.blank();
            }
            ReportEvent::ConversionStarted {
                format,
                profile_file,
                command_line,
            } => {
                self.heading(&format!("{format} ← {profile_file}"));
                self.plain(&format!("▶ {command_line}"));
            }
            ReportEvent::ConverterOutput { diagnostic, line } => {
                let color = match diagnostic {
                    Diagnostic::Fatal => Some(Color::Red),
                    Diagnostic::Warning => Some(Color::Yellow),
                    Diagnostic::Info => None,
                };
                self.styled(color, false, &format!("  {line}"));
            }
            ReportEvent::ConversionSucceeded { output } => {
                self.plain(&format!("◁ {}", output.display()));
            }
            ReportEvent::ConversionFailed { exit_code } => {
                self.error(&format!("exited with code {exit_code}"));
            }
            ReportEvent::ConversionFinished => self.blank(),
        }
    }
}
