mod cli;
mod logging;
mod terminal;

use std::process::ExitCode;

use clap::Parser;
use defaults_core::ExitStatus;
use defaults_engine::{Coordinator, FormatSelection, ProcessConverter, RunError, Settings};
use defaults_logging::{level_for_verbosity, pd_debug, pd_info};

use crate::cli::Cli;
use crate::terminal::Terminal;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors mean nothing could be processed.
            return if err.use_stderr() {
                ExitCode::from(ExitStatus::Failed.code())
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::initialize(level_for_verbosity(cli.verbose), cli.log_file.as_deref());

    let terminal = Terminal::new(cli.color);
    terminal.banner();

    let status = run(&cli, &terminal);
    pd_info!("exit status {:?}", status);
    ExitCode::from(status.code())
}

fn run(cli: &Cli, terminal: &Terminal) -> ExitStatus {
    let settings = Settings::from_env(cli.selection());
    match process(cli, &settings, terminal) {
        Ok(status) => status,
        Err(err) => {
            pd_debug!("run aborted: {err:?}");
            terminal.report_error(&err);
            err.exit_status()
        }
    }
}

fn process(cli: &Cli, settings: &Settings, terminal: &Terminal) -> Result<ExitStatus, RunError> {
    let program = settings.locate_converter()?;
    let document = std::path::absolute(&cli.file).map_err(|source| RunError::DocumentRead {
        path: cli.file.clone(),
        source,
    })?;
    terminal.invocation(settings.selection == FormatSelection::FirstOnly, &document);

    let converter = ProcessConverter::new(program);
    let report = Coordinator::new(&converter, terminal).run(&document, settings.selection)?;
    report.ensure_success()?;
    Ok(report.exit_status())
}
