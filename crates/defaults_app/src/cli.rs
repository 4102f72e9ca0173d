use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use defaults_core::ExitStatus;
use defaults_engine::{FormatSelection, CONVERTER_ENV};

#[derive(Parser, Debug)]
#[command(
    name = "pd",
    version,
    about = "Processes a file with Pandoc into the formats specified in its YAML header.",
    after_help = epilog()
)]
pub struct Cli {
    #[arg(value_name = "FILE", help = "file to be processed")]
    pub file: PathBuf,
    #[arg(short, long, help = "process only the first format")]
    pub first: bool,
    #[arg(short, long, action = ArgAction::Count, help = "log more (repeat for debug output)")]
    pub verbose: u8,
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "colorize the report")]
    pub color: ColorMode,
    #[arg(long, value_name = "PATH", help = "also write log records to this file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn selection(&self) -> FormatSelection {
        if self.first {
            FormatSelection::FirstOnly
        } else {
            FormatSelection::All
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

fn epilog() -> String {
    format!(
        "environment:\n    {CONVERTER_ENV}: Pandoc executable to use (default: pandoc)\n\nexit status:\n{}",
        ExitStatus::describe_all()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn first_flag_selects_first_only() {
        let cli = Cli::try_parse_from(["pd", "-f", "doc.md"]).unwrap();
        assert_eq!(cli.selection(), FormatSelection::FirstOnly);
        assert_eq!(cli.file, PathBuf::from("doc.md"));

        let cli = Cli::try_parse_from(["pd", "doc.md"]).unwrap();
        assert_eq!(cli.selection(), FormatSelection::All);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn file_argument_is_required() {
        assert!(Cli::try_parse_from(["pd", "--first"]).is_err());
    }
}
