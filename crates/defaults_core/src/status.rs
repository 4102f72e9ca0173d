/// Process exit status of one run, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExitStatus {
    /// Every conversion succeeded without attention warnings.
    Clean,
    /// Every conversion succeeded, at least one warning was printed.
    Warned,
    /// At least one conversion exited non-zero.
    ConversionFailed,
    /// Nothing could be converted: missing input, converter or bad header.
    Failed,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Warned => 1,
            ExitStatus::ConversionFailed => 2,
            ExitStatus::Failed => 3,
        }
    }

    /// Status of a run that got through every format.
    pub fn for_completed_run(any_failed: bool, warned: bool) -> Self {
        if any_failed {
            ExitStatus::ConversionFailed
        } else if warned {
            ExitStatus::Warned
        } else {
            ExitStatus::Clean
        }
    }

    /// Lines for the `--help` epilog.
    pub fn describe_all() -> String {
        [
            ExitStatus::Clean,
            ExitStatus::Warned,
            ExitStatus::ConversionFailed,
            ExitStatus::Failed,
        ]
        .iter()
        .map(|s| format!("    {}: {}", s.code(), s.summary()))
        .collect::<Vec<_>>()
        .join("\n")
    }

    fn summary(self) -> &'static str {
        match self {
            ExitStatus::Clean => "no warnings or errors",
            ExitStatus::Warned => "one or more warnings",
            ExitStatus::ConversionFailed => "one of the formats failed",
            ExitStatus::Failed => "failed completely",
        }
    }
}
