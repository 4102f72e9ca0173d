use std::env;
use std::path::PathBuf;

use crate::RunError;

/// Environment variable overriding the converter executable.
pub const CONVERTER_ENV: &str = "PD_PANDOC";

/// Converter looked up on `PATH` when [`CONVERTER_ENV`] is unset.
pub const DEFAULT_CONVERTER: &str = "pandoc";

/// Which of the declared formats a run processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatSelection {
    #[default]
    All,
    /// Only the first declared format.
    FirstOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub converter: String,
    pub selection: FormatSelection,
}

impl Settings {
    /// Settings with the converter name taken from the environment.
    pub fn from_env(selection: FormatSelection) -> Self {
        Self {
            converter: converter_name(env::var(CONVERTER_ENV).ok()),
            selection,
        }
    }

    /// Resolve the converter name or path to an executable file.
    pub fn locate_converter(&self) -> Result<PathBuf, RunError> {
        match which::which(&self.converter) {
            Ok(path) => {
                defaults_logging::pd_debug!("converter {} -> {}", self.converter, path.display());
                Ok(path)
            }
            Err(err) => {
                defaults_logging::pd_debug!("converter lookup failed: {err}");
                Err(RunError::ConverterNotFound {
                    name: self.converter.clone(),
                })
            }
        }
    }
}

/// An empty override is kept as is, so lookup fails instead of quietly
/// using the default.
fn converter_name(override_value: Option<String>) -> String {
    override_value.unwrap_or_else(|| DEFAULT_CONVERTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_converter_is_reported_by_name() {
        let settings = Settings {
            converter: "pd-no-such-converter-on-path".to_string(),
            selection: FormatSelection::All,
        };
        match settings.locate_converter() {
            Err(RunError::ConverterNotFound { name }) => {
                assert_eq!(name, "pd-no-such-converter-on-path")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unset_override_uses_default_converter() {
        assert_eq!(converter_name(None), DEFAULT_CONVERTER);
        assert_eq!(converter_name(Some("/opt/pandoc".to_string())), "/opt/pandoc");
    }

    #[test]
    fn empty_override_fails_lookup() {
        let settings = Settings {
            converter: converter_name(Some(String::new())),
            selection: FormatSelection::All,
        };
        assert_eq!(settings.converter, "");
        assert!(matches!(
            settings.locate_converter(),
            Err(RunError::ConverterNotFound { .. })
        ));
    }
}
