use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::format_map::FormatMap;

/// Header field holding the list of format specifications.
pub const FORMATS_FIELD: &str = "pandoc-defaults_";

/// Format used when the document declares none.
pub const DEFAULT_FORMAT: &str = "html";

const FORMAT_SHAPE: &str = "This field must contain a sequence of single-key mappings.\n\
Keys and values have to be strings.\n\
Keys have to be unique. Values can be omitted.";

/// What exactly was wrong with the format list. Only surfaces in logs;
/// the user always sees the same shape description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatProblem {
    NotASequence,
    NotSingleKeyMapping { index: usize },
    DuplicateFormat(String),
    NonStringKey { index: usize },
    NonStringValue { format: String },
    EmptyKey { index: usize },
    EmptyValue { format: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot interpret YAML header field \"{}\"\n{}", FORMATS_FIELD, FORMAT_SHAPE)]
pub struct FormatSpecError {
    problem: FormatProblem,
}

impl FormatSpecError {
    fn new(problem: FormatProblem) -> Self {
        defaults_logging::pd_debug!("format specification rejected: {:?}", problem);
        Self { problem }
    }

    pub fn problem(&self) -> &FormatProblem {
        &self.problem
    }
}

/// Where the resolved formats came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSource {
    Header,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormats {
    pub formats: FormatMap,
    pub source: FormatSource,
}

/// The built-in format list: a single `html` entry with its value omitted.
pub fn default_format_list() -> Value {
    let mut entry = Mapping::new();
    entry.insert(Value::String(DEFAULT_FORMAT.to_string()), Value::Null);
    Value::Sequence(vec![Value::Mapping(entry)])
}

/// Resolve the format map from parsed header metadata.
///
/// Metadata that is absent, not a mapping, or lacks [`FORMATS_FIELD`]
/// falls back to [`default_format_list`].
pub fn resolve_formats(metadata: Option<&Value>) -> Result<ResolvedFormats, FormatSpecError> {
    let declared = metadata
        .and_then(Value::as_mapping)
        .and_then(|m| m.get(FORMATS_FIELD));

    match declared {
        Some(list) => Ok(ResolvedFormats {
            formats: resolve_format_list(list)?,
            source: FormatSource::Header,
        }),
        None => Ok(ResolvedFormats {
            formats: resolve_format_list(&default_format_list())?,
            source: FormatSource::Default,
        }),
    }
}

/// Validate a raw format list and flatten it into a [`FormatMap`].
pub fn resolve_format_list(list: &Value) -> Result<FormatMap, FormatSpecError> {
    let items = list
        .as_sequence()
        .ok_or_else(|| FormatSpecError::new(FormatProblem::NotASequence))?;

    let mut formats = FormatMap::new();
    for (index, item) in items.iter().enumerate() {
        let (key, value) = single_entry(item)
            .ok_or_else(|| FormatSpecError::new(FormatProblem::NotSingleKeyMapping { index }))?;

        let format = match key {
            Value::String(s) if s.is_empty() => {
                return Err(FormatSpecError::new(FormatProblem::EmptyKey { index }))
            }
            Value::String(s) => s.clone(),
            _ => return Err(FormatSpecError::new(FormatProblem::NonStringKey { index })),
        };

        let profile = match value {
            Value::Null => format.clone(),
            Value::String(s) if s.is_empty() => {
                return Err(FormatSpecError::new(FormatProblem::EmptyValue { format }))
            }
            Value::String(s) => s.clone(),
            _ => return Err(FormatSpecError::new(FormatProblem::NonStringValue { format })),
        };

        formats
            .insert(format, profile)
            .map_err(|dup| FormatSpecError::new(FormatProblem::DuplicateFormat(dup.0)))?;
    }
    Ok(formats)
}

fn single_entry(item: &Value) -> Option<(&Value, &Value)> {
    let mapping = item.as_mapping()?;
    if mapping.len() != 1 {
        return None;
    }
    mapping.iter().next()
}
