use serde_yaml::Value;
use thiserror::Error;

use crate::header::HeaderBlock;

/// Position of a YAML syntax error inside the header block, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPosition {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Error)]
#[error("cannot parse YAML header: {message}")]
pub struct MetadataError {
    message: String,
    position: Option<HeaderPosition>,
}

impl MetadataError {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Option<HeaderPosition> {
        self.position
    }
}

impl From<serde_yaml::Error> for MetadataError {
    fn from(err: serde_yaml::Error) -> Self {
        let position = err.location().map(|loc| HeaderPosition {
            line: loc.line(),
            column: loc.column(),
        });
        Self {
            message: err.to_string(),
            position,
        }
    }
}

/// Parse a header block as YAML.
///
/// A block holding only comments or an explicit null parses to `None`,
/// the same outcome as a document without a header.
pub fn parse_metadata(block: &HeaderBlock) -> Result<Option<Value>, MetadataError> {
    let value: Value = serde_yaml::from_str(&block.text())?;
    Ok(match value {
        Value::Null => None,
        other => Some(other),
    })
}
