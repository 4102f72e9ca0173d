use std::io;
use std::path::PathBuf;

use defaults_core::{ExitStatus, FormatSpecError, MetadataError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("file {} does not exist", .0.display())]
    DocumentNotFound(PathBuf),
    #[error("cannot read file {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    FormatSpec(#[from] FormatSpecError),
    #[error("could not find Pandoc executable \"{name}\"")]
    ConverterNotFound { name: String },
    #[error("could not start {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("some Pandoc processes failed")]
    ConversionsFailed { formats: Vec<String> },
}

impl RunError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RunError::ConversionsFailed { .. } => ExitStatus::ConversionFailed,
            _ => ExitStatus::Failed,
        }
    }
}
