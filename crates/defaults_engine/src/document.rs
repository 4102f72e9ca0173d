use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use defaults_core::{extract_header, HeaderBlock};

use crate::RunError;

/// The pieces of a document path the converter invocation is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    /// Directory the converter runs in.
    pub dir: PathBuf,
    /// File name including its extension.
    pub file_name: String,
    /// File name without its final extension.
    pub stem: String,
}

impl DocumentPaths {
    pub fn new(document: &Path) -> Self {
        let dir = match document.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = document
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = document
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            dir,
            file_name,
            stem,
        }
    }

    /// Output file name for `format`, relative to [`DocumentPaths::dir`].
    pub fn output_name(&self, format: &str) -> String {
        format!("{}.{}", self.stem, format)
    }

    pub fn output_path(&self, format: &str) -> PathBuf {
        self.dir.join(self.output_name(format))
    }
}

/// Read the metadata block of `document`, streaming only up to its end.
pub fn read_header(document: &Path) -> Result<Option<HeaderBlock>, RunError> {
    let file = File::open(document).map_err(|err| map_open_error(document, err))?;
    extract_header(BufReader::new(file)).map_err(|source| RunError::DocumentRead {
        path: document.to_path_buf(),
        source,
    })
}

fn map_open_error(document: &Path, err: io::Error) -> RunError {
    match err.kind() {
        io::ErrorKind::NotFound => RunError::DocumentNotFound(document.to_path_buf()),
        _ => RunError::DocumentRead {
            path: document.to_path_buf(),
            source: err,
        },
    }
}
