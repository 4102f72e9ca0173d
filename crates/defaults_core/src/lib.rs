//! Pandoc/Defaults core: header extraction, format resolution and
//! diagnostic classification. Nothing in here touches the file system or
//! spawns processes.
mod classify;
mod format_map;
mod formats;
mod header;
mod metadata;
mod status;

pub use classify::{classify, Diagnostic, ERROR_MARKERS, WARNING_MARKERS};
pub use format_map::{DuplicateFormat, FormatEntry, FormatMap};
pub use formats::{
    default_format_list, resolve_format_list, resolve_formats, FormatProblem, FormatSource,
    FormatSpecError, ResolvedFormats, DEFAULT_FORMAT, FORMATS_FIELD,
};
pub use header::{extract_header, HeaderBlock, HEADER_END, HEADER_START};
pub use metadata::{parse_metadata, HeaderPosition, MetadataError};
pub use serde_yaml::Value;
pub use status::ExitStatus;
