//! Pandoc/Defaults engine: document access, converter processes and the
//! per-document run.
mod convert;
mod coordinator;
mod dispatch;
mod document;
mod error;
mod invocation;
mod report;
mod settings;

pub use convert::{Converter, ProcessConverter};
pub use coordinator::{Coordinator, RunReport};
pub use dispatch::{dispatch, Conversion};
pub use document::{read_header, DocumentPaths};
pub use error::RunError;
pub use invocation::{profile_file, Invocation};
pub use report::{ReportEvent, ReportSink};
pub use settings::{FormatSelection, Settings, CONVERTER_ENV, DEFAULT_CONVERTER};
