use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use defaults_logging::{pd_debug, pd_trace, pd_warn};

use crate::invocation::Invocation;
use crate::RunError;

/// Runs one converter invocation, handing each output line to `on_line`
/// as soon as it arrives, and returns the exit code.
pub trait Converter {
    fn program(&self) -> &Path;

    fn convert(
        &self,
        invocation: &Invocation,
        on_line: &mut dyn FnMut(String),
    ) -> Result<i32, RunError>;
}

/// Converter backed by an external executable.
#[derive(Debug, Clone)]
pub struct ProcessConverter {
    program: PathBuf,
}

impl ProcessConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Converter for ProcessConverter {
    fn program(&self) -> &Path {
        &self.program
    }

    fn convert(
        &self,
        invocation: &Invocation,
        on_line: &mut dyn FnMut(String),
    ) -> Result<i32, RunError> {
        let spawn_error = |source| RunError::Spawn {
            program: invocation.program.clone(),
            source,
        };

        // One pipe for both streams keeps stdout and stderr lines in the
        // order the converter wrote them.
        let (reader, writer) = os_pipe::pipe().map_err(spawn_error)?;
        let err_writer = writer.try_clone().map_err(spawn_error)?;

        // The command owns the parent's copies of the write end; it must be
        // dropped before reading or the pipe never reaches end-of-stream.
        let mut child = {
            let mut command = Command::new(&invocation.program);
            command
                .args(&invocation.args)
                .current_dir(&invocation.cwd)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(err_writer);
            command.spawn().map_err(spawn_error)?
        };
        pd_debug!("spawned converter pid={}", child.id());

        forward_lines(reader, on_line);

        let status = child.wait().map_err(spawn_error)?;
        let code = exit_code(status);
        pd_debug!("converter exited with {code}");
        Ok(code)
    }
}

fn forward_lines<R: Read>(stream: R, on_line: &mut dyn FnMut(String)) {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf).trim_end().to_string();
                pd_trace!("converter: {line}");
                on_line(line);
            }
            Err(err) => {
                pd_warn!("reading converter output failed: {err}");
                break;
            }
        }
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| -sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
