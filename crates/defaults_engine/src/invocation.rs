use std::path::{Path, PathBuf};

use crate::document::DocumentPaths;

/// Name of the defaults file a profile resolves to.
pub fn profile_file(profile: &str) -> String {
    format!("{profile}.yaml")
}

/// One fully built converter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Working directory, so that paths in the profile resolve relative to
    /// the document.
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: &Path, document: &DocumentPaths, format: &str, profile: &str) -> Self {
        let args = vec![
            format!("--defaults={}", profile_file(profile)),
            document.file_name.clone(),
            format!("--output={}", document.output_name(format)),
        ];
        Self {
            program: program.to_path_buf(),
            args,
            cwd: document.dir.clone(),
        }
    }

    /// The command as it could be pasted into a POSIX shell.
    pub fn command_line(&self) -> String {
        let program = self.program.to_string_lossy();
        std::iter::once(program.as_ref())
            .chain(self.args.iter().map(String::as_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(word: &str) -> String {
    match shlex::try_quote(word) {
        Ok(quoted) => quoted.into_owned(),
        // Only words containing NUL end up here; they cannot be spelled in
        // a shell at all, so show them verbatim.
        Err(_) => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_follow_converter_conventions() {
        let doc = DocumentPaths::new(Path::new("/w/paper.md"));
        let inv = Invocation::new(Path::new("/usr/bin/pandoc"), &doc, "pdf", "print");

        assert_eq!(
            inv.args,
            vec![
                "--defaults=print.yaml".to_string(),
                "paper.md".to_string(),
                "--output=paper.pdf".to_string(),
            ]
        );
        assert_eq!(inv.cwd, PathBuf::from("/w"));
    }

    #[test]
    fn command_line_quotes_spaces() {
        let doc = DocumentPaths::new(Path::new("/w/my paper.md"));
        let inv = Invocation::new(Path::new("/usr/bin/pandoc"), &doc, "html", "html");
        let line = inv.command_line();

        assert!(line.starts_with("/usr/bin/pandoc "));
        assert!(!line.contains(" my paper.md "));
        assert!(line.contains("my paper.md'") || line.contains("my paper.md\""));
    }
}
