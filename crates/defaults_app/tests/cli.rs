#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

struct TestEnv {
    tmp: TempDir,
    converter: PathBuf,
}

impl TestEnv {
    /// `body` is the shell script standing in for Pandoc.
    fn new(body: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let converter = tmp.path().join("fake-pandoc");
        fs::write(&converter, format!("#!/bin/sh\n{body}\n")).expect("write stub");
        fs::set_permissions(&converter, fs::Permissions::from_mode(0o755)).expect("chmod stub");
        Self { tmp, converter }
    }

    fn document(&self, name: &str, content: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, content).expect("write document");
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pd").unwrap();
        cmd.env("PD_PANDOC", &self.converter).arg("--color=never");
        cmd
    }

    fn dir(&self) -> &Path {
        self.tmp.path()
    }
}

const TWO_FORMATS: &str = "---\npandoc-defaults_:\n  - html:\n  - pdf: print\n---\n\nBody\n";

#[test]
fn clean_run_exits_zero_and_lists_formats() {
    let env = TestEnv::new("echo \"Converting $3\"");
    let doc = env.document("paper.md", TWO_FORMATS);

    env.cmd()
        .arg(&doc)
        .assert()
        .code(0)
        .stdout(contains("Pandoc/Defaults"))
        .stdout(contains("formats:"))
        .stdout(contains("    html ← html"))
        .stdout(contains("    pdf ← print"))
        .stdout(contains("――― pdf ← print.yaml"))
        .stdout(contains("  Converting --output=paper.pdf"))
        .stdout(contains(format!("◁ {}", env.dir().join("paper.html").display())));
}

#[test]
fn warning_line_exits_one() {
    let env = TestEnv::new("echo '[WARNING] missing citation'");
    let doc = env.document("paper.md", "---\npandoc-defaults_: [{html: }]\n---\n");

    env.cmd()
        .arg(&doc)
        .assert()
        .code(1)
        .stdout(contains("  [WARNING] missing citation"));
}

#[test]
fn failed_format_exits_two_after_all_formats() {
    let env = TestEnv::new(
        "case \"$3\" in *.html) echo '[WARNING] w'; exit 5;; *) echo done;; esac",
    );
    let doc = env.document("paper.md", TWO_FORMATS);

    env.cmd()
        .arg(&doc)
        .assert()
        .code(2)
        .stdout(contains("exited with code 5"))
        .stdout(contains("――― pdf ← print.yaml"))
        .stdout(contains("some Pandoc processes failed"));
}

#[test]
fn first_flag_processes_only_first_format() {
    let env = TestEnv::new("echo \"Converting $3\"");
    let doc = env.document("paper.md", TWO_FORMATS);

    env.cmd()
        .arg("--first")
        .arg(&doc)
        .assert()
        .code(0)
        .stdout(contains("processing only first (html)"))
        .stdout(contains("--output=paper.pdf").not());
}

#[test]
fn default_format_used_without_header() {
    let env = TestEnv::new("exit 0");
    let doc = env.document("notes.txt", "plain text\n");

    env.cmd()
        .arg(&doc)
        .assert()
        .code(0)
        .stdout(contains("no formats specified within file"))
        .stdout(contains("――― html ← html.yaml"));
}

#[test]
fn malformed_format_list_exits_three() {
    let env = TestEnv::new("echo should-not-run");
    let doc = env.document("paper.md", "---\npandoc-defaults_: [{html: null}, {html: alt}]\n---\n");

    env.cmd()
        .arg(&doc)
        .assert()
        .code(3)
        .stdout(contains("cannot interpret YAML header field \"pandoc-defaults_\""))
        .stdout(contains("should-not-run").not());
}

#[test]
fn yaml_syntax_error_exits_three() {
    let env = TestEnv::new("exit 0");
    let doc = env.document("paper.md", "---\ntitle: [unclosed\n---\n");

    env.cmd()
        .arg(&doc)
        .assert()
        .code(3)
        .stdout(contains("cannot parse YAML header"));
}

#[test]
fn missing_document_exits_three() {
    let env = TestEnv::new("exit 0");
    let missing = env.dir().join("absent.md");

    env.cmd()
        .arg(&missing)
        .assert()
        .code(3)
        .stdout(contains(format!("file {} does not exist", missing.display())));
}

#[test]
fn missing_converter_exits_three() {
    let env = TestEnv::new("exit 0");
    let doc = env.document("paper.md", TWO_FORMATS);

    Command::cargo_bin("pd")
        .unwrap()
        .env("PD_PANDOC", env.dir().join("no-such-pandoc"))
        .arg(&doc)
        .assert()
        .code(3)
        .stdout(contains("could not find Pandoc executable"))
        .stdout(contains("use the environment variable PD_PANDOC to set it"));
}

#[test]
fn help_lists_exit_statuses() {
    Command::cargo_bin("pd")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("exit status:"))
        .stdout(contains("2: one of the formats failed"));
}
