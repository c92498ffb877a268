use crate::common::MemWriter;
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use mit::areas::repository::{Repository, SessionOptions};
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Build a `mit` session command fed with the given script lines
pub fn mit_session(dir: &Path, script: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mit").expect("Failed to find mit binary");
    cmd.current_dir(dir);

    let mut input = script.join("\n");
    input.push('\n');
    cmd.write_stdin(input);

    cmd
}

/// Same as `mit_session`, with extra CLI arguments before the script runs
pub fn mit_session_with_args(dir: &Path, args: &[&str], script: &[&str]) -> Command {
    let mut cmd = mit_session(dir, script);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Open a `Repository` on `dir` whose output is captured in the returned writer
pub fn open_repository(dir: &Path) -> (Repository, MemWriter) {
    open_repository_with_options(dir, SessionOptions::default())
}

pub fn open_repository_with_options(
    dir: &Path,
    options: SessionOptions,
) -> (Repository, MemWriter) {
    let writer = MemWriter::default();
    let repository = Repository::new(
        &dir.to_string_lossy(),
        Box::new(writer.clone()),
        options,
    )
    .expect("Failed to open repository");

    (repository, writer)
}
