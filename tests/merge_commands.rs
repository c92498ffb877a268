use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;
use common::command::{mit_session, open_repository, repository_dir};
use common::file::{FileSpec, write_file};

#[rstest]
fn merging_divergent_edits_reports_one_conflict_and_keeps_the_source_version(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let (mut repository, writer) = open_repository(dir.path());

    repository.init()?;
    write_file(FileSpec::new(dir.path().join("f.txt"), "hello".to_string()));
    repository.add("f.txt")?;
    repository.commit("first")?;

    repository.branch("feature")?;
    repository.checkout("feature")?;
    write_file(FileSpec::new(dir.path().join("f.txt"), "world".to_string()));
    repository.add("f.txt")?;
    repository.commit("second")?;

    repository.checkout("main")?;
    writer.clear();
    repository.merge("feature")?;

    let output = writer.contents();
    assert_eq!(
        output.matches("CONFLICT (content): f.txt").count(),
        1,
        "expected exactly one conflict:\n{output}"
    );
    assert!(output.contains("Merged branch feature into main"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("f.txt"))?,
        "world"
    );

    Ok(())
}

#[rstest]
fn merging_disjoint_snapshots_materializes_the_union_without_conflicts(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let (mut repository, writer) = open_repository(dir.path());

    repository.init()?;
    write_file(FileSpec::new(dir.path().join("a.txt"), "ours".to_string()));
    repository.add("a.txt")?;
    repository.commit("first")?;

    repository.branch("feature")?;
    repository.checkout("feature")?;
    write_file(FileSpec::new(dir.path().join("b.txt"), "theirs".to_string()));
    repository.add("b.txt")?;
    repository.commit("second")?;

    repository.checkout("main")?;
    // the merge must restore b.txt from the object store, not from the
    // working directory
    std::fs::remove_file(dir.path().join("b.txt"))?;

    writer.clear();
    repository.merge("feature")?;

    let output = writer.contents();
    assert!(!output.contains("CONFLICT"), "unexpected conflict:\n{output}");
    assert_eq!(std::fs::read_to_string(dir.path().join("a.txt"))?, "ours");
    assert_eq!(std::fs::read_to_string(dir.path().join("b.txt"))?, "theirs");

    Ok(())
}

#[rstest]
fn merge_does_not_record_a_commit(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let (mut repository, _writer) = open_repository(dir.path());

    repository.init()?;
    write_file(FileSpec::new(dir.path().join("a.txt"), "ours".to_string()));
    repository.add("a.txt")?;
    repository.commit("first")?;
    let tip_before = repository.branches().active_tip();

    repository.branch("feature")?;
    repository.checkout("feature")?;
    write_file(FileSpec::new(dir.path().join("b.txt"), "theirs".to_string()));
    repository.add("b.txt")?;
    repository.commit("second")?;

    repository.checkout("main")?;
    repository.merge("feature")?;

    assert_eq!(repository.branches().active_tip(), tip_before);

    Ok(())
}

#[rstest]
fn merging_an_unknown_branch_is_rejected(repository_dir: TempDir) {
    let dir = repository_dir;

    mit_session(dir.path(), &["init", "merge missing", "exit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("branch not found: missing"));
}

#[rstest]
fn merging_when_the_active_branch_has_no_commits_is_rejected(repository_dir: TempDir) {
    let dir = repository_dir;
    write_file(FileSpec::new(dir.path().join("f.txt"), "hello".to_string()));

    mit_session(
        dir.path(),
        &[
            "init",
            "branch feature",
            "checkout feature",
            "add f.txt",
            "commit -m first",
            "checkout main",
            "merge feature",
            "exit",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("branch main has no commits"));
}

#[rstest]
fn merging_a_branch_with_no_commits_is_rejected(repository_dir: TempDir) {
    let dir = repository_dir;

    mit_session(
        dir.path(),
        &["init", "branch feature", "merge feature", "exit"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("branch feature has no commits"));
}
