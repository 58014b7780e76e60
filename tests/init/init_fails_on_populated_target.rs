use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

use crate::common::command::{init_repository_dir, repository_dir, run_gitlet_command};

#[rstest]
fn init_twice_fails(init_repository_dir: assert_fs::TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already contains a git repository"));
}

#[rstest]
fn init_in_non_empty_directory_fails_without_side_effects(repository_dir: assert_fs::TempDir) {
    repository_dir.child("notes.txt").write_str("keep me").unwrap();

    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not empty"));

    repository_dir
        .child(".git")
        .assert(predicate::path::missing());
}

#[rstest]
fn init_on_a_file_fails(repository_dir: assert_fs::TempDir) {
    repository_dir.child("notes.txt").write_str("keep me").unwrap();

    run_gitlet_command(repository_dir.path(), &["init", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}
