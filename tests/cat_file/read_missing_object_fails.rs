use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;

use crate::common::command::{init_repository_dir, run_gitlet_command};

#[rstest]
#[case::absent_key("ce013625030ba8dba906f756967f9e9ca394464a")]
#[case::short_name("ce01362")]
#[case::not_hex("HEAD")]
fn read_missing_object_fails(init_repository_dir: assert_fs::TempDir, #[case] name: &str) {
    run_gitlet_command(init_repository_dir.path(), &["cat-file", "blob", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("object {name} not found")));
}

#[test]
fn read_outside_repository_fails() {
    let root = Path::new("/");
    assert!(!root.join(".git").exists(), "filesystem root holds a .git directory");

    run_gitlet_command(
        root,
        &["cat-file", "blob", "ce013625030ba8dba906f756967f9e9ca394464a"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("not a git repository"));
}
