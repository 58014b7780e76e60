use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;

use crate::common::command::{repository_dir, run_gitlet_command};

#[rstest]
fn write_outside_repository_fails(repository_dir: assert_fs::TempDir) {
    // run from the filesystem root so no enclosing checkout can be found
    let root = Path::new("/");
    assert!(!root.join(".git").exists(), "filesystem root holds a .git directory");

    let file = repository_dir.child("hello.txt");
    file.write_str("hello\n").unwrap();
    let file_path = file.path().display().to_string();

    run_gitlet_command(root, &["hash-object", "-w", &file_path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));

    run_gitlet_command(root, &["hash-object", &file_path])
        .assert()
        .success()
        .stdout("ce013625030ba8dba906f756967f9e9ca394464a\n");
}
