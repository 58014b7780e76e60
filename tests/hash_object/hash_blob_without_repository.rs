use assert_fs::prelude::*;
use rstest::rstest;

use crate::common::command::{repository_dir, run_gitlet_command};

#[rstest]
fn hash_blob_without_repository(repository_dir: assert_fs::TempDir) {
    repository_dir.child("hello.txt").write_str("hello\n").unwrap();

    run_gitlet_command(repository_dir.path(), &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout("ce013625030ba8dba906f756967f9e9ca394464a\n");

    repository_dir
        .child(".git")
        .assert(predicates::path::missing());
}

#[rstest]
fn hash_empty_tree(repository_dir: assert_fs::TempDir) {
    repository_dir.child("empty").touch().unwrap();

    run_gitlet_command(repository_dir.path(), &["hash-object", "-t", "tree", "empty"])
        .assert()
        .success()
        .stdout("4b825dc642cb6eb9a060e54bf8d69288fbee4904\n");
}
