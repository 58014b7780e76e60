use predicates::prelude::*;
use rstest::rstest;

use crate::common::command::{init_repository_dir, run_gitlet_command, write_object};

#[rstest]
fn read_object_with_wrong_type_fails(init_repository_dir: assert_fs::TempDir) {
    let oid = write_object(init_repository_dir.path(), "hello.txt", "blob", b"hello\n");

    run_gitlet_command(init_repository_dir.path(), &["cat-file", "commit", &oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "object {oid} is a blob, not a commit"
        )));
}
