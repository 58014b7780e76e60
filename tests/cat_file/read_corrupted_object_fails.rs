use predicates::prelude::*;
use rstest::rstest;

use crate::common::command::{init_repository_dir, run_gitlet_command, write_object};
use crate::common::object_path;

#[rstest]
fn read_corrupted_object_fails(init_repository_dir: assert_fs::TempDir) {
    let oid = write_object(init_repository_dir.path(), "hello.txt", "blob", b"hello\n");
    std::fs::write(
        object_path(init_repository_dir.path(), &oid),
        b"definitely not zlib",
    )
    .unwrap();

    run_gitlet_command(init_repository_dir.path(), &["cat-file", "blob", &oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed object"));
}

#[rstest]
fn read_object_with_lying_length_fails(init_repository_dir: assert_fs::TempDir) {
    use flate2::Compression;
    use flate2::write::ZlibEncoder;
    use std::io::Write;

    let oid = write_object(init_repository_dir.path(), "hello.txt", "blob", b"hello\n");

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b"blob 99\0hello\n").unwrap();
    std::fs::write(
        object_path(init_repository_dir.path(), &oid),
        encoder.finish().unwrap(),
    )
    .unwrap();

    run_gitlet_command(init_repository_dir.path(), &["cat-file", "blob", &oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed object"));
}
