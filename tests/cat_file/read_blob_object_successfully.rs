use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::command::{init_repository_dir, run_gitlet_command, write_object};
use crate::common::file::write_generated_file;

#[rstest]
fn read_blob_object_successfully(init_repository_dir: assert_fs::TempDir) {
    let file_spec = write_generated_file(init_repository_dir.path());
    let file_name = file_spec.path.file_name().unwrap().to_string_lossy().to_string();
    let oid = write_object(
        init_repository_dir.path(),
        &file_name,
        "blob",
        &file_spec.content,
    );

    let output = run_gitlet_command(init_repository_dir.path(), &["cat-file", "blob", &oid])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, file_spec.content);
}

#[rstest]
fn read_binary_blob_from_nested_directory(init_repository_dir: assert_fs::TempDir) {
    let content = [0u8, 159, 146, 150, b'\n', 0, 255];
    let oid = write_object(init_repository_dir.path(), "binary", "blob", &content);

    let nested = init_repository_dir.child("src").child("deep");
    nested.create_dir_all().unwrap();

    let output = run_gitlet_command(nested.path(), &["cat-file", "blob", &oid])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, content.to_vec());
}
