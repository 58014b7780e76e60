use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::write_generated_file;
use crate::common::{count_objects, object_path};

#[rstest]
fn write_blob_object_successfully(
    init_repository_dir: assert_fs::TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_spec = write_generated_file(init_repository_dir.path());
    let file_name = file_spec.path.file_name().unwrap().to_string_lossy().to_string();

    let output = run_gitlet_command(init_repository_dir.path(), &["hash-object", "-w", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{40}\n$")?)
        .get_output()
        .stdout
        .clone();
    let oid = String::from_utf8(output)?.trim().to_string();

    assert!(object_path(init_repository_dir.path(), &oid).is_file());
    Ok(())
}

#[rstest]
fn writing_the_same_content_twice_stores_one_object(init_repository_dir: assert_fs::TempDir) {
    init_repository_dir.child("a.txt").write_str("same").unwrap();
    init_repository_dir.child("b.txt").write_str("same").unwrap();

    let first = run_gitlet_command(init_repository_dir.path(), &["hash-object", "-w", "a.txt"])
        .output()
        .unwrap();
    let second = run_gitlet_command(init_repository_dir.path(), &["hash-object", "-w", "b.txt"])
        .output()
        .unwrap();

    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(count_objects(init_repository_dir.path()), 1);
}

#[rstest]
fn write_from_nested_directory_uses_the_enclosing_repository(
    init_repository_dir: assert_fs::TempDir,
) {
    let nested = init_repository_dir.child("a").child("b");
    nested.create_dir_all().unwrap();
    nested.child("hello.txt").write_str("hello\n").unwrap();

    run_gitlet_command(nested.path(), &["hash-object", "-w", "hello.txt"])
        .assert()
        .success()
        .stdout("ce013625030ba8dba906f756967f9e9ca394464a\n");

    assert!(
        object_path(
            init_repository_dir.path(),
            "ce013625030ba8dba906f756967f9e9ca394464a"
        )
        .is_file()
    );
}
