use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::command::{init_repository_dir, run_gitlet_command, write_object};

const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

fn commit_payload(tree: &str) -> String {
    format!(
        "tree {tree}\n\
         author Jane Doe <jane@example.com> 1700000000 +0100\n\
         committer Jane Doe <jane@example.com> 1700000000 +0100\n\
         \n\
         Initial commit\n\
         \n\
         With a body line.\n"
    )
}

fn tag_payload(target: &str) -> String {
    format!(
        "object {target}\n\
         type commit\n\
         tag v1.0\n\
         tagger Jane Doe <jane@example.com> 1700000000 +0100\n\
         \n\
         Release v1.0\n"
    )
}

#[rstest]
fn read_commit_and_tag_objects(init_repository_dir: assert_fs::TempDir) {
    let dir = init_repository_dir.path();

    let tree_oid = write_object(dir, "tree", "tree", b"");
    assert_eq!(tree_oid, EMPTY_TREE);

    let commit = commit_payload(&tree_oid);
    let commit_oid = write_object(dir, "commit", "commit", commit.as_bytes());

    let tag = tag_payload(&commit_oid);
    let tag_oid = write_object(dir, "tag", "tag", tag.as_bytes());

    let commit_output = run_gitlet_command(dir, &["cat-file", "commit", &commit_oid])
        .output()
        .unwrap();
    assert!(commit_output.status.success());
    assert_eq!(String::from_utf8(commit_output.stdout).unwrap(), commit);

    let tag_output = run_gitlet_command(dir, &["cat-file", "tag", &tag_oid])
        .output()
        .unwrap();
    assert!(tag_output.status.success());
    assert_eq!(String::from_utf8(tag_output.stdout).unwrap(), tag);
}

#[rstest]
fn read_tree_object_with_entries(init_repository_dir: assert_fs::TempDir) {
    let dir = init_repository_dir.path();
    let blob_oid = write_object(dir, "hello.txt", "blob", b"hello\n");

    let mut tree = Vec::new();
    tree.extend_from_slice(b"100644 hello.txt\0");
    tree.extend_from_slice(&hex::decode(&blob_oid).unwrap());
    let tree_oid = write_object(dir, "tree", "tree", &tree);

    let output = run_gitlet_command(dir, &["cat-file", "tree", &tree_oid])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, tree);
}

#[rstest]
fn read_latin1_commit_byte_for_byte(init_repository_dir: assert_fs::TempDir) {
    let dir = init_repository_dir.path();

    let mut commit = commit_payload(EMPTY_TREE)
        .replace("\n\nInitial commit", "\nencoding ISO-8859-1\n\nInitial commit")
        .into_bytes();
    commit.extend_from_slice(b"Caf\xe9\n");
    let commit_oid = write_object(dir, "commit", "commit", &commit);

    let output = run_gitlet_command(dir, &["cat-file", "commit", &commit_oid])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, commit);
}
