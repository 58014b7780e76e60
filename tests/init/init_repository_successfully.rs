use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

use crate::common::command::run_gitlet_command;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let git_dir = dir
        .path()
        .canonicalize()?
        .join("repo")
        .join(".git")
        .display()
        .to_string();

    run_gitlet_command(dir.path(), &["init", "repo"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty Git repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(git_dir));

    let repo = dir.child("repo").child(".git");
    repo.child("branches").assert(predicate::path::is_dir());
    repo.child("objects").assert(predicate::path::is_dir());
    repo.child("refs").child("heads").assert(predicate::path::is_dir());
    repo.child("refs").child("tags").assert(predicate::path::is_dir());
    repo.child("HEAD").assert("ref: refs/heads/master\n");
    repo.child("description")
        .assert(predicate::str::starts_with("Unnamed repository"));
    repo.child("config").assert(
        "[core]\n\trepositoryformatversion = 0\n\tfilemode = false\n\tbare = false\n",
    );

    Ok(())
}
