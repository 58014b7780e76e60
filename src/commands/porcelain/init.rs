use crate::areas::repository::Repository;
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(index = 1, help = "Where to create the repository")]
    pub path: Option<PathBuf>,
}

pub fn init(args: &InitArgs, cwd: &Path, writer: &mut dyn Write) -> anyhow::Result<()> {
    let target = match &args.path {
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };

    let repository = Repository::init(&target)?;

    writeln!(
        writer,
        "Initialized empty Git repository in {}",
        repository.git_dir().display()
    )?;

    Ok(())
}
