use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlet::commands::plumbing::cat_file::{CatFileArgs, cat_file};
use gitlet::commands::plumbing::hash_object::{HashObjectArgs, hash_object};
use gitlet::commands::porcelain::init::{InitArgs, init};

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A content-addressable object store with git's on-disk layout",
    long_about = "This is a minimal implementation of git's object storage, written in Rust. \
    It stores blobs, trees, commits and tags as loose objects \
    and reads them back by their SHA-1 key.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new, empty repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path. \
        The target must not exist yet or be an empty directory."
    )]
    Init(InitArgs),
    #[command(
        name = "hash-object",
        about = "Compute object ID and optionally create an object from a file",
        long_about = "This command hashes a file as an object of the given type \
        and can write it to the object database."
    )]
    HashObject(HashObjectArgs),
    #[command(
        name = "cat-file",
        about = "Provide content of repository objects",
        long_about = "This command prints the raw content of an object in the repository. \
        It requires the type and the full SHA of the object."
    )]
    CatFile(CatFileArgs),
}

fn main() -> Result<()> {
    // Respects RUST_LOG (e.g. RUST_LOG=gitlet=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Commands::Init(args) => init(args, &pwd, &mut stdout)?,
        Commands::HashObject(args) => hash_object(args, &pwd, &mut stdout)?,
        Commands::CatFile(args) => cat_file(args, &pwd, &mut stdout)?,
    }

    Ok(())
}
