use crate::areas::database::Database;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct HashObjectArgs {
    #[arg(
        short = 't',
        long = "type",
        default_value = "blob",
        value_parser = ["blob", "commit", "tag", "tree"],
        help = "The type of object to create"
    )]
    pub object_type: String,
    #[arg(short, long, help = "Write the object to the object database")]
    pub write: bool,
    #[arg(index = 1, help = "Read the object from this file")]
    pub file: PathBuf,
}

/// Hash a file as an object of the requested type
///
/// The file is decoded as that type first, so a malformed tree, commit or tag
/// is rejected instead of being stored. The repository is only needed when
/// the object is written.
pub fn hash_object(
    args: &HashObjectArgs,
    cwd: &Path,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let object_type = ObjectType::try_from(args.object_type.as_str())?;

    let file = cwd.join(&args.file);
    let data = std::fs::read(&file)
        .with_context(|| format!("Unable to read file {}", file.display()))?;

    let object = ObjectBox::deserialize(object_type, data.into())
        .with_context(|| format!("{} is not a valid {}", file.display(), object_type))?;

    let object_id = if args.write {
        let repository = Repository::discover(cwd)?;
        repository.database().write(&object, true)?
    } else {
        Database::hash(&object.envelope())
    };

    writeln!(writer, "{object_id}")?;

    Ok(())
}
