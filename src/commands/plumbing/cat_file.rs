use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::revision::Resolver;
use clap::Args;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Args)]
pub struct CatFileArgs {
    #[arg(
        index = 1,
        value_parser = ["blob", "commit", "tag", "tree"],
        help = "The expected type of the object"
    )]
    pub object_type: String,
    #[arg(index = 2, help = "The object to display")]
    pub object: String,
}

/// Write the raw payload of an object
pub fn cat_file(args: &CatFileArgs, cwd: &Path, writer: &mut dyn Write) -> anyhow::Result<()> {
    let repository = Repository::discover(cwd)?;
    let expected_type = ObjectType::try_from(args.object_type.as_str())?;

    let object_id =
        Resolver::new(repository.database()).resolve(&args.object, Some(expected_type), true)?;
    let object = repository.database().read(&object_id)?;

    if object.object_type() != expected_type {
        anyhow::bail!(
            "object {} is a {}, not a {}",
            object_id,
            object.object_type(),
            expected_type
        );
    }

    writer.write_all(&object.serialize())?;

    Ok(())
}
