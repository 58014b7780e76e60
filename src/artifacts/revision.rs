//! Object name resolution
//!
//! Maps a user supplied name to an object id. Only full 40-character ids are
//! understood for now; abbreviated ids, ref names and tag peeling would plug in
//! here on top of [`Database::exists`] and [`Database::read`].

use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};
use derive_new::new;
use tracing::debug;

#[derive(Debug, new)]
pub struct Resolver<'d> {
    database: &'d Database,
}

impl Resolver<'_> {
    /// Resolve `name` to the id of a stored object
    ///
    /// `name` is returned unchanged once it is known to be stored.
    /// `expected_type` and `follow_tags` are hints for richer resolution and
    /// do not change the result.
    pub fn resolve(
        &self,
        name: &str,
        expected_type: Option<ObjectType>,
        follow_tags: bool,
    ) -> Result<ObjectId> {
        debug!(name, ?expected_type, follow_tags, "resolving object name");

        let object_id =
            ObjectId::try_parse(name).map_err(|_| Error::ObjectNotFound(name.to_string()))?;

        if !self.database.exists(&object_id) {
            return Err(Error::ObjectNotFound(name.to_string()));
        }

        Ok(object_id)
    }
}
