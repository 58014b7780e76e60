//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - Parent commit ID(s) (for history)
//! - Author and committer information
//! - An optional signature
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Headers are kept exactly as parsed, so unknown headers (`encoding`,
//! `mergetag`, ...) survive a read/write cycle unchanged. The message is kept
//! as raw bytes since its charset is whatever `encoding` says.

use crate::artifacts::objects::author::Author;
use crate::artifacts::objects::headers::Headers;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::io::BufRead;

const COMMIT: &str = "commit";

/// Git commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    headers: Headers,
    message: Bytes,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `tree_oid` - Tree object representing the snapshot
    /// * `parents` - Parent commit IDs (empty for an initial commit)
    /// * `author` - Author who wrote the changes
    /// * `committer` - Committer who recorded the commit
    /// * `message` - Commit message
    pub fn new(
        tree_oid: ObjectId,
        parents: Vec<ObjectId>,
        author: Author,
        committer: Author,
        message: impl Into<Bytes>,
    ) -> Self {
        let mut headers = Headers::default();
        headers.push_known("tree", tree_oid.to_string());
        for parent in parents {
            headers.push_known("parent", parent.to_string());
        }
        headers.push_known("author", author.display());
        headers.push_known("committer", committer.display());

        Commit {
            headers,
            message: message.into(),
        }
    }

    pub fn from_parts(headers: Headers, message: impl Into<Bytes>) -> Self {
        Commit {
            headers,
            message: message.into(),
        }
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Declared charset of the message, if any
    pub fn encoding(&self) -> Result<Option<&str>> {
        self.headers.get_str(COMMIT, "encoding")
    }

    pub fn tree_oid(&self) -> Result<ObjectId> {
        let tree = self
            .headers
            .get("tree")
            .ok_or_else(|| Error::malformed(COMMIT, "missing tree header"))?;

        parse_oid(tree)
    }

    pub fn parents(&self) -> Result<Vec<ObjectId>> {
        self.headers.get_all("parent").map(parse_oid).collect()
    }

    pub fn author(&self) -> Result<Author> {
        self.signature_header("author")
    }

    pub fn committer(&self) -> Result<Author> {
        self.signature_header("committer")
    }

    /// The `gpgsig` header, if the commit is signed
    pub fn signature(&self) -> Result<Option<&str>> {
        self.headers.get_str(COMMIT, "gpgsig")
    }

    fn signature_header(&self, key: &str) -> Result<Author> {
        let value = self
            .headers
            .get_str(COMMIT, key)?
            .ok_or_else(|| Error::malformed(COMMIT, format!("missing {key} header")))?;

        Author::try_from(value)
    }
}

fn parse_oid(value: &[u8]) -> Result<ObjectId> {
    std::str::from_utf8(value)
        .ok()
        .and_then(|value| ObjectId::try_parse(value).ok())
        .ok_or_else(|| {
            Error::malformed(
                COMMIT,
                format!("invalid object id '{}'", String::from_utf8_lossy(value)),
            )
        })
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        self.headers.serialize_with(&self.message)
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> Result<Self> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| Error::malformed(COMMIT, e.to_string()))?;

        let (headers, message) = Headers::parse_with_message(COMMIT, &content)?;

        Ok(Commit::from_parts(headers, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
