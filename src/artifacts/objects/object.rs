use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::envelope;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tag::Tag;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Result;
use bytes::Bytes;
use std::io::{BufRead, Cursor};

/// Canonical payload encoding (without the envelope header)
pub trait Packable {
    fn serialize(&self) -> Bytes;
}

/// Inverse of [`Packable`], reading the payload only
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// `<type> <size>\0<payload>`, the bytes that are hashed and stored
    fn envelope(&self) -> Bytes {
        envelope::wrap(self.object_type(), &self.serialize())
    }

    fn object_id(&self) -> ObjectId {
        ObjectId::hash(&self.envelope())
    }
}

/// Any of the four object variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBox {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
    Tag(Tag),
}

impl ObjectBox {
    /// Decode `payload` as an object of the given type
    pub fn deserialize(object_type: ObjectType, payload: Bytes) -> Result<Self> {
        let reader = Cursor::new(payload);

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Blob::deserialize(reader)?)),
            ObjectType::Tree => Ok(ObjectBox::Tree(Tree::deserialize(reader)?)),
            ObjectType::Commit => Ok(ObjectBox::Commit(Commit::deserialize(reader)?)),
            ObjectType::Tag => Ok(ObjectBox::Tag(Tag::deserialize(reader)?)),
        }
    }

    /// Decode a full envelope
    pub fn from_envelope(raw: Bytes) -> Result<Self> {
        let (object_type, payload) = envelope::unwrap(raw)?;

        Self::deserialize(object_type, payload)
    }
}

impl Packable for ObjectBox {
    fn serialize(&self) -> Bytes {
        match self {
            ObjectBox::Blob(blob) => blob.serialize(),
            ObjectBox::Tree(tree) => tree.serialize(),
            ObjectBox::Commit(commit) => commit.serialize(),
            ObjectBox::Tag(tag) => tag.serialize(),
        }
    }
}

impl Object for ObjectBox {
    fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
            ObjectBox::Tag(_) => ObjectType::Tag,
        }
    }
}

impl From<Blob> for ObjectBox {
    fn from(blob: Blob) -> Self {
        ObjectBox::Blob(blob)
    }
}

impl From<Tree> for ObjectBox {
    fn from(tree: Tree) -> Self {
        ObjectBox::Tree(tree)
    }
}

impl From<Commit> for ObjectBox {
    fn from(commit: Commit) -> Self {
        ObjectBox::Commit(commit)
    }
}

impl From<Tag> for ObjectBox {
    fn from(tag: Tag) -> Self {
        ObjectBox::Tag(tag)
    }
}
