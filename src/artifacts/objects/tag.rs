//! Git annotated tag object
//!
//! ## Format
//!
//! ```text
//! object <target-sha>
//! type <target-type>
//! tag <name>
//! tagger <name> <email> <timestamp> <timezone>
//!
//! <tag message>
//! ```

use crate::artifacts::objects::author::Author;
use crate::artifacts::objects::headers::Headers;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::io::BufRead;

const TAG: &str = "tag";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    headers: Headers,
    message: Bytes,
}

impl Tag {
    pub fn new(
        target: ObjectId,
        target_type: ObjectType,
        name: &str,
        tagger: Author,
        message: impl Into<Bytes>,
    ) -> Self {
        let mut headers = Headers::default();
        headers.push_known("object", target.to_string());
        headers.push_known("type", target_type.as_str());
        headers.push_known("tag", name.to_string());
        headers.push_known("tagger", tagger.display());

        Tag {
            headers,
            message: message.into(),
        }
    }

    pub fn from_parts(headers: Headers, message: impl Into<Bytes>) -> Self {
        Tag {
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

    /// The object this tag points at
    pub fn target(&self) -> Result<ObjectId> {
        let object = self.required("object")?;

        ObjectId::try_parse(object)
            .map_err(|_| Error::malformed(TAG, format!("invalid object id '{object}'")))
    }

    pub fn target_type(&self) -> Result<ObjectType> {
        ObjectType::try_from(self.required("type")?)
    }

    pub fn name(&self) -> Result<&str> {
        self.required("tag")
    }

    pub fn tagger(&self) -> Result<Author> {
        Author::try_from(self.required("tagger")?)
    }

    fn required(&self, key: &str) -> Result<&str> {
        self.headers
            .get_str(TAG, key)?
            .ok_or_else(|| Error::malformed(TAG, format!("missing {key} header")))
    }
}

impl Packable for Tag {
    fn serialize(&self) -> Bytes {
        self.headers.serialize_with(&self.message)
    }
}

impl Unpackable for Tag {
    fn deserialize(mut reader: impl BufRead) -> Result<Self> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| Error::malformed(TAG, e.to_string()))?;

        let (headers, message) = Headers::parse_with_message(TAG, &content)?;

        Ok(Tag::from_parts(headers, message))
    }
}

impl Object for Tag {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tag
    }
}
