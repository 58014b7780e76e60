//! Git tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! ## Ordering
//!
//! Entries are serialized in the order they were added. No canonical sort is
//! applied, so the same entries in a different order produce a different id.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::io::BufRead;

const TREE: &str = "tree";

/// A single `<mode> <name> <oid>` line of a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    mode: String,
    name: String,
    oid: ObjectId,
}

impl TreeEntry {
    /// Build an entry that serializes to a parsable line
    ///
    /// The mode must be non-empty octal digits and the name must not contain
    /// a NUL byte.
    pub fn new(mode: impl Into<String>, name: impl Into<String>, oid: ObjectId) -> Result<Self> {
        let mode = mode.into();
        let name = name.into();

        if !is_octal(mode.as_bytes()) {
            return Err(Error::malformed(TREE, format!("invalid entry mode {mode:?}")));
        }
        if name.contains('\0') {
            return Err(Error::malformed(TREE, format!("entry name {name:?} contains NUL")));
        }

        Ok(TreeEntry { mode, name, oid })
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Directory entries use the `40000` mode (sometimes written `040000`)
    pub fn is_tree(&self) -> bool {
        self.mode.trim_start_matches('0') == "40000"
    }
}

fn is_octal(mode: &[u8]) -> bool {
    !mode.is_empty() && mode.iter().all(|b| (b'0'..=b'7').contains(b))
}

/// Git tree object representing a directory snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(entries: Vec<TreeEntry>) -> Self {
        Tree { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        let mut content = Vec::new();

        for entry in &self.entries {
            content.extend_from_slice(entry.mode.as_bytes());
            content.push(b' ');
            content.extend_from_slice(entry.name.as_bytes());
            content.push(0);
            content.extend_from_slice(entry.oid.as_bytes());
        }

        content.into()
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> Result<Self> {
        let mut entries = Vec::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        let malformed = |reason: &str| Error::malformed(TREE, reason);

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let n = reader
                .read_until(b' ', &mut mode_bytes)
                .map_err(|e| malformed(&e.to_string()))?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            // Must end with ' ' or it's truncated
            if mode_bytes.pop() != Some(b' ') {
                return Err(malformed("unexpected EOF in mode"));
            }
            if !is_octal(&mode_bytes) {
                return Err(malformed("invalid entry mode"));
            }
            let mode = String::from_utf8(mode_bytes.clone())
                .map_err(|_| malformed("invalid entry mode"))?;

            // Read "name\0"
            name_bytes.clear();
            reader
                .read_until(b'\0', &mut name_bytes)
                .map_err(|e| malformed(&e.to_string()))?;
            if name_bytes.pop() != Some(b'\0') {
                return Err(malformed("unexpected EOF in name"));
            }
            let name = String::from_utf8(name_bytes.clone())
                .map_err(|_| malformed("entry name is not valid UTF-8"))?;

            let oid = ObjectId::read_raw_from(&mut reader)
                .map_err(|_| malformed("unexpected EOF in object id"))?;

            entries.push(TreeEntry::new(mode, name, oid)?);
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
