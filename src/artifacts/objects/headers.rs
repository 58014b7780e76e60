//! Header block shared by commits and tags
//!
//! ## Format
//!
//! ```text
//! <key> <value>\n
//! <key> <first line>\n
//!  <continuation line>\n
//! \n
//! <message>
//! ```
//!
//! Keys may repeat (`parent`) and keep the order in which they were parsed or
//! pushed. Continuation lines of a multi-line value start with a single space.
//! Values and the message are raw bytes: an `encoding` header may declare a
//! legacy charset, so nothing is decoded until a typed accessor asks for it.

use crate::errors::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: Vec<(String, Bytes)>,
}

impl Headers {
    /// Append a header
    ///
    /// Keys must be non-empty and free of spaces and newlines, otherwise the
    /// block could not be parsed back.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Bytes>) -> Result<()> {
        let key = key.into();
        if key.is_empty() || key.contains([' ', '\n']) {
            return Err(Error::malformed("header", format!("invalid key {key:?}")));
        }

        self.fields.push((key, value.into()));
        Ok(())
    }

    /// Append a header whose key is a known constant
    pub(crate) fn push_known(&mut self, key: &'static str, value: impl Into<Bytes>) {
        debug_assert!(!key.is_empty() && !key.contains([' ', '\n']));
        self.fields.push((key.to_string(), value.into()));
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.get_all(key).next()
    }

    pub fn get_all<'h>(&'h self, key: &str) -> impl Iterator<Item = &'h [u8]> {
        self.fields
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// First value under `key` decoded as UTF-8, `kind` labels the error
    pub fn get_str(&self, kind: &str, key: &str) -> Result<Option<&str>> {
        self.get(key)
            .map(|value| {
                std::str::from_utf8(value)
                    .map_err(|_| Error::malformed(kind, format!("{key} header is not valid UTF-8")))
            })
            .transpose()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Render the headers, a blank line and the message
    pub fn serialize_with(&self, message: &[u8]) -> Bytes {
        let mut content = BytesMut::new();

        for (key, value) in &self.fields {
            content.put_slice(key.as_bytes());
            content.put_u8(b' ');
            for &byte in value.iter() {
                content.put_u8(byte);
                if byte == b'\n' {
                    content.put_u8(b' ');
                }
            }
            content.put_u8(b'\n');
        }
        content.put_u8(b'\n');
        content.put_slice(message);

        content.freeze()
    }

    /// Parse a header block followed by a message
    ///
    /// `kind` only labels errors (`commit`, `tag`).
    pub fn parse_with_message(kind: &str, raw: &[u8]) -> Result<(Self, Bytes)> {
        let malformed = |reason: &str| Error::malformed(kind, reason);

        let mut headers = Headers::default();
        let mut pos = 0;

        loop {
            let rest = &raw[pos..];
            if rest.is_empty() {
                return Err(malformed("missing blank line before message"));
            }
            if let Some(message) = rest.strip_prefix(b"\n") {
                return Ok((headers, Bytes::copy_from_slice(message)));
            }

            let space = rest.iter().position(|&b| b == b' ');
            let newline = rest.iter().position(|&b| b == b'\n');
            let space = match (space, newline) {
                (Some(space), Some(newline)) if space < newline => space,
                (Some(space), None) => space,
                _ => return Err(malformed("header line without value")),
            };
            if space == 0 {
                return Err(malformed("continuation line without header"));
            }

            // a value ends at the first newline not followed by a space
            let mut end = space;
            loop {
                let newline = rest[end + 1..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map(|offset| end + 1 + offset)
                    .ok_or_else(|| malformed("unterminated header"))?;
                end = newline;
                if rest.get(end + 1) != Some(&b' ') {
                    break;
                }
            }

            let key = std::str::from_utf8(&rest[..space])
                .map_err(|_| malformed("header key is not valid UTF-8"))?;
            headers.push(key, unfold(&rest[space + 1..end]))?;

            pos += end + 1;
        }
    }
}

/// Drop the space that starts every continuation line
fn unfold(value: &[u8]) -> Bytes {
    let mut unfolded = BytesMut::with_capacity(value.len());
    let mut after_newline = false;

    for &byte in value {
        if !(after_newline && byte == b' ') {
            unfolded.put_u8(byte);
        }
        after_newline = byte == b'\n';
    }

    unfolded.freeze()
}
