//! Object envelope
//!
//! The envelope is the exact byte sequence that is hashed and stored:
//! `<type> <decimal-length>\0<payload>`. The length is the only size field and
//! has a single spelling: no sign, no leading zeros.

use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

const ENVELOPE: &str = "envelope";

/// Prefix `payload` with its type and length header
pub fn wrap(object_type: ObjectType, payload: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), payload.len());

    let mut envelope = BytesMut::with_capacity(header.len() + payload.len());
    envelope.put_slice(header.as_bytes());
    envelope.put_slice(payload);

    envelope.freeze()
}

/// Split an envelope into its declared type and payload
///
/// The declared length must equal the payload length. The length is checked
/// before the type name, so a truncated envelope of an unknown type is
/// reported as malformed.
pub fn unwrap(raw: Bytes) -> Result<(ObjectType, Bytes)> {
    let type_end = raw
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(|| Error::malformed(ENVELOPE, "missing type delimiter"))?;
    let size_end = raw[type_end..]
        .iter()
        .position(|&b| b == b'\0')
        .map(|offset| type_end + offset)
        .ok_or_else(|| Error::malformed(ENVELOPE, "missing size delimiter"))?;

    let size = std::str::from_utf8(&raw[type_end + 1..size_end])
        .ok()
        .filter(|size| is_canonical_size(size))
        .and_then(|size| size.parse::<usize>().ok())
        .ok_or_else(|| Error::malformed(ENVELOPE, "invalid size field"))?;

    let payload = raw.slice(size_end + 1..);
    if size != payload.len() {
        return Err(Error::malformed(
            ENVELOPE,
            format!("bad length: declared {}, found {}", size, payload.len()),
        ));
    }

    let object_type = std::str::from_utf8(&raw[..type_end])
        .map_err(|_| Error::UnknownObjectType(String::from_utf8_lossy(&raw[..type_end]).into()))?;
    let object_type = ObjectType::try_from(object_type)?;

    Ok((object_type, payload))
}

fn is_canonical_size(size: &str) -> bool {
    !size.is_empty()
        && size.bytes().all(|b| b.is_ascii_digit())
        && (size == "0" || !size.starts_with('0'))
}
