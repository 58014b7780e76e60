//! Git data structures
//!
//! - `objects`: Git object types (blob, tree, commit, tag) and their encoding
//! - `revision`: Mapping user supplied names to object ids

pub mod objects;
pub mod revision;
