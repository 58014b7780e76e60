//! Plumbing commands (low-level Git operations)
//!
//! ## Commands
//!
//! - `hash-object`: Compute object ID and optionally store in database
//! - `cat-file`: Print the raw content of a stored object

pub mod cat_file;
pub mod hash_object;
