//! A minimal content-addressable object store with git's on-disk layout
//!
//! - `areas`: Repository handle, configuration and loose object database
//! - `artifacts`: Object model, envelope codec and name resolution
//! - `commands`: The `init`, `hash-object` and `cat-file` commands
//! - `errors`: Error taxonomy shared by all of the above

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
