//! Command implementations
//!
//! - `plumbing`: Low-level commands for direct object manipulation (hash-object, cat-file)
//! - `porcelain`: User-facing commands (init)
//!
//! Every command is an options struct parsed by clap plus one handler taking
//! those options, the working directory and the output writer.

pub mod plumbing;
pub mod porcelain;
