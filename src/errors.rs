//! Error taxonomy of the object store
//!
//! Every failure the library can produce is one of these variants. The CLI
//! wraps them with `anyhow` context, the library itself never prints.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Discovery reached the filesystem root without finding a `.git` directory
    #[error("not a git repository (or any of the parent directories): {}", .0.display())]
    RepositoryNotFound(PathBuf),

    #[error("{} already contains a git repository", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("{} is not empty", .0.display())]
    NotEmpty(PathBuf),

    #[error("unsupported repositoryformatversion {0}")]
    UnsupportedFormatVersion(i64),

    #[error("malformed object {object}: {reason}")]
    MalformedObject { object: String, reason: String },

    #[error("unknown object type '{0}'")]
    UnknownObjectType(String),

    #[error("object {0} not found")]
    ObjectNotFound(String),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn malformed(object: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedObject {
            object: object.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
