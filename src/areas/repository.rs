//! Repository handle
//!
//! A [`Repository`] ties a worktree to its store root (`<worktree>/.git`) and
//! the configuration loaded from it. Handles are created either by walking up
//! from a directory until a store root is found, or by bootstrapping a new one.
//!
//! ## Layout written by `init`
//!
//! ```text
//! .git/
//!   branches/
//!   objects/
//!   refs/heads/
//!   refs/tags/
//!   description
//!   HEAD
//!   config
//! ```

use crate::areas::config::{Config, SUPPORTED_FORMAT_VERSION};
use crate::areas::database::Database;
use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the store root under the worktree
pub const GIT_DIR: &str = ".git";

pub const DEFAULT_BRANCH: &str = "master";

const DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

#[derive(Debug)]
pub struct Repository {
    worktree: Box<Path>,
    git_dir: Box<Path>,
    config: Config,
    database: Database,
}

impl Repository {
    /// Open the repository whose worktree is `worktree`
    ///
    /// The store root must exist, hold a `config` file, and declare a format
    /// version this implementation understands.
    pub fn open(worktree: &Path) -> Result<Self> {
        let git_dir = worktree.join(GIT_DIR);
        if !git_dir.is_dir() {
            return Err(Error::RepositoryNotFound(worktree.to_path_buf()));
        }

        let config_path = git_dir.join("config");
        if !config_path.is_file() {
            return Err(Error::Config(format!(
                "configuration file missing: {}",
                config_path.display()
            )));
        }

        let config = Config::load(&config_path)?;
        let version = config.format_version()?;
        if version != SUPPORTED_FORMAT_VERSION {
            return Err(Error::UnsupportedFormatVersion(version));
        }

        debug!(worktree = %worktree.display(), "opened repository");

        Ok(Self::with_config(worktree, config))
    }

    /// Build a handle without any validation, used while bootstrapping
    fn force(worktree: &Path) -> Self {
        Self::with_config(worktree, Config::default_repository())
    }

    fn with_config(worktree: &Path, config: Config) -> Self {
        let git_dir = worktree.join(GIT_DIR);
        let database = Database::new(git_dir.join("objects").into_boxed_path());

        Repository {
            worktree: worktree.into(),
            git_dir: git_dir.into_boxed_path(),
            config,
            database,
        }
    }

    /// Find the repository containing `start`, walking up to the filesystem root
    pub fn discover(start: &Path) -> Result<Self> {
        Self::discover_optional(start)?
            .ok_or_else(|| Error::RepositoryNotFound(start.to_path_buf()))
    }

    /// Like [`Repository::discover`], but `None` when no store root exists
    pub fn discover_optional(start: &Path) -> Result<Option<Self>> {
        let start = start.canonicalize().map_err(|e| Error::io(start, e))?;
        let mut current = start.as_path();

        loop {
            if current.join(GIT_DIR).is_dir() {
                debug!(start = %start.display(), found = %current.display(), "discovered repository");
                return Self::open(current).map(Some);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => {
                    debug!(start = %start.display(), "no repository up to filesystem root");
                    return Ok(None);
                }
            }
        }
    }

    /// Create a new repository at `target`
    ///
    /// `target` must be absent or an empty directory. Nothing is created when
    /// validation fails.
    pub fn init(target: &Path) -> Result<Self> {
        if target.exists() {
            if !target.is_dir() {
                return Err(Error::NotADirectory(target.to_path_buf()));
            }
            if target.join(GIT_DIR).exists() {
                return Err(Error::AlreadyInitialized(target.to_path_buf()));
            }
            let mut entries = fs::read_dir(target).map_err(|e| Error::io(target, e))?;
            if entries.next().is_some() {
                return Err(Error::NotEmpty(target.to_path_buf()));
            }
        } else {
            fs::create_dir_all(target).map_err(|e| Error::io(target, e))?;
        }

        let worktree = target.canonicalize().map_err(|e| Error::io(target, e))?;
        let repository = Self::force(&worktree);

        repository.ensure_dir(&["branches"], true)?;
        repository.ensure_dir(&["objects"], true)?;
        repository.ensure_dir(&["refs", "tags"], true)?;
        repository.ensure_dir(&["refs", "heads"], true)?;

        repository.write_file(&["description"], DESCRIPTION)?;
        repository.write_file(&["HEAD"], &format!("ref: refs/heads/{DEFAULT_BRANCH}\n"))?;

        let config_path = repository.path(&["config"]);
        repository.config.save(&config_path)?;

        info!(git_dir = %repository.git_dir.display(), "initialized empty repository");

        Ok(repository)
    }

    pub fn worktree(&self) -> &Path {
        &self.worktree
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Join `segments` under the store root, without touching the disk
    pub fn path(&self, segments: &[&str]) -> PathBuf {
        segments
            .iter()
            .fold(self.git_dir.to_path_buf(), |path, segment| path.join(segment))
    }

    /// Resolve a directory under the store root
    ///
    /// # Returns
    ///
    /// - `Some(path)` if the directory exists, or was created because `mkdir` is set
    /// - `None` if it is absent and `mkdir` is not set
    /// - `NotADirectory` if the path exists but is not a directory
    pub fn ensure_dir(&self, segments: &[&str], mkdir: bool) -> Result<Option<PathBuf>> {
        let path = self.path(segments);

        if path.exists() {
            return if path.is_dir() {
                Ok(Some(path))
            } else {
                Err(Error::NotADirectory(path))
            };
        }

        if !mkdir {
            return Ok(None);
        }

        fs::create_dir_all(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Some(path))
    }

    /// Resolve a file under the store root, making sure its parent directory exists
    pub fn ensure_file(&self, segments: &[&str], mkdir: bool) -> Result<Option<PathBuf>> {
        let Some((_, parents)) = segments.split_last() else {
            return Ok(Some(self.git_dir.to_path_buf()));
        };

        Ok(self
            .ensure_dir(parents, mkdir)?
            .map(|_| self.path(segments)))
    }

    fn write_file(&self, segments: &[&str], content: &str) -> Result<()> {
        let path = self
            .ensure_file(segments, true)?
            .unwrap_or_else(|| self.path(segments));

        fs::write(&path, content).map_err(|e| Error::io(&path, e))
    }
}
