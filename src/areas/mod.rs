//! Core repository components
//!
//! - `config`: Repository configuration file
//! - `database`: Object database for storing blobs, trees, commits and tags
//! - `repository`: Repository discovery, bootstrap and path resolution

pub mod config;
pub mod database;
pub mod repository;
