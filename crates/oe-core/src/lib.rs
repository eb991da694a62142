//! Core infrastructure for the oxidized-emotion frontend
//!
//! This crate provides the foundational types, error handling,
//! configuration, folder layout, logging and lazy-initialization
//! primitives shared by the other crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod sync;

pub use config::Config;
pub use error::{FrontendError, Result};
pub use paths::{FileNames, FolderId, PathConfig};
pub use sync::LazySlot;
