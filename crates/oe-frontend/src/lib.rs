//! Frontend application layer for oxidized-emotion
//!
//! Holds the application object and the resource cache it owns.

pub mod app;
pub mod resources;

pub use app::FrontendApp;
pub use resources::{AppResources, ResourceError, MANIFEST_FILE};
