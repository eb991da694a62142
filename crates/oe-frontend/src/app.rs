//! Main application object

use std::path::PathBuf;

use oe_core::{Config, FileNames, FolderId, LazySlot, Result};
use tracing::debug;

use crate::resources::AppResources;

/// Application state shared by every frontend window
#[derive(Debug)]
pub struct FrontendApp {
    /// Configuration
    config: Config,
    /// Resource cache, built on first use
    resources: LazySlot<AppResources>,
}

impl FrontendApp {
    /// Create a new application
    pub fn new(config: Config) -> Self {
        Self {
            config,
            resources: LazySlot::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The application-wide resource cache.
    ///
    /// Concurrent first callers construct a single cache; every caller gets
    /// a reference to that same instance.
    pub fn resource_cache(&self) -> &AppResources {
        self.resources.get_or_init(|| {
            debug!("Creating resource cache");
            AppResources::new(
                self.config.paths.resources.clone(),
                self.config.gui.toolbar_icon_size,
            )
        })
    }

    /// Whether the resource cache has been created yet
    pub fn has_resource_cache(&self) -> bool {
        self.resources.is_initialized()
    }

    /// Full path of the memory card file for a port and slot
    pub fn memcard_path(&self, port: u32, slot: u32) -> Result<PathBuf> {
        let name = FileNames::memcard(port, slot)?;
        Ok(self.config.paths.resolve(FolderId::MemoryCards).join(name))
    }
}
