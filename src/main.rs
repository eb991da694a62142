//! Oxidized-Emotion - PS2 emulator frontend
//!
//! Main entry point for the frontend application.

use anyhow::Context;
use oe_core::{Config, FolderId};
use oe_frontend::FrontendApp;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // Logging settings live in the config, so load it before the subscriber exists
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    oe_core::logging::init(&config.debug).context("failed to initialize logging")?;
    if let Some(e) = load_error {
        warn!("Using default configuration: {}", e);
    }

    info!("Starting Oxidized-Emotion frontend");

    config
        .paths
        .create_all()
        .context("failed to create user folders")?;

    let app = FrontendApp::new(config);
    for id in FolderId::ALL {
        info!("{:?} folder: {}", id, app.config().paths.resolve(id).display());
    }

    let resources = app.resource_cache();
    info!(
        "Resources at {} ({} manifest entries)",
        resources.root().display(),
        resources.manifest_names().len()
    );
    info!("Main window: {}", app.config().gui.main_window);

    Ok(())
}
