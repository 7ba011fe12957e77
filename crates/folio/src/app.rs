// File: src/app.rs
// Purpose: Start-up wiring: config → route table → navigator

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use folio_router::Router;
use tracing::info;

use crate::config::Config;
use crate::navigator::Navigator;
use crate::routes::build_router;
use crate::views::View;

/// The application after start-up
///
/// The route table is built once here and shared read-only afterwards.
pub struct App {
    pub config: Config,
    pub router: Arc<Router<View>>,
}

impl App {
    pub fn from_config(config: Config) -> Result<Self> {
        let router = build_router(&config.routing)?;
        info!(app = %config.app.name, routes = router.len(), "app initialized");

        Ok(Self {
            config,
            router: Arc::new(router),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(Config::load(path)?)
    }

    /// A navigator positioned at the configured initial path
    pub fn navigator(&self) -> Result<Navigator> {
        let initial = &self.config.app.initial_path;
        Navigator::new(Arc::clone(&self.router), initial)
            .with_context(|| format!("Initial path {:?} does not resolve", initial))
    }
}
