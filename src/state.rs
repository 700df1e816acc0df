//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickLedger, ShortcodeRegistry};
use crate::config::Config;
use crate::infrastructure::geo::IpLocator;
use crate::infrastructure::logging::EventLogger;
use crate::infrastructure::persistence::MemoryStore;

/// Registry backed by the in-memory store.
pub type Registry = ShortcodeRegistry<MemoryStore, MemoryStore>;

/// Ledger backed by the in-memory store.
pub type Ledger = ClickLedger<MemoryStore>;

/// Handles to the store, services and collaborators.
///
/// Cloning is cheap; every field is reference-counted or small. The registry
/// and the ledger share one [`MemoryStore`].
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub ledger: Arc<Ledger>,
    pub store: Arc<MemoryStore>,
    pub locator: Arc<dyn IpLocator>,
    pub logger: Arc<dyn EventLogger>,
    /// Prefix for generated short links.
    pub base_url: String,
    /// Trust `X-Forwarded-For` / `X-Real-IP` for click attribution.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires the services over `store` using the settings in `config`.
    pub fn new(
        store: Arc<MemoryStore>,
        locator: Arc<dyn IpLocator>,
        logger: Arc<dyn EventLogger>,
        config: &Config,
    ) -> Self {
        let registry = ShortcodeRegistry::new(store.clone(), store.clone())
            .with_default_validity(config.default_validity_minutes);
        let ledger = ClickLedger::new(store.clone());

        Self {
            registry: Arc::new(registry),
            ledger: Arc::new(ledger),
            store,
            locator,
            logger,
            base_url: config.base_url.clone(),
            behind_proxy: config.behind_proxy,
        }
    }
}
