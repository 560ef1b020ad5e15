use log::{info, warn};
use web_sys::window;

use crate::config;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`. Missing or blocked storage reads as empty.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("{:?}", e))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConsentStore<S> {
    storage: S,
    key: &'static str,
}

impl ConsentStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage, config::CONSENT_STORAGE_KEY)
    }
}

impl<S: KeyValueStore> ConsentStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    pub fn has_consented(&self) -> bool {
        self.storage.get(self.key).as_deref() == Some("true")
    }

    /// Never cleared afterwards. A failed write only costs the visitor a
    /// repeat banner next load.
    pub fn grant_consent(&self) {
        match self.storage.set(self.key, "true") {
            Ok(()) => info!("Cookie consent granted"),
            Err(e) => warn!("Could not persist cookie consent: {}", e),
        }
    }
}
