//! `localStorage` as a key-value store
//!
//! Missing storage (privacy mode, sandboxed iframe) reads as empty and
//! rejects writes.

use demo_pages_core::store::KeyValueStore;
use demo_pages_core::{PagesError, PagesResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn require() -> PagesResult<web_sys::Storage> {
        Self::local().ok_or_else(|| PagesError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> PagesError {
    PagesError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> PagesResult<Option<String>> {
        match Self::local() {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> PagesResult<()> {
        Self::require()?.set_item(key, value).map_err(js_error)
    }

    fn clear(&self) -> PagesResult<()> {
        Self::require()?.clear().map_err(js_error)
    }
}
