//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use recycle_core::{DomainError, DomainResult, KeyValueStore};
use wasm_bindgen::JsValue;

pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> DomainResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage is unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}
