//! `localStorage`-backed preference store.
//!
//! The browser API is synchronous; the [`PrefsStore`] impl wraps it in ready futures.

use launcher_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Preference store backed by `window.localStorage` inside the webview.
pub struct WebPrefsStore;

impl WebPrefsStore {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage unavailable".to_string())
    }

    /// Reads the string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the read throws.
    pub fn load_value(self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|e| format!("localStorage get_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    /// Writes `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails (quota, privacy mode).
    pub fn save_value(self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { store.load_value(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_value(key, value) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_store_is_an_empty_sink() {
        let store_obj: &dyn PrefsStore = &WebPrefsStore;

        assert_eq!(
            block_on(store_obj.load_pref("launcher.theme.v1")).expect("load"),
            None
        );
        block_on(store_obj.save_pref("launcher.theme.v1", "ocean")).expect("save");
    }
}
