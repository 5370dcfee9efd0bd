//! Preference storage contract for small client-local values such as the active theme.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Durable string-valued key-value store. Values are stored exactly as given; interpreting
/// them is the caller's job.
pub trait PrefsStore {
    /// Reads the value under `key`. `Ok(None)` means nothing has been written yet.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Writes `value` under `key`, replacing what was there.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store for builds without durable storage: loads miss, writes are dropped.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Map-backed store. Clones share entries, so a test restarts the launcher by handing the same
/// store to a fresh runtime.
pub struct MemoryPrefsStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store holding `value` under `key`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Returns the stored value for `key` without going through the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
    }
}
