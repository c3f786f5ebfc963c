//! Token persistence
//!
//! Tokens are persisted as two plain strings under fixed keys. In the
//! browser this is localStorage; unit tests and the server side use an
//! in-memory map.

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "signdesk_access_token";

/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "signdesk_refresh_token";

/// Key-value storage for tokens.
///
/// Writes are best-effort: localStorage can be unavailable (private
/// browsing, disabled storage) and the session degrades to "not logged in"
/// rather than failing.
pub trait TokenStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// localStorage-backed token store
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(not(feature = "ssr"))]
impl TokenStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read(ACCESS_TOKEN_KEY), None);

        store.write(ACCESS_TOKEN_KEY, "abc");
        assert_eq!(store.read(ACCESS_TOKEN_KEY), Some("abc".to_string()));

        store.delete(ACCESS_TOKEN_KEY);
        assert_eq!(store.read(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        store.write(ACCESS_TOKEN_KEY, "access");
        store.write(REFRESH_TOKEN_KEY, "refresh");

        store.delete(ACCESS_TOKEN_KEY);
        assert_eq!(store.read(REFRESH_TOKEN_KEY), Some("refresh".to_string()));
    }
}
