// ============================================================================
// SESSION STORE - persisted auth token + username
// ============================================================================
// Two string entries in the browser's localStorage, written on login and
// cleared together on logout. The storage itself sits behind a small
// backend trait so auth-gated flows can be tested without a browser.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::window;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// localStorage-backed storage. Every accessor tolerates the storage being
/// unavailable (private browsing, detached window) by acting as empty.
pub struct BrowserBackend;

impl BrowserBackend {
    fn storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }
}

impl SessionBackend for BrowserBackend {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::error!("failed to persist {} to localStorage", key);
            }
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory backend for tests and headless use.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// The client's view of "who is logged in". No expiry is tracked locally;
/// an expired token is only discovered when a request comes back 401/403.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn browser() -> Self {
        Self::with_backend(Rc::new(BrowserBackend))
    }

    pub fn with_backend(backend: Rc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    pub fn set_session(&self, token: &str, username: &str) {
        self.backend.write(TOKEN_KEY, token);
        self.backend.write(USERNAME_KEY, username);
    }

    pub fn clear_session(&self) {
        self.backend.delete(TOKEN_KEY);
        self.backend.delete(USERNAME_KEY);
    }

    pub fn token(&self) -> Option<String> {
        self.backend.read(TOKEN_KEY)
    }

    pub fn username(&self) -> Option<String> {
        self.backend.read(USERNAME_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> SessionStore {
        SessionStore::with_backend(Rc::new(MemoryBackend::default()))
    }

    #[test]
    fn session_round_trip() {
        let store = memory_store();
        assert!(!store.is_authenticated());

        store.set_session("abc123", "ana");
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert_eq!(store.username().as_deref(), Some("ana"));
    }

    #[test]
    fn clear_removes_both_entries() {
        let store = memory_store();
        store.set_session("abc123", "ana");
        store.clear_session();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert_eq!(store.username(), None);
    }

    #[test]
    fn authentication_tracks_token_presence_only() {
        let backend = Rc::new(MemoryBackend::default());
        let store = SessionStore::with_backend(backend.clone());
        // A username without a token is not a session.
        backend.write("username", "ana");
        assert!(!store.is_authenticated());
    }
}
