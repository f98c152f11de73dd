pub mod session_store;

pub use session_store::{BrowserBackend, MemoryBackend, SessionBackend, SessionStore};
