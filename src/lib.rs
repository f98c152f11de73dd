// ============================================================================
// FEIRA MARKET - BROWSER CLIENT
// ============================================================================
// Yew (CSR) frontend for the Feira Market REST backend:
// - components: function components that render DOM
// - hooks: per-view controllers (state + callbacks)
// - services: HTTP calls through one authenticated client
// - stores: persisted session (token + username)
// - state: pure state machines (pagination, delete confirmation)
// - models: structures shared with the backend
// ============================================================================

pub mod components;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
