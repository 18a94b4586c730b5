//! HTTP middleware stack for the web client.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions, in-memory store)

pub mod session;

pub use session::{SHELL_STATE_KEY, create_session_layer, load_shell_state, save_shell_state};
