//! HTTP server for the tourism assistant
//!
//! Exposes the per-turn conversation contract and session management over
//! REST, and runs the supervising idle-session sweeper.

pub mod http;
pub mod state;
pub mod sweeper;

pub use http::create_router;
pub use state::AppState;
pub use sweeper::start_sweeper;
