//! Session store, response dispatch and the per-turn pipeline
//!
//! This crate owns the only mutable state of the system (the session store)
//! and composes the NLU components into the synchronous per-turn pipeline:
//! detect language → recognize intent → extract entities → dispatch →
//! personalize → record.

pub mod dispatch;
pub mod engine;
pub mod personality;
pub mod session;
pub mod templates;

pub use dispatch::ResponseDispatcher;
pub use engine::ChatEngine;
pub use personality::Personalizer;
pub use session::{Session, SessionStore};
