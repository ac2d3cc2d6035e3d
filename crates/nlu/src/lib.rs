//! Language detection, intent recognition and entity extraction
//!
//! The pure, in-memory NLU stage of the turn pipeline. Everything here is
//! table-driven and deterministic: no I/O, no randomness, no shared mutable
//! state. Construction compiles every pattern once; a malformed pattern is
//! logged and skipped so a single bad entry never takes a detector down.

pub mod entities;
pub mod intent;
pub mod language_detector;

pub use entities::EntityExtractor;
pub use intent::IntentRecognizer;
pub use language_detector::{LanguageDetector, LanguageSignal};
