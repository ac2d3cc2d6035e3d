//! Core types for the tourism assistant engine
//!
//! This crate provides the foundational types used across all other crates:
//! - Language and script definitions
//! - Intent and entity classification types
//! - Tour guide personas
//! - Conversation turn records and the exposed turn contract
//! - Error types

pub mod conversation;
pub mod entity;
pub mod error;
pub mod guide;
pub mod intent;
pub mod language;

pub use conversation::{TurnRecord, TurnReply};
pub use entity::{Entity, EntityKind};
pub use error::{Error, Result};
pub use guide::{Guide, GuideId};
pub use intent::{IntentKind, RecognizedIntent, ScoredIntent};
pub use language::{Language, Script};
