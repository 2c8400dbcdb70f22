//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::PlayerAction`]s. Movement
//! is turn based, so there is no key-repeat handling: every press is one
//! action, and release events are ignored.

pub mod map;

pub use dungeon_view_types as types;

pub use map::{handle_key_event, should_quit};
