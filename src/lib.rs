//! Dungeon View (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, the
//! integration tests and the benchmarks can write `dungeon_view::engine::...`
//! while the implementation lives in dedicated crates under `crates/`.

pub mod config;
pub mod logging;

pub use dungeon_view_core as core;
pub use dungeon_view_engine as engine;
pub use dungeon_view_input as input;
pub use dungeon_view_term as term;
pub use dungeon_view_types as types;
