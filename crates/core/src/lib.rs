//! Core dungeon logic - pure, deterministic, and testable
//!
//! This crate holds the dungeon state and the rules that change it.
//! It has **no dependencies** on drawing, terminals, or input devices, making it:
//!
//! - **Deterministic**: The same seed and actions always find the same gold
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Usable by any front end (terminal, window, headless)
//!
//! # Module Structure
//!
//! - [`tile_map`]: Fixed-size tile grid, reads outside the grid are walls
//! - [`map_loader`]: Text map parsing with strict row and line-ending checks
//! - [`player`]: Position and facing, wall-checked steps
//! - [`session`]: Map + player + purse, dirty flag and session events
//! - [`rng`]: Seeded LCG for treasure rolls
//!
//! # Example
//!
//! ```
//! use dungeon_view_core::{parse_map, Session};
//! use dungeon_view_types::{Facing, PlayerAction};
//!
//! let map = parse_map("XXXXX\nX..TX\nXXXXX\n").unwrap();
//! let mut session = Session::new(map, 7).with_start(1, 1, Facing::East);
//!
//! assert!(session.apply_action(PlayerAction::MoveForward));
//! assert!(session.apply_action(PlayerAction::MoveForward));
//! assert!(!session.apply_action(PlayerAction::MoveForward)); // wall ahead
//! assert!(session.apply_action(PlayerAction::PickUp));
//! assert!(session.gold() >= 1);
//! ```

pub mod map_loader;
pub mod player;
pub mod rng;
pub mod session;
pub mod tile_map;

pub use dungeon_view_types as types;

// Re-export commonly used types for convenience
pub use map_loader::{load_map_from_path, parse_map, MapLoadError};
pub use player::{PlayerState, Step};
pub use rng::SimpleRng;
pub use session::{Session, SessionEvent};
pub use tile_map::TileMap;
