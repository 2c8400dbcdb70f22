//! First-person view renderer for grid dungeons.
//!
//! The view is painted far to near onto any [`DrawSurface`]:
//! - [`visits`] enumerates the tiles of one depth band in drawing order
//! - the resolver ([`resolve_core`], [`resolve_front`], [`resolve_back`])
//!   decides which primitives stand for a tile
//! - [`draw_primitive`] strokes and fills their faces through a [`Pen`],
//!   which shifts each tile into its column and projects it with the
//!   [`Projector`]
//!
//! [`render_view`] runs the whole sweep.
//!
//! ```
//! use dungeon_view_core::{parse_map, PlayerState};
//! use dungeon_view_engine::{render_view, Projector, RecordingSurface, SweepOptions};
//! use dungeon_view_types::Facing;
//!
//! let map = parse_map("XXXXX\nX...X\nXXXXX\n").unwrap();
//! let player = PlayerState::new(1, 1, Facing::East);
//! let mut surface = RecordingSurface::new();
//! let stats = render_view(
//!     &mut surface,
//!     Projector::default(),
//!     &map,
//!     &player,
//!     &SweepOptions::default(),
//! );
//! assert!(stats.primitives > 0);
//! assert!(surface.fill_count() >= stats.primitives);
//! ```

pub mod palette;
pub mod pen;
pub mod primitives;
pub mod projector;
pub mod resolver;
pub mod surface;
pub mod sweep;

pub use dungeon_view_types as types;

pub use palette::{Material, Palette};
pub use pen::Pen;
pub use primitives::{draw_primitive, rung_heights, Face, LadderKind, Primitive, Side};
pub use projector::{Point3, Projector};
pub use resolver::{door_composite, resolve_back, resolve_core, resolve_front, Draw, Draws};
pub use surface::{DrawSurface, RecordingSurface, SurfaceOp};
pub use sweep::{plan_view, render_view, visits, Pass, PlannedDraw, SweepOptions, SweepStats, TileVisit};
