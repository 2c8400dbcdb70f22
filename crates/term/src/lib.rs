//! Terminal presentation for the dungeon view.
//!
//! The 3D view is rasterized with tiny-skia and composited into a plain
//! framebuffer of styled character cells, which is then flushed to the
//! terminal with crossterm. No widget toolkit is involved.
//!
//! - [`SkiaSurface`] is the concrete drawing surface the sweep paints on
//! - [`GameView`] lays out the view, its frame and the status panel
//! - [`TerminalRenderer`] owns the terminal and sends only what changed

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use dungeon_view_core as core;
pub use dungeon_view_engine as engine;
pub use dungeon_view_types as types;

pub use canvas::SkiaSurface;
pub use fb::{Cell, CellStyle, FrameBuffer, HALF_BLOCK};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
