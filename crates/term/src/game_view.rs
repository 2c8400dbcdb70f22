//! GameView: maps a [`Session`] into a terminal framebuffer.
//!
//! The 3D view is rasterized into a square [`SkiaSurface`] of `S × S` pixels
//! and shown as `S` columns by `S / 2` rows of half-block cells, which keeps
//! pixels roughly square on a typical terminal font. A side panel to the right
//! shows the purse, the compass and the latest events.
//!
//! No I/O happens here, so it can be unit-tested.

use crate::canvas::SkiaSurface;
use crate::core::Session;
use crate::engine::{render_view, Projector, SweepOptions, SweepStats};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rgb, Tile};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns taken by the side panel, including the gap to the frame.
pub const PANEL_WIDTH: u16 = 34;

/// Smallest view, in pixels (= columns), worth drawing.
pub const MIN_VIEW: u16 = 16;

/// Largest view, in pixels; bigger terminals just get more margin.
pub const MAX_VIEW: u16 = 160;

const TOO_SMALL: &str = "Terminal too small";

/// Where things go on screen for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Side of the square view in pixels
    pub view: u16,
    /// Top-left corner of the border
    pub frame_x: u16,
    pub frame_y: u16,
    /// Left column of the side panel, if it fits
    pub panel_x: Option<u16>,
}

impl Layout {
    /// Fit the view (and, room permitting, the panel) into `viewport`.
    pub fn compute(viewport: Viewport) -> Option<Self> {
        let with_panel = view_side(viewport, PANEL_WIDTH);
        let (view, panel) = match with_panel {
            Some(view) => (view, PANEL_WIDTH),
            None => (view_side(viewport, 0)?, 0),
        };
        let frame_w = view + 2;
        let frame_h = view / 2 + 2;
        let frame_x = viewport.width.saturating_sub(frame_w + panel) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        Some(Self {
            view,
            frame_x,
            frame_y,
            panel_x: (panel > 0).then(|| frame_x + frame_w + 2),
        })
    }
}

fn view_side(viewport: Viewport, panel: u16) -> Option<u16> {
    let cols = viewport.width.checked_sub(2 + panel)?;
    let rows = viewport.height.checked_sub(2)?;
    let side = cols.min(rows.saturating_mul(2)).min(MAX_VIEW) & !1;
    (side >= MIN_VIEW).then_some(side)
}

/// Terminal renderer for a dungeon session.
pub struct GameView {
    options: SweepOptions,
    surface: Option<SkiaSurface>,
    last_stats: SweepStats,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(SweepOptions::default())
    }
}

impl GameView {
    pub fn new(options: SweepOptions) -> Self {
        Self {
            options,
            surface: None,
            last_stats: SweepStats::default(),
        }
    }

    pub fn options(&self) -> &SweepOptions {
        &self.options
    }

    /// Counters from the most recent sweep
    pub fn last_stats(&self) -> SweepStats {
        self.last_stats
    }

    /// Render the session into an existing framebuffer.
    ///
    /// The pixmap behind the 3D view is kept between frames and only
    /// reallocated when the view size changes.
    pub fn render_into(&mut self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let Some(layout) = Layout::compute(viewport) else {
            self.draw_too_small(fb, viewport);
            return;
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        let frame_w = layout.view + 2;
        let frame_h = layout.view / 2 + 2;
        fb.draw_frame(layout.frame_x, layout.frame_y, frame_w, frame_h, border);

        if let Some(surface) = self.draw_scene(session, layout.view) {
            fb.blit_half_blocks(
                layout.frame_x + 1,
                layout.frame_y + 1,
                layout.view,
                layout.view / 2,
                |x, y| surface.pixel(x, y),
            );
        }

        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, session, viewport, panel_x, layout.frame_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_scene(&mut self, session: &Session, side: u16) -> Option<&SkiaSurface> {
        let side = u32::from(side);
        let reuse = self
            .surface
            .as_ref()
            .is_some_and(|s| s.width() == side && s.height() == side);
        if !reuse {
            log::debug!("allocating {}x{} view surface", side, side);
            self.surface = SkiaSurface::new(side, side);
        }
        let surface = self.surface.as_mut()?;

        surface.clear(self.options.palette.background);
        let projector = Projector::new(side as f32, side as f32);
        self.last_stats = render_view(
            surface,
            projector,
            session.map(),
            session.player(),
            &self.options,
        );
        self.surface.as_ref()
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        let panel_w = viewport.width.saturating_sub(panel_x);
        if panel_w == 0 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        let gold = CellStyle::new(Rgb::new(240, 200, 80), Rgb::BLACK).bold();

        let player = session.player();
        let mut y = start_y;

        fb.put_str(panel_x, y, "GOLD", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &session.gold().to_string(), gold);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FACING", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, player.facing().as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "POS", label);
        y = y.saturating_add(1);
        let (px, py) = player.position();
        fb.put_str(panel_x, y, &format!("{}, {}", px, py), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CHESTS", label);
        y = y.saturating_add(1);
        let chests = session.map().count(|t| t == Tile::Chest);
        fb.put_str(panel_x, y, &chests.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LOG", label);
        y = y.saturating_add(1);
        let history = session.history();
        if history.is_empty() {
            fb.put_str(panel_x, y, "-", value.dim());
        }
        // Newest at the bottom; older lines are dimmed.
        let newest = history.len().saturating_sub(1);
        for (i, event) in history.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let style = if i == newest { value } else { value.dim() };
            fb.put_str_clipped(panel_x, y, &event.message(), panel_w, style);
            y = y.saturating_add(1);
        }
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let text_w = TOO_SMALL.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height / 2;
        fb.put_str(x, y, TOO_SMALL, style);
    }
}
