//! Sweep Engine
//!
//! Paints the first-person view with the painter's algorithm:
//! - depth bands run from `view_depth` cells ahead down to `rear_depth`
//!   cells behind the player
//! - inside a band, tiles are visited from the outermost left tile inwards,
//!   then from the outermost right tile inwards, so the tile dead ahead is
//!   always painted last
//! - every band runs the back, core and front resolver passes in that order
//!
//! A band whose row (or column) lies off the map is skipped entirely, as are
//! single tiles that fall outside it.

use dungeon_view_core::{PlayerState, TileMap};

use crate::palette::Palette;
use crate::pen::Pen;
use crate::primitives::draw_primitive;
use crate::projector::Projector;
use crate::resolver::{resolve_back, resolve_core, resolve_front, Draw};
use crate::surface::DrawSurface;
use crate::types::{Axis, Hand, CELL_SIZE, REAR_DEPTH, VIEW_DEPTH};

/// One tile position in a depth band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileVisit {
    pub hand: Hand,
    /// Signed offset from the line of sight, negative to the left
    pub lateral: i32,
    pub x: i32,
    pub y: i32,
    /// Cells ahead of the player, negative behind
    pub steps: i32,
}

impl TileVisit {
    /// Depth of the tile's near face
    pub fn distance(&self) -> f32 {
        self.steps as f32 * CELL_SIZE
    }

    /// Lateral shift of the tile's local frame
    pub fn bias(&self) -> f32 {
        self.lateral as f32 * CELL_SIZE
    }
}

/// Whether the band `steps` cells ahead lies on the map at all.
fn band_on_map(map: &TileMap, player: &PlayerState, steps: i32) -> bool {
    let (fx, fy) = player.facing().forward();
    let x = player.x() + fx * steps;
    let y = player.y() + fy * steps;
    match player.facing().axis() {
        Axis::EastWest => x >= 0 && (x as usize) < map.width(),
        Axis::NorthSouth => y >= 0 && (y as usize) < map.height(),
    }
}

/// Tiles of one depth band in drawing order.
///
/// The band `steps` cells ahead is `2 * steps + 3` tiles wide, which keeps the
/// side walls of the widest visible corridor inside the sweep.
///
/// # Examples
///
/// ```
/// use dungeon_view_core::{parse_map, PlayerState};
/// use dungeon_view_engine::visits;
/// use dungeon_view_types::Facing;
///
/// let map = parse_map("......\n......\n......\n").unwrap();
/// let player = PlayerState::new(2, 1, Facing::East);
/// let laterals: Vec<i32> = visits(&map, &player, 0).map(|v| v.lateral).collect();
/// assert_eq!(laterals, vec![-1, 1, 0]);
/// ```
pub fn visits<'a>(
    map: &'a TileMap,
    player: &PlayerState,
    steps: i32,
) -> impl Iterator<Item = TileVisit> + 'a {
    let (fx, fy) = player.facing().forward();
    let (rx, ry) = player.facing().right();
    let cx = player.x() + fx * steps;
    let cy = player.y() + fy * steps;
    let reach = if band_on_map(map, player, steps) {
        steps + 1
    } else {
        -1
    };

    (-reach..0)
        .chain((0..=reach).rev())
        .map(move |lateral| TileVisit {
            hand: Hand::from_offset(lateral),
            lateral,
            x: cx + rx * lateral,
            y: cy + ry * lateral,
            steps,
        })
        .filter(move |v| map.in_bounds(v.x, v.y))
}

/// How far and how the sweep looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepOptions {
    /// Farthest band, in cells ahead of the player
    pub view_depth: i32,
    /// Bands drawn behind the player
    pub rear_depth: i32,
    /// Run the back pass that seals wall cells from behind
    pub rear_closure: bool,
    pub palette: Palette,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            view_depth: VIEW_DEPTH,
            rear_depth: REAR_DEPTH,
            rear_closure: true,
            palette: Palette::default(),
        }
    }
}

/// Resolver pass a draw came from, in painting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pass {
    Back,
    Core,
    Front,
}

/// One primitive scheduled for a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedDraw {
    pub pass: Pass,
    pub visit: TileVisit,
    pub draw: Draw,
}

/// Counters from one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Depth bands that had at least one tile on the map
    pub bands: usize,
    /// Distinct tile visits
    pub tiles: usize,
    pub primitives: usize,
}

/// Every primitive of the view, in painting order.
pub fn plan_view(
    map: &TileMap,
    player: &PlayerState,
    options: &SweepOptions,
) -> (Vec<PlannedDraw>, SweepStats) {
    let facing = player.facing();
    let mut plan = Vec::new();
    let mut stats = SweepStats::default();

    for steps in (-options.rear_depth..=options.view_depth).rev() {
        let band: Vec<TileVisit> = visits(map, player, steps).collect();
        if band.is_empty() {
            continue;
        }
        stats.bands += 1;
        stats.tiles += band.len();

        let passes: &[Pass] = if options.rear_closure {
            &[Pass::Back, Pass::Core, Pass::Front]
        } else {
            &[Pass::Core, Pass::Front]
        };
        for &pass in passes {
            for visit in &band {
                let tile = map.tile(visit.x, visit.y);
                let distance = visit.distance();
                let draws = match pass {
                    Pass::Back => resolve_back(tile, facing, distance),
                    Pass::Core => resolve_core(tile, visit.hand, facing, distance),
                    Pass::Front => resolve_front(tile, facing, distance),
                };
                plan.extend(draws.into_iter().map(|draw| PlannedDraw {
                    pass,
                    visit: *visit,
                    draw,
                }));
            }
        }
    }

    stats.primitives = plan.len();
    (plan, stats)
}

/// Paint the view from `player` onto `surface`.
///
/// The surface is expected to be cleared by the caller; only primitives are
/// drawn here.
pub fn render_view<S: DrawSurface + ?Sized>(
    surface: &mut S,
    projector: Projector,
    map: &TileMap,
    player: &PlayerState,
    options: &SweepOptions,
) -> SweepStats {
    let (plan, stats) = plan_view(map, player, options);
    let mut pen = Pen::new(surface, projector);
    for item in &plan {
        pen.set_bias(item.visit.bias());
        draw_primitive(
            &mut pen,
            &options.palette,
            item.draw.primitive,
            item.draw.distance,
        );
    }
    log::debug!(
        "sweep from {:?} facing {}: {} bands, {} tiles, {} primitives",
        player.position(),
        player.facing().as_str(),
        stats.bands,
        stats.tiles,
        stats.primitives
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Primitive, Side};
    use crate::surface::RecordingSurface;
    use crate::types::Facing;
    use dungeon_view_core::parse_map;

    fn open_map(width: usize, height: usize) -> TileMap {
        TileMap::new(width, height)
    }

    #[test]
    fn band_order_is_left_inwards_then_right_inwards() {
        let map = open_map(20, 20);
        let player = PlayerState::new(10, 10, Facing::North);
        let laterals: Vec<i32> = visits(&map, &player, 2).map(|v| v.lateral).collect();
        assert_eq!(laterals, vec![-3, -2, -1, 3, 2, 1, 0]);
        let hands: Vec<Hand> = visits(&map, &player, 0).map(|v| v.hand).collect();
        assert_eq!(hands, vec![Hand::Left, Hand::Right, Hand::Center]);
    }

    #[test]
    fn lateral_axis_follows_facing() {
        let map = open_map(20, 20);
        for (facing, right) in [
            (Facing::North, (1, 0)),
            (Facing::East, (0, 1)),
            (Facing::South, (-1, 0)),
            (Facing::West, (0, -1)),
        ] {
            let player = PlayerState::new(10, 10, facing);
            let (fx, fy) = facing.forward();
            for v in visits(&map, &player, 3) {
                assert_eq!(
                    (v.x, v.y),
                    (10 + 3 * fx + v.lateral * right.0, 10 + 3 * fy + v.lateral * right.1),
                    "{:?}",
                    facing
                );
            }
        }
    }

    #[test]
    fn off_map_band_is_skipped() {
        let map = open_map(5, 5);
        let player = PlayerState::new(3, 2, Facing::East);
        assert_eq!(visits(&map, &player, 1).count(), 5);
        // x = 5 is one past the right edge
        assert_eq!(visits(&map, &player, 2).count(), 0);
        assert_eq!(visits(&map, &player, 9).count(), 0);
    }

    #[test]
    fn off_map_tiles_are_dropped_from_the_band() {
        let map = open_map(5, 3);
        let player = PlayerState::new(1, 1, Facing::East);
        let band: Vec<TileVisit> = visits(&map, &player, 3).collect();
        // 9 laterals, only y in 0..3 survive
        assert_eq!(band.len(), 3);
        assert!(band.iter().all(|v| map.in_bounds(v.x, v.y)));
    }

    #[test]
    fn distance_and_bias_scale_by_cell_size() {
        let v = TileVisit {
            hand: Hand::Left,
            lateral: -2,
            x: 0,
            y: 0,
            steps: 4,
        };
        assert_eq!(v.distance(), 40.0);
        assert_eq!(v.bias(), -20.0);
    }

    #[test]
    fn bands_go_far_to_near_with_back_core_front_inside() {
        let map = parse_map("XXXXXXXX\nX......X\nXXXXXXXX\n").unwrap();
        let player = PlayerState::new(1, 1, Facing::East);
        let (plan, stats) = plan_view(&map, &player, &SweepOptions::default());
        assert!(stats.primitives > 0);
        assert_eq!(stats.primitives, plan.len());

        for pair in plan.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.visit.steps >= b.visit.steps);
            if a.visit.steps == b.visit.steps {
                assert!(a.pass <= b.pass, "{:?} before {:?}", a, b);
            }
        }
    }

    #[test]
    fn corridor_walls_and_end_wall() {
        let map = parse_map("XXXXX\nX...X\nXXXXX\n").unwrap();
        let player = PlayerState::new(1, 1, Facing::East);
        let (plan, _) = plan_view(&map, &player, &SweepOptions::default());

        // The corridor's left wall (north side) is seen from its right face.
        assert!(plan.iter().any(|p| p.pass == Pass::Core
            && p.visit.lateral == -1
            && p.draw.primitive == Primitive::SideWall(Side::Right)));
        // The end wall at x = 4 shows its near face, three cells ahead.
        assert!(plan.iter().any(|p| p.pass == Pass::Front
            && p.visit.lateral == 0
            && p.draw == Draw::new(Primitive::FrontWall, 30.0)));
    }

    #[test]
    fn wall_one_cell_ahead_faces_the_player() {
        let map = parse_map("XXXXX\nX.XXX\nXXXXX\n").unwrap();
        let player = PlayerState::new(1, 1, Facing::East);

        for rear_closure in [true, false] {
            let options = SweepOptions {
                rear_closure,
                ..SweepOptions::default()
            };
            let (plan, _) = plan_view(&map, &player, &options);
            let ahead: Vec<Draw> = plan
                .iter()
                .filter(|p| p.visit.steps == 1 && p.visit.lateral == 0 && p.pass == Pass::Front)
                .map(|p| p.draw)
                .collect();
            assert_eq!(ahead, vec![Draw::new(Primitive::FrontWall, 10.0)]);
        }
    }

    #[test]
    fn rear_closure_can_be_turned_off() {
        let map = parse_map("XXXXX\nX...X\nXXXXX\n").unwrap();
        let player = PlayerState::new(1, 1, Facing::East);
        let options = SweepOptions {
            rear_closure: false,
            ..SweepOptions::default()
        };
        let (plan, _) = plan_view(&map, &player, &options);
        assert!(plan.iter().all(|p| p.pass != Pass::Back));
    }

    #[test]
    fn render_view_draws_every_planned_face() {
        let map = parse_map("XXXXX\nX.T.X\nXXXXX\n").unwrap();
        let player = PlayerState::new(1, 1, Facing::East);
        let mut surface = RecordingSurface::new();
        let stats = render_view(
            &mut surface,
            Projector::default(),
            &map,
            &player,
            &SweepOptions::default(),
        );
        assert!(stats.primitives > 0);
        // The chest alone contributes six filled faces.
        assert!(surface.fill_count() >= stats.primitives + 5);
    }
}
