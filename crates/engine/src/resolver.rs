//! Tile Resolver
//!
//! Turns one tile, seen from a given hand, facing and depth, into the
//! primitives that represent it. Three passes run per tile:
//!
//! - **core**: the tile's side geometry and the furniture standing in it
//! - **front**: the face of the tile that points at the viewer
//! - **back**: the face of the tile that points away, one cell further in,
//!   which seals a wall cell whose near face is hidden by something else
//!
//! The resolver is pure: it only decides *what* to draw and *where in depth*.

use arrayvec::ArrayVec;

use crate::primitives::{LadderKind, Primitive, Side};
use crate::types::{Facing, Hand, Tile, CELL_SIZE};

/// A primitive with the depth of its near plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw {
    pub primitive: Primitive,
    pub distance: f32,
}

impl Draw {
    pub fn new(primitive: Primitive, distance: f32) -> Self {
        Self {
            primitive,
            distance,
        }
    }
}

pub type Draws = ArrayVec<Draw, 4>;

/// Side-wall sides visible from `hand`.
///
/// A tile off to the left shows its right face and vice versa; the tile dead
/// ahead shows both.
fn visible_sides(hand: Hand) -> &'static [Side] {
    match hand {
        Hand::Left => &[Side::Right],
        Hand::Right => &[Side::Left],
        Hand::Center => &[Side::Left, Side::Right],
    }
}

fn door_matches(tile: Tile, facing: Facing) -> bool {
    tile.door_axis() == Some(facing.axis())
}

/// Side geometry and furniture of a tile.
///
/// Furniture behind the eye plane (`distance < 0`) is not drawn.
pub fn resolve_core(tile: Tile, hand: Hand, facing: Facing, distance: f32) -> Draws {
    let mut draws = Draws::new();
    let furniture = |draws: &mut Draws, primitive| {
        if distance >= 0.0 {
            draws.push(Draw::new(primitive, distance));
        }
    };

    match tile {
        Tile::Wall => {
            for &side in visible_sides(hand) {
                draws.push(Draw::new(Primitive::SideWall(side), distance));
            }
        }
        Tile::VerticalDoor | Tile::HorizontalDoor => {
            let with_door = door_matches(tile, facing);
            for &side in visible_sides(hand) {
                draws.push(Draw::new(Primitive::SideWall(side), distance));
                if with_door {
                    draws.push(Draw::new(Primitive::SideDoor(side), distance));
                }
            }
        }
        Tile::Chest => furniture(&mut draws, Primitive::Chest),
        Tile::LadderUp => furniture(&mut draws, Primitive::Ladder(LadderKind::Up)),
        Tile::LadderDown => furniture(&mut draws, Primitive::Ladder(LadderKind::Down)),
        Tile::Floor | Tile::Other(_) => {}
    }
    draws
}

/// Near face of a tile, at `distance`; nothing behind the eye plane.
///
/// A wall cell shows a blank wall, a door cell its door face. Open tiles
/// and furniture have no face.
pub fn resolve_front(tile: Tile, facing: Facing, distance: f32) -> Draws {
    if distance < 0.0 {
        return Draws::new();
    }
    match tile {
        Tile::Wall => {
            let mut draws = Draws::new();
            draws.push(Draw::new(Primitive::FrontWall, distance));
            draws
        }
        Tile::VerticalDoor | Tile::HorizontalDoor => door_face(tile, facing, distance),
        _ => Draws::new(),
    }
}

/// Far face of a tile, one cell beyond `distance`.
///
/// Skipped when that face would be at or behind the eye plane.
pub fn resolve_back(tile: Tile, facing: Facing, distance: f32) -> Draws {
    let face = distance + CELL_SIZE;
    if face <= 0.0 {
        return Draws::new();
    }
    match tile {
        Tile::Wall => {
            let mut draws = Draws::new();
            draws.push(Draw::new(Primitive::FrontWall, face));
            draws
        }
        Tile::VerticalDoor | Tile::HorizontalDoor => door_face(tile, facing, face),
        _ => Draws::new(),
    }
}

/// Face-on view of a door tile: the door itself when it can be walked
/// through along `facing`, otherwise a blank wall.
fn door_face(tile: Tile, facing: Facing, distance: f32) -> Draws {
    if door_matches(tile, facing) {
        door_composite(distance)
    } else {
        let mut draws = Draws::new();
        draws.push(Draw::new(Primitive::FrontWall, distance));
        draws
    }
}

/// A door seen face-on.
///
/// Standing in the doorway (`distance == 0`) the door is open and only the
/// surrounding wall is drawn; further away it is a wall with a closed door on
/// it.
pub fn door_composite(distance: f32) -> Draws {
    let mut draws = Draws::new();
    if distance == 0.0 {
        draws.push(Draw::new(Primitive::OpenDoor, distance));
    } else {
        draws.push(Draw::new(Primitive::FrontWall, distance));
        draws.push(Draw::new(Primitive::FrontDoor, distance));
    }
    draws
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primitives(draws: &Draws) -> Vec<Primitive> {
        draws.iter().map(|d| d.primitive).collect()
    }

    #[test]
    fn wall_core_draws_the_sides_facing_the_line_of_sight() {
        let f = Facing::North;
        assert_eq!(
            primitives(&resolve_core(Tile::Wall, Hand::Left, f, 10.0)),
            vec![Primitive::SideWall(Side::Right)]
        );
        assert_eq!(
            primitives(&resolve_core(Tile::Wall, Hand::Right, f, 10.0)),
            vec![Primitive::SideWall(Side::Left)]
        );
        assert_eq!(
            primitives(&resolve_core(Tile::Wall, Hand::Center, f, 10.0)),
            vec![
                Primitive::SideWall(Side::Left),
                Primitive::SideWall(Side::Right)
            ]
        );
    }

    #[test]
    fn vertical_door_core_shows_door_only_along_east_west() {
        for facing in [Facing::East, Facing::West] {
            assert_eq!(
                primitives(&resolve_core(Tile::VerticalDoor, Hand::Left, facing, 20.0)),
                vec![
                    Primitive::SideWall(Side::Right),
                    Primitive::SideDoor(Side::Right)
                ]
            );
        }
        for facing in [Facing::North, Facing::South] {
            assert_eq!(
                primitives(&resolve_core(Tile::VerticalDoor, Hand::Left, facing, 20.0)),
                vec![Primitive::SideWall(Side::Right)]
            );
        }
    }

    #[test]
    fn horizontal_door_core_shows_door_only_along_north_south() {
        let draws = resolve_core(Tile::HorizontalDoor, Hand::Center, Facing::South, 0.0);
        assert_eq!(draws.len(), 4);
        let draws = resolve_core(Tile::HorizontalDoor, Hand::Center, Facing::East, 0.0);
        assert_eq!(draws.len(), 2);
    }

    #[test]
    fn furniture_ignores_hand() {
        for hand in [Hand::Left, Hand::Center, Hand::Right] {
            assert_eq!(
                primitives(&resolve_core(Tile::Chest, hand, Facing::East, 30.0)),
                vec![Primitive::Chest]
            );
            assert_eq!(
                primitives(&resolve_core(Tile::LadderUp, hand, Facing::East, 30.0)),
                vec![Primitive::Ladder(LadderKind::Up)]
            );
            assert_eq!(
                primitives(&resolve_core(Tile::LadderDown, hand, Facing::East, 30.0)),
                vec![Primitive::Ladder(LadderKind::Down)]
            );
        }
    }

    #[test]
    fn furniture_behind_the_eye_is_skipped() {
        assert!(resolve_core(Tile::Chest, Hand::Center, Facing::East, -10.0).is_empty());
        assert_eq!(
            resolve_core(Tile::Wall, Hand::Center, Facing::East, -10.0).len(),
            2
        );
    }

    #[test]
    fn floor_and_unknown_draw_nothing() {
        for tile in [Tile::Floor, Tile::Other('?')] {
            assert!(resolve_core(tile, Hand::Center, Facing::East, 10.0).is_empty());
            assert!(resolve_front(tile, Facing::East, 10.0).is_empty());
            assert!(resolve_back(tile, Facing::East, 10.0).is_empty());
        }
    }

    #[test]
    fn front_pass() {
        assert_eq!(
            resolve_front(Tile::Wall, Facing::East, 10.0).as_slice(),
            &[Draw::new(Primitive::FrontWall, 10.0)]
        );
        assert!(resolve_front(Tile::Wall, Facing::East, -10.0).is_empty());
        assert!(resolve_front(Tile::Chest, Facing::East, 10.0).is_empty());
        assert_eq!(
            primitives(&resolve_front(Tile::VerticalDoor, Facing::East, 10.0)),
            vec![Primitive::FrontWall, Primitive::FrontDoor]
        );
        assert_eq!(
            primitives(&resolve_front(Tile::VerticalDoor, Facing::North, 10.0)),
            vec![Primitive::FrontWall]
        );
        assert_eq!(
            primitives(&resolve_front(Tile::HorizontalDoor, Facing::North, 0.0)),
            vec![Primitive::OpenDoor]
        );
        assert!(resolve_front(Tile::VerticalDoor, Facing::East, -10.0).is_empty());
    }

    #[test]
    fn back_pass_draws_one_cell_further() {
        let draws = resolve_back(Tile::Wall, Facing::East, 20.0);
        assert_eq!(draws.as_slice(), &[Draw::new(Primitive::FrontWall, 30.0)]);

        let draws = resolve_back(Tile::HorizontalDoor, Facing::South, 20.0);
        assert_eq!(
            draws.as_slice(),
            &[
                Draw::new(Primitive::FrontWall, 30.0),
                Draw::new(Primitive::FrontDoor, 30.0)
            ]
        );

        assert!(resolve_back(Tile::Wall, Facing::East, -10.0).is_empty());
        assert!(resolve_back(Tile::Chest, Facing::East, 0.0).is_empty());
    }

    #[test]
    fn door_composite_opens_only_at_zero_distance() {
        assert_eq!(
            door_composite(0.0).as_slice(),
            &[Draw::new(Primitive::OpenDoor, 0.0)]
        );
        assert_eq!(door_composite(10.0).len(), 2);
    }
}
