//! Primitive Drawer
//!
//! Every primitive lives in the local frame of one cell:
//! - `x` runs 0..10 from the cell's left edge to its right edge
//! - `y` runs 0..10 from floor to ceiling
//! - `z` is the depth of the cell's near face plus offsets inside the cell
//!
//! A primitive is a list of flat faces. Each face is a closed vertex loop with
//! a material; drawing strokes the loop in the material's outline color and
//! fills it with the fill color.

use arrayvec::ArrayVec;

use crate::palette::{Material, Palette};
use crate::pen::Pen;
use crate::projector::Point3;
use crate::surface::DrawSurface;
use crate::types::{
    CELL_SIZE, CHEST_DEPTH, CHEST_HEIGHT, CHEST_WIDTH, DOOR_HEIGHT, DOOR_WIDTH,
    LADDER_DOWN_TOP, LADDER_RAIL_THICKNESS, LADDER_RUNG_SPACING, LADDER_RUNG_THICKNESS,
    LADDER_UP_BOTTOM, LADDER_WIDTH, VANISHING_POINT,
};

/// Most faces one primitive can produce
pub const MAX_FACES: usize = 8;

/// Most vertices in one face loop
pub const MAX_VERTICES: usize = 8;

/// Slack used when deciding whether a rung still fits inside a ladder run.
const RUNG_EPSILON: f32 = 1e-3;

/// Which wall of the cell a side primitive sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// `x = 0`
    Left,
    /// `x = 10`
    Right,
}

impl Side {
    fn x(self) -> f32 {
        match self {
            Side::Left => 0.0,
            Side::Right => CELL_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LadderKind {
    /// Hangs from the ceiling
    Up,
    /// Rises from the floor
    Down,
}

/// Drawable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Full cell-sized quad facing the viewer.
    FrontWall,
    /// Full-depth quad on one side of the cell.
    SideWall(Side),
    /// Door-sized quad centered on a front wall.
    FrontDoor,
    /// Door-sized quad centered in depth on a side wall.
    SideDoor(Side),
    /// Front wall with the door opening cut out of it.
    OpenDoor,
    /// Box resting on the floor in the middle of the cell.
    Chest,
    /// Two rails plus rungs in the middle plane of the cell.
    Ladder(LadderKind),
}

/// One closed vertex loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub material: Material,
    pub vertices: ArrayVec<Point3, MAX_VERTICES>,
}

impl Face {
    fn new(material: Material, vertices: &[Point3]) -> Self {
        Self {
            material,
            vertices: vertices.iter().copied().take(MAX_VERTICES).collect(),
        }
    }
}

type Faces = ArrayVec<Face, MAX_FACES>;

impl Primitive {
    /// Faces of this primitive with its near plane at `distance`, in the
    /// order they must be painted.
    ///
    /// `bias` is the lateral offset the cell is drawn at; it only matters for
    /// shapes whose visible sides depend on where the viewer stands.
    pub fn faces(self, distance: f32, bias: f32) -> Faces {
        let mut faces = Faces::new();
        match self {
            Primitive::FrontWall => faces.push(front_quad(
                Material::Wall,
                0.0,
                CELL_SIZE,
                0.0,
                CELL_SIZE,
                distance,
            )),
            Primitive::SideWall(side) => faces.push(side_quad(
                Material::Wall,
                side.x(),
                0.0,
                CELL_SIZE,
                distance,
                distance + CELL_SIZE,
            )),
            Primitive::FrontDoor => {
                let (x0, x1) = door_span();
                faces.push(front_quad(Material::Door, x0, x1, 0.0, DOOR_HEIGHT, distance));
            }
            Primitive::SideDoor(side) => {
                let (z0, z1) = door_span();
                faces.push(side_quad(
                    Material::Door,
                    side.x(),
                    0.0,
                    DOOR_HEIGHT,
                    distance + z0,
                    distance + z1,
                ));
            }
            Primitive::OpenDoor => faces.push(open_door(distance)),
            Primitive::Chest => chest(&mut faces, distance, bias),
            Primitive::Ladder(kind) => ladder(&mut faces, kind, distance),
        }
        faces
    }
}

/// Near and far edge of a door centered in one cell dimension
fn door_span() -> (f32, f32) {
    let start = (CELL_SIZE - DOOR_WIDTH) / 2.0;
    (start, start + DOOR_WIDTH)
}

fn front_quad(material: Material, x0: f32, x1: f32, y0: f32, y1: f32, z: f32) -> Face {
    Face::new(
        material,
        &[
            Point3::new(x0, y0, z),
            Point3::new(x1, y0, z),
            Point3::new(x1, y1, z),
            Point3::new(x0, y1, z),
        ],
    )
}

fn side_quad(material: Material, x: f32, y0: f32, y1: f32, z0: f32, z1: f32) -> Face {
    Face::new(
        material,
        &[
            Point3::new(x, y0, z0),
            Point3::new(x, y0, z1),
            Point3::new(x, y1, z1),
            Point3::new(x, y1, z0),
        ],
    )
}

fn level_quad(material: Material, x0: f32, x1: f32, y: f32, z0: f32, z1: f32) -> Face {
    Face::new(
        material,
        &[
            Point3::new(x0, y, z0),
            Point3::new(x1, y, z0),
            Point3::new(x1, y, z1),
            Point3::new(x0, y, z1),
        ],
    )
}

/// Wall outline with a notch where the door stands open
fn open_door(z: f32) -> Face {
    let (x0, x1) = door_span();
    Face::new(
        Material::Wall,
        &[
            Point3::new(0.0, 0.0, z),
            Point3::new(x0, 0.0, z),
            Point3::new(x0, DOOR_HEIGHT, z),
            Point3::new(x1, DOOR_HEIGHT, z),
            Point3::new(x1, 0.0, z),
            Point3::new(CELL_SIZE, 0.0, z),
            Point3::new(CELL_SIZE, CELL_SIZE, z),
            Point3::new(0.0, CELL_SIZE, z),
        ],
    )
}

fn chest(faces: &mut Faces, distance: f32, bias: f32) {
    let width = CHEST_WIDTH * CELL_SIZE;
    let height = CHEST_HEIGHT * CELL_SIZE;
    let depth = CHEST_DEPTH * CELL_SIZE;
    let x0 = (CELL_SIZE - width) / 2.0;
    let x1 = x0 + width;
    let z0 = distance + (CELL_SIZE - depth) / 2.0;
    let z1 = z0 + depth;

    let left = side_quad(Material::Chest, x0, 0.0, height, z0, z1);
    let right = side_quad(Material::Chest, x1, 0.0, height, z0, z1);
    // The eye sits on the vanishing line; a side faces it only when the box
    // is entirely off to the other side.
    let left_visible = VANISHING_POINT < bias + x0;

    faces.push(front_quad(Material::Chest, x0, x1, 0.0, height, z1));
    faces.push(level_quad(Material::Chest, x0, x1, 0.0, z0, z1));
    if left_visible {
        faces.push(right);
        faces.push(left);
    } else {
        faces.push(left);
        faces.push(right);
    }
    faces.push(level_quad(Material::Chest, x0, x1, height, z0, z1));
    faces.push(front_quad(Material::Chest, x0, x1, 0.0, height, z0));
}

fn ladder(faces: &mut Faces, kind: LadderKind, distance: f32) {
    let z = distance + CELL_SIZE / 2.0;
    let (bottom, top, anchor, far) = match kind {
        LadderKind::Down => (0.0, LADDER_DOWN_TOP, 0.0, LADDER_DOWN_TOP),
        LadderKind::Up => (LADDER_UP_BOTTOM, CELL_SIZE, CELL_SIZE, LADDER_UP_BOTTOM),
    };
    let left = (CELL_SIZE - LADDER_WIDTH) / 2.0;
    let right = left + LADDER_WIDTH;
    let half_rail = LADDER_RAIL_THICKNESS / 2.0;
    let half_rung = LADDER_RUNG_THICKNESS / 2.0;

    for rail in [left, right] {
        faces.push(front_quad(
            Material::Ladder,
            rail - half_rail,
            rail + half_rail,
            bottom,
            top,
            z,
        ));
    }
    let room = faces.remaining_capacity();
    for y in rung_heights(anchor, far, LADDER_RUNG_SPACING).take(room) {
        faces.push(front_quad(
            Material::Ladder,
            left,
            right,
            y - half_rung,
            y + half_rung,
            z,
        ));
    }
}

/// Heights of the rungs on a ladder running from `anchor` to `far`.
///
/// Rungs sit at `anchor ± k·spacing` for `k = 1, 2, ...` while strictly inside
/// the run. The pattern is flush with the anchor end; any remainder is left at
/// the far end, and a rung never lands exactly on it.
///
/// # Examples
///
/// ```
/// use dungeon_view_engine::rung_heights;
///
/// let down: Vec<f32> = rung_heights(0.0, 7.0, 1.5).collect();
/// assert_eq!(down, vec![1.5, 3.0, 4.5, 6.0]);
///
/// let up: Vec<f32> = rung_heights(10.0, 3.0, 1.5).collect();
/// assert_eq!(up, vec![8.5, 7.0, 5.5, 4.0]);
/// ```
pub fn rung_heights(anchor: f32, far: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let run = (far - anchor).abs();
    let dir = if far >= anchor { 1.0 } else { -1.0 };
    let count = if spacing > 0.0 && run > RUNG_EPSILON {
        ((run - RUNG_EPSILON) / spacing).floor().max(0.0) as usize
    } else {
        0
    };
    (1..=count).map(move |k| anchor + dir * k as f32 * spacing)
}

/// Stroke and fill every face of `primitive` through the pen.
pub fn draw_primitive<S: DrawSurface + ?Sized>(
    pen: &mut Pen<'_, S>,
    palette: &Palette,
    primitive: Primitive,
    distance: f32,
) {
    log::trace!(
        "{:?} at distance {} bias {}",
        primitive,
        distance,
        pen.bias()
    );
    for face in primitive.faces(distance, pen.bias()) {
        let (outline, fill) = palette.colors(face.material);
        pen.polygon(&face.vertices, outline, fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::Projector;
    use crate::surface::RecordingSurface;

    fn xs(face: &Face) -> Vec<f32> {
        face.vertices.iter().map(|v| v.x).collect()
    }

    fn zs(face: &Face) -> Vec<f32> {
        face.vertices.iter().map(|v| v.z).collect()
    }

    #[test]
    fn side_walls_span_one_cell_of_depth() {
        let left = Primitive::SideWall(Side::Left).faces(20.0, 0.0);
        assert_eq!(left.len(), 1);
        assert!(xs(&left[0]).iter().all(|&x| x == 0.0));
        assert_eq!(zs(&left[0]), vec![20.0, 30.0, 30.0, 20.0]);

        let right = Primitive::SideWall(Side::Right).faces(20.0, 0.0);
        assert!(xs(&right[0]).iter().all(|&x| x == CELL_SIZE));
    }

    #[test]
    fn front_door_is_centered() {
        let faces = Primitive::FrontDoor.faces(10.0, 0.0);
        assert_eq!(faces[0].material, Material::Door);
        assert_eq!(xs(&faces[0]), vec![2.5, 7.5, 7.5, 2.5]);
        let top = faces[0].vertices.iter().map(|v| v.y).fold(0.0, f32::max);
        assert_eq!(top, DOOR_HEIGHT);
    }

    #[test]
    fn side_door_is_centered_in_depth() {
        let faces = Primitive::SideDoor(Side::Left).faces(10.0, 0.0);
        assert_eq!(zs(&faces[0]), vec![12.5, 17.5, 17.5, 12.5]);
    }

    #[test]
    fn open_door_outline() {
        let faces = Primitive::OpenDoor.faces(0.0, 0.0);
        let outline: Vec<(f32, f32)> = faces[0].vertices.iter().map(|v| (v.x, v.y)).collect();
        assert_eq!(
            outline,
            vec![
                (0.0, 0.0),
                (2.5, 0.0),
                (2.5, 7.0),
                (7.5, 7.0),
                (7.5, 0.0),
                (10.0, 0.0),
                (10.0, 10.0),
                (0.0, 10.0),
            ]
        );
    }

    #[test]
    fn chest_has_six_faces_and_front_last() {
        let faces = Primitive::Chest.faces(0.0, 0.0);
        assert_eq!(faces.len(), 6);
        let front = faces.last().unwrap();
        let z0 = zs(front)[0];
        assert!(zs(front).iter().all(|&z| z == z0));
        assert!(faces.iter().flat_map(|f| f.vertices.iter()).all(|v| v.z >= z0));
    }

    #[test]
    fn chest_paints_the_visible_side_after_the_hidden_one() {
        // Off to the right the left side faces the viewer.
        let near = |face: &Face, x: f32| (face.vertices[0].x - x).abs() < 1e-4;
        let faces = Primitive::Chest.faces(10.0, CELL_SIZE);
        assert!(near(&faces[2], 8.0));
        assert!(near(&faces[3], 2.0));

        let faces = Primitive::Chest.faces(10.0, -CELL_SIZE);
        assert!(near(&faces[2], 2.0));
        assert!(near(&faces[3], 8.0));
    }

    #[test]
    fn rungs_are_anchored_to_the_floor_or_ceiling() {
        let down: Vec<f32> = rung_heights(0.0, 7.0, 1.5).collect();
        assert_eq!(down, vec![1.5, 3.0, 4.5, 6.0]);
        let up: Vec<f32> = rung_heights(10.0, 3.0, 1.5).collect();
        assert_eq!(up, vec![8.5, 7.0, 5.5, 4.0]);
    }

    #[test]
    fn no_rung_on_the_far_end_at_exact_multiples() {
        let rungs: Vec<f32> = rung_heights(0.0, 6.0, 1.5).collect();
        assert_eq!(rungs, vec![1.5, 3.0, 4.5]);
        assert_eq!(rung_heights(0.0, 1.0, 1.5).count(), 0);
        assert_eq!(rung_heights(0.0, 5.0, 0.0).count(), 0);
    }

    #[test]
    fn ladders_are_rails_plus_rungs() {
        for kind in [LadderKind::Up, LadderKind::Down] {
            let faces = Primitive::Ladder(kind).faces(0.0, 0.0);
            assert_eq!(faces.len(), 6, "{:?}", kind);
            assert!(faces.iter().all(|f| f.material == Material::Ladder));
            assert!(zs(&faces[0]).iter().all(|&z| z == CELL_SIZE / 2.0));
        }
    }

    #[test]
    fn draw_primitive_fills_once_per_face() {
        let mut surface = RecordingSurface::new();
        let mut pen = Pen::new(&mut surface, Projector::default());
        draw_primitive(&mut pen, &Palette::default(), Primitive::Chest, 10.0);
        draw_primitive(&mut pen, &Palette::default(), Primitive::FrontWall, 10.0);
        assert_eq!(surface.fill_count(), 7);
    }
}
