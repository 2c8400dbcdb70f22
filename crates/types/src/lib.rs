//! Dungeon types - vocabulary shared by every crate in the workspace
//!
//! Facings, tiles, actions, colors and the geometry constants of the view.
//! Plain data with no dependencies, used alike by the map logic, the sweep
//! renderer and the terminal front-end.
//!
//! # Eye Space
//!
//! Every drawable shape is described in a 10×10 "cell frame" and pushed into the
//! shared eye space by a lateral bias:
//!
//! - **Lateral (x)**: `[bias, bias + 10]` for one cell, the centre column spans `[0, 10]`
//! - **Height (y)**: `[0, 10]`, floor to ceiling
//! - **Depth (z)**: `>= 0` in front of the eye plane, one grid cell is `CELL_SIZE` deep
//!
//! # Geometry Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_SIZE` | 10.0 | Width/height/depth of one grid cell in eye units |
//! | `VANISHING_POINT` | 5.0 | Centre of foreshortening on both x and y |
//! | `DOOR_WIDTH` | 5.0 | Door opening width, centred in the wall |
//! | `DOOR_HEIGHT` | 7.0 | Door opening height from the floor |
//! | `LADDER_RUNG_SPACING` | 1.5 | Distance between ladder rungs |
//! | `LADDER_DOWN_TOP` | 7.0 | Top end of a ladder leading down |
//! | `LADDER_UP_BOTTOM` | 3.0 | Bottom end of a ladder leading up |
//!
//! # Gameplay Constants
//!
//! - `TREASURE_MAX`: 10 - a chest holds between 1 and 10 gold
//! - `VIEW_DEPTH`: 5 - number of cells drawn ahead of the player
//! - `REAR_DEPTH`: 1 - number of cells drawn behind the player
//! - `DEFAULT_START`: (1, 1) facing East
//!
//! # Examples
//!
//! ```
//! use dungeon_view_types::{Facing, PlayerAction, Tile, CELL_SIZE};
//!
//! // Facing cycles North -> East -> South -> West
//! assert_eq!(Facing::North.turn_right(), Facing::East);
//! assert_eq!(Facing::North.turn_left(), Facing::West);
//!
//! // Tile codes round-trip through their map characters
//! assert_eq!(Tile::from_char('|'), Tile::VerticalDoor);
//! assert_eq!(Tile::Chest.as_char(), 'T');
//!
//! // Parse player action
//! assert_eq!(PlayerAction::from_str("moveForward"), Some(PlayerAction::MoveForward));
//!
//! assert_eq!(CELL_SIZE, 10.0);
//! ```

/// Size of one grid cell in eye-space units
pub const CELL_SIZE: f32 = 10.0;

/// Centre of the one-point perspective on both the x and y axes
pub const VANISHING_POINT: f32 = 5.0;

/// Width of a door opening
pub const DOOR_WIDTH: f32 = 5.0;

/// Height of a door opening
pub const DOOR_HEIGHT: f32 = 7.0;

/// Chest width as a fraction of the cell
pub const CHEST_WIDTH: f32 = 0.6;

/// Chest height as a fraction of the cell
pub const CHEST_HEIGHT: f32 = 0.4;

/// Chest depth as a fraction of the cell
pub const CHEST_DEPTH: f32 = 0.4;

/// Vertical distance between two ladder rungs
pub const LADDER_RUNG_SPACING: f32 = 1.5;

/// Height at which a ladder leading down ends
pub const LADDER_DOWN_TOP: f32 = 7.0;

/// Height at which a ladder leading up starts
pub const LADDER_UP_BOTTOM: f32 = 3.0;

/// Distance between the two ladder rails
pub const LADDER_WIDTH: f32 = 3.0;

/// Thickness of a ladder rail
pub const LADDER_RAIL_THICKNESS: f32 = 0.4;

/// Thickness of a ladder rung
pub const LADDER_RUNG_THICKNESS: f32 = 0.3;

/// Maximum gold found in a single chest
pub const TREASURE_MAX: u32 = 10;

/// Number of depth bands drawn in front of the player
pub const VIEW_DEPTH: i32 = 5;

/// Number of depth bands drawn behind the player
pub const REAR_DEPTH: i32 = 1;

/// Starting position for a new session
pub const DEFAULT_START: (i32, i32) = (1, 1);

/// Starting facing for a new session
pub const DEFAULT_FACING: Facing = Facing::East;

/// Side length of the drawing surface when nothing else is configured
pub const DEFAULT_VIEW_SIZE: u32 = 640;

/// Number of session events kept for the status panel
pub const EVENT_LOG_LEN: usize = 6;


/// Cardinal facing of the player
///
/// Map coordinates grow eastwards on x and southwards on y, so North steps
/// towards `y - 1`.
///
/// The turn cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in turn-right order
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Turn clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_view_types::Facing;
    ///
    /// assert_eq!(Facing::North.turn_right(), Facing::East);
    /// assert_eq!(Facing::East.turn_right(), Facing::South);
    /// assert_eq!(Facing::South.turn_right(), Facing::West);
    /// assert_eq!(Facing::West.turn_right(), Facing::North);
    /// ```
    pub fn turn_right(&self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// Turn counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_view_types::Facing;
    ///
    /// assert_eq!(Facing::North.turn_left(), Facing::West);
    /// assert_eq!(Facing::West.turn_left(), Facing::South);
    /// assert_eq!(Facing::South.turn_left(), Facing::East);
    /// assert_eq!(Facing::East.turn_left(), Facing::North);
    /// ```
    pub fn turn_left(&self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    /// Unit step along the direction of travel
    pub fn forward(&self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::East => (1, 0),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
        }
    }

    /// Unit step towards the viewer's right-hand side
    ///
    /// A tile at `forward * steps + right * n` is seen with a positive lateral
    /// offset `n`, i.e. on the right of the screen.
    pub fn right(&self) -> (i32, i32) {
        match self {
            Facing::North => (1, 0),
            Facing::East => (0, 1),
            Facing::South => (-1, 0),
            Facing::West => (0, -1),
        }
    }

    /// Axis of travel
    pub fn axis(&self) -> Axis {
        match self {
            Facing::East | Facing::West => Axis::EastWest,
            Facing::North | Facing::South => Axis::NorthSouth,
        }
    }

    /// Parse facing from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Facing::North),
            "east" | "e" => Some(Facing::East),
            "south" | "s" => Some(Facing::South),
            "west" | "w" => Some(Facing::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        }
    }
}

/// Axis a corridor (and the player) travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    EastWest,
    NorthSouth,
}

/// Contents of one map cell
///
/// Map files use one character per cell:
/// - `X`: impassable wall
/// - `.`: open floor
/// - `|`: door crossable while travelling east/west
/// - `-`: door crossable while travelling north/south
/// - `T`: treasure chest
/// - `U` / `D`: ladder leading up / down
///
/// Anything else is kept verbatim as [`Tile::Other`] and drawn as floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    VerticalDoor,
    HorizontalDoor,
    Chest,
    LadderUp,
    LadderDown,
    Other(char),
}

impl Tile {
    /// Classify a map character
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_view_types::Tile;
    ///
    /// assert_eq!(Tile::from_char('X'), Tile::Wall);
    /// assert_eq!(Tile::from_char('-'), Tile::HorizontalDoor);
    /// assert_eq!(Tile::from_char('~'), Tile::Other('~'));
    /// ```
    pub fn from_char(ch: char) -> Self {
        match ch {
            'X' => Tile::Wall,
            '.' => Tile::Floor,
            '|' => Tile::VerticalDoor,
            '-' => Tile::HorizontalDoor,
            'T' => Tile::Chest,
            'U' => Tile::LadderUp,
            'D' => Tile::LadderDown,
            other => Tile::Other(other),
        }
    }

    /// Map character for this tile
    pub fn as_char(&self) -> char {
        match self {
            Tile::Wall => 'X',
            Tile::Floor => '.',
            Tile::VerticalDoor => '|',
            Tile::HorizontalDoor => '-',
            Tile::Chest => 'T',
            Tile::LadderUp => 'U',
            Tile::LadderDown => 'D',
            Tile::Other(ch) => *ch,
        }
    }

    /// Only walls block movement
    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub fn is_door(&self) -> bool {
        self.door_axis().is_some()
    }

    /// Axis along which this door can be crossed, `None` for non-doors
    pub fn door_axis(&self) -> Option<Axis> {
        match self {
            Tile::VerticalDoor => Some(Axis::EastWest),
            Tile::HorizontalDoor => Some(Axis::NorthSouth),
            _ => None,
        }
    }
}

/// Side of the line of sight a tile is seen on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Center,
    Right,
}

impl Hand {
    /// Classify a signed lateral offset
    pub fn from_offset(offset: i32) -> Self {
        match offset {
            o if o < 0 => Hand::Left,
            0 => Hand::Center,
            _ => Hand::Right,
        }
    }
}

/// Player commands that modify the session
///
/// Quitting is not an action: the session loop handles it before the
/// session ever sees the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Step one cell along the facing
    MoveForward,
    /// Step one cell against the facing
    MoveBackward,
    /// Turn 90° counter-clockwise
    TurnLeft,
    /// Turn 90° clockwise
    TurnRight,
    /// Pick up treasure on the current cell
    PickUp,
}

impl PlayerAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_view_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("turnLeft"), Some(PlayerAction::TurnLeft));
    /// assert_eq!(PlayerAction::from_str("PICKUP"), Some(PlayerAction::PickUp));
    /// assert_eq!(PlayerAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveforward" => Some(PlayerAction::MoveForward),
            "movebackward" => Some(PlayerAction::MoveBackward),
            "turnleft" => Some(PlayerAction::TurnLeft),
            "turnright" => Some(PlayerAction::TurnRight),
            "pickup" => Some(PlayerAction::PickUp),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::MoveForward => "moveForward",
            PlayerAction::MoveBackward => "moveBackward",
            PlayerAction::TurnLeft => "turnLeft",
            PlayerAction::TurnRight => "turnRight",
            PlayerAction::PickUp => "pickUp",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
