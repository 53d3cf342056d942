//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core raycasting, engine loop, terminal rendering, input mapping).
//!
//! # Coordinate System
//!
//! World space is measured in cell units (1.0 = one cube width). Axis `z`
//! points up. Seen from above, positive yaw turns toward `+y`, which the
//! renderer presents as a turn to the right (the horizontal frame is
//! left-handed). Integer cell indices are obtained by truncating a position
//! toward zero.
//!
//! # World Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WORLD_X` × `WORLD_Y` × `WORLD_Z` | 20 × 20 × 10 | Grid dimensions |
//! | `EYE_HEIGHT` | 1.5 | Eye above the feet |
//! | `VIEW_HEIGHT` | 0.7 rad | Vertical field of view |
//! | `VIEW_WIDTH` | 1.0 rad | Horizontal field of view |
//! | `BORDER_THRESHOLD` | 0.05 | Edge distance drawn as a grid line |
//! | `RAY_EPSILON` | 0.01 | Axis guard and boundary overshoot |
//! | `MAX_RAY_STEP` | 2.0 | Longest single DDA step |
//! | `MOVE_STEP` | 0.3 | Walk distance per frame |
//! | `TURN_STEP` | 0.1 rad | Turn per frame |
//! | `FRAME_MS` | 20 | Frame interval |
//!
//! # Examples
//!
//! ```
//! use tui_voxel_types::{Block, Intent, Intents, Pixel};
//!
//! let stone = Block::new('@').unwrap();
//! assert_eq!(Pixel::Block(stone).as_char(), '@');
//! assert_eq!(Pixel::Highlight.as_char(), 'o');
//!
//! // Whitespace is reserved for empty space.
//! assert_eq!(Block::new(' '), None);
//!
//! let mut intents = Intents::default();
//! intents.set(Intent::PlaceBlock);
//! assert!(intents.place_block);
//! assert_eq!(Intent::from_str("placeBlock"), Some(Intent::PlaceBlock));
//! ```

pub mod config;

pub use config::{Config, ConfigError, FieldOfView};
pub use glam::{IVec3, Vec3};

/// World width along x in cells
pub const WORLD_X: u16 = 20;

/// World depth along y in cells
pub const WORLD_Y: u16 = 20;

/// World height along z in cells
pub const WORLD_Z: u16 = 10;

/// Largest accepted world axis
pub const MAX_WORLD_AXIS: u16 = 1024;

/// Vertical distance between the feet and the eye
pub const EYE_HEIGHT: f32 = 1.5;

/// Vertical field of view in radians
pub const VIEW_HEIGHT: f32 = 0.7;

/// Horizontal field of view in radians
pub const VIEW_WIDTH: f32 = 1.0;

/// Distance from a cell edge under which a hit renders as a border
pub const BORDER_THRESHOLD: f32 = 0.05;

/// Axis guard for the DDA and the overshoot added to every step
pub const RAY_EPSILON: f32 = 0.01;

/// Maximum distance covered by one DDA step
pub const MAX_RAY_STEP: f32 = 2.0;

/// Walk distance per frame in cells
pub const MOVE_STEP: f32 = 0.3;

/// Turn per frame in radians
pub const TURN_STEP: f32 = 0.1;

/// Frame interval in milliseconds
pub const FRAME_MS: u32 = 20;

/// Number of solid layers seeded at the bottom of a new world
pub const GROUND_LAYERS: u16 = 4;

/// Spawn column
pub const SPAWN_X: f32 = 5.0;

/// Spawn row
pub const SPAWN_Y: f32 = 5.0;

/// Picture size used when no terminal is attached
pub const DEFAULT_PICTURE_ROWS: usize = 40;

/// Picture size used when no terminal is attached
pub const DEFAULT_PICTURE_COLS: usize = 120;

/// Character for a ray that left the world
pub const EMPTY_CHAR: char = ' ';

/// Character for a hit close to a cell edge
pub const BORDER_CHAR: char = '-';

/// Character for the targeted cell
pub const HIGHLIGHT_CHAR: char = 'o';

/// A one-character block-type code.
///
/// Whitespace and control characters are rejected so a block can never be
/// confused with empty space on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block(char);

impl Block {
    /// The block the world is seeded with and the player builds with.
    pub const STONE: Block = Block('@');

    /// Create a block from its display code
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_voxel_types::Block;
    ///
    /// assert_eq!(Block::new('#').map(|b| b.code()), Some('#'));
    /// assert_eq!(Block::new('\t'), None);
    /// ```
    pub fn new(code: char) -> Option<Self> {
        if code.is_whitespace() || code.is_control() {
            None
        } else {
            Some(Self(code))
        }
    }

    pub fn code(self) -> char {
        self.0
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::STONE
    }
}

/// A cell of the voxel grid
///
/// - `None`: empty space
/// - `Some(Block)`: solid cell with the given block code
pub type Cell = Option<Block>;

/// One traced picture element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pixel {
    /// The ray left the world without a hit
    #[default]
    Empty,
    /// The ray hit near a cell edge or corner
    Border,
    /// The ray hit the targeted cell
    Highlight,
    /// The ray hit a solid cell
    Block(Block),
}

impl Pixel {
    pub fn as_char(self) -> char {
        match self {
            Pixel::Empty => EMPTY_CHAR,
            Pixel::Border => BORDER_CHAR,
            Pixel::Highlight => HIGHLIGHT_CHAR,
            Pixel::Block(block) => block.code(),
        }
    }
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

impl GridDims {
    pub const fn new(x: u16, y: u16, z: u16) -> Self {
        Self { x, y, z }
    }

    /// Total number of cells
    pub fn volume(&self) -> usize {
        (self.x as usize) * (self.y as usize) * (self.z as usize)
    }

    /// Check if integer cell coordinates lie inside the grid
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && x < self.x as i32
            && y < self.y as i32
            && z < self.z as i32
    }

    /// Upper bounds as a float vector
    pub fn extent(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self::new(WORLD_X, WORLD_Y, WORLD_Z)
    }
}

/// View orientation in radians.
///
/// `pitch` is kept within [-π/2, π/2] by the player controller; `yaw` is
/// unbounded and wraps through the trigonometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewAngles {
    pub pitch: f32,
    pub yaw: f32,
}

impl ViewAngles {
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }
}

/// Eye position and view direction of the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerState {
    /// Eye location, not the feet
    pub position: Vec3,
    pub view: ViewAngles,
}

impl PlayerState {
    pub fn new(position: Vec3, view: ViewAngles) -> Self {
        Self { position, view }
    }
}

/// A single discrete input intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    RemoveBlock,
    PlaceBlock,
    Quit,
}

impl Intent {
    /// Every intent in display order
    pub const ALL: [Intent; 11] = [
        Intent::LookUp,
        Intent::LookDown,
        Intent::LookLeft,
        Intent::LookRight,
        Intent::MoveForward,
        Intent::MoveBackward,
        Intent::StrafeLeft,
        Intent::StrafeRight,
        Intent::RemoveBlock,
        Intent::PlaceBlock,
        Intent::Quit,
    ];

    /// Parse an intent name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lookup" => Some(Intent::LookUp),
            "lookdown" => Some(Intent::LookDown),
            "lookleft" => Some(Intent::LookLeft),
            "lookright" => Some(Intent::LookRight),
            "moveforward" => Some(Intent::MoveForward),
            "movebackward" => Some(Intent::MoveBackward),
            "strafeleft" => Some(Intent::StrafeLeft),
            "straferight" => Some(Intent::StrafeRight),
            "removeblock" => Some(Intent::RemoveBlock),
            "placeblock" => Some(Intent::PlaceBlock),
            "quit" => Some(Intent::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::LookUp => "lookUp",
            Intent::LookDown => "lookDown",
            Intent::LookLeft => "lookLeft",
            Intent::LookRight => "lookRight",
            Intent::MoveForward => "moveForward",
            Intent::MoveBackward => "moveBackward",
            Intent::StrafeLeft => "strafeLeft",
            Intent::StrafeRight => "strafeRight",
            Intent::RemoveBlock => "removeBlock",
            Intent::PlaceBlock => "placeBlock",
            Intent::Quit => "quit",
        }
    }
}

/// Snapshot of the intents active during one frame.
///
/// Sampled once at the start of a frame and treated as immutable for the
/// rest of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intents {
    pub look_up: bool,
    pub look_down: bool,
    pub look_left: bool,
    pub look_right: bool,
    pub move_forward: bool,
    pub move_backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub remove_block: bool,
    pub place_block: bool,
    pub quit: bool,
}

impl Intents {
    fn flag_mut(&mut self, intent: Intent) -> &mut bool {
        match intent {
            Intent::LookUp => &mut self.look_up,
            Intent::LookDown => &mut self.look_down,
            Intent::LookLeft => &mut self.look_left,
            Intent::LookRight => &mut self.look_right,
            Intent::MoveForward => &mut self.move_forward,
            Intent::MoveBackward => &mut self.move_backward,
            Intent::StrafeLeft => &mut self.strafe_left,
            Intent::StrafeRight => &mut self.strafe_right,
            Intent::RemoveBlock => &mut self.remove_block,
            Intent::PlaceBlock => &mut self.place_block,
            Intent::Quit => &mut self.quit,
        }
    }

    pub fn set(&mut self, intent: Intent) {
        *self.flag_mut(intent) = true;
    }

    pub fn contains(&self, intent: Intent) -> bool {
        match intent {
            Intent::LookUp => self.look_up,
            Intent::LookDown => self.look_down,
            Intent::LookLeft => self.look_left,
            Intent::LookRight => self.look_right,
            Intent::MoveForward => self.move_forward,
            Intent::MoveBackward => self.move_backward,
            Intent::StrafeLeft => self.strafe_left,
            Intent::StrafeRight => self.strafe_right,
            Intent::RemoveBlock => self.remove_block,
            Intent::PlaceBlock => self.place_block,
            Intent::Quit => self.quit,
        }
    }

    /// True when no intent is active
    pub fn is_idle(&self) -> bool {
        *self == Intents::default()
    }

    /// Iterate over the active intents in display order
    pub fn iter(&self) -> impl Iterator<Item = Intent> + '_ {
        Intent::ALL.into_iter().filter(|i| self.contains(*i))
    }
}

impl FromIterator<Intent> for Intents {
    fn from_iter<I: IntoIterator<Item = Intent>>(iter: I) -> Self {
        let mut intents = Intents::default();
        for intent in iter {
            intents.set(intent);
        }
        intents
    }
}
