#![forbid(unsafe_code)]

//! Tile kinds and color attributes.

use crate::param::Param;

/// The kind of one board cell.
///
/// Covers the element set that matters for parameter editing: terrain
/// carries no param, items and creatures carry data slots, objects and
/// scrolls carry a bound program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Nothing here.
    Empty,
    /// The player start position.
    Player,
    /// Ammunition pickup.
    Ammo,
    /// Torch pickup.
    Torch,
    /// Gem pickup.
    Gem,
    /// Colored key.
    Key,
    /// Colored door.
    Door,
    /// A scroll with a bound program.
    Scroll,
    /// A passage to another board.
    Passage,
    /// Duplicates the tile it points at.
    Duplicator,
    /// Counts down and explodes.
    Bomb,
    /// Temporary invincibility pickup.
    Energizer,
    /// A thrown star projectile.
    Star,
    /// Clockwise conveyor.
    ConveyorCw,
    /// Counter-clockwise conveyor.
    ConveyorCcw,
    /// A fired bullet.
    Bullet,
    /// Water terrain.
    Water,
    /// Forest terrain.
    Forest,
    /// Solid wall.
    SolidWall,
    /// Normal wall.
    NormalWall,
    /// Breakable wall.
    BreakableWall,
    /// Pushable boulder.
    Boulder,
    /// North-south slider.
    SliderNs,
    /// East-west slider.
    SliderEw,
    /// Fake wall.
    FakeWall,
    /// Invisible wall.
    Invisible,
    /// Wall that fires rays on a timer.
    BlinkWall,
    /// Teleports across the board along its facing.
    Transporter,
    /// Line wall.
    Line,
    /// Ruffian creature.
    Ruffian,
    /// A scriptable object with a bound program.
    Object,
    /// Slime creature.
    Slime,
    /// Shark creature (moves in water).
    Shark,
    /// Gun that spins and fires.
    SpinningGun,
    /// Pushes tiles along its facing.
    Pusher,
    /// Lion creature.
    Lion,
    /// Tiger creature.
    Tiger,
    /// Bear creature.
    Bear,
    /// Head segment of a centipede.
    CentipedeHead,
    /// Body segment of a centipede.
    CentipedeBody,
    /// Text character; the glyph lives in the color field.
    Text,
}

impl TileKind {
    /// Whether tiles of this kind carry a parameter block.
    #[must_use]
    pub const fn has_param(self) -> bool {
        matches!(
            self,
            Self::Player
                | Self::Scroll
                | Self::Passage
                | Self::Duplicator
                | Self::Bomb
                | Self::Star
                | Self::ConveyorCw
                | Self::ConveyorCcw
                | Self::Bullet
                | Self::BlinkWall
                | Self::Transporter
                | Self::Ruffian
                | Self::Object
                | Self::Slime
                | Self::Shark
                | Self::SpinningGun
                | Self::Pusher
                | Self::Lion
                | Self::Tiger
                | Self::Bear
                | Self::CentipedeHead
                | Self::CentipedeBody
        )
    }

    /// Display name for dialogs and the tile info summary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Player => "Player",
            Self::Ammo => "Ammo",
            Self::Torch => "Torch",
            Self::Gem => "Gem",
            Self::Key => "Key",
            Self::Door => "Door",
            Self::Scroll => "Scroll",
            Self::Passage => "Passage",
            Self::Duplicator => "Duplicator",
            Self::Bomb => "Bomb",
            Self::Energizer => "Energizer",
            Self::Star => "Star",
            Self::ConveyorCw => "Clockwise Conveyor",
            Self::ConveyorCcw => "Counter Conveyor",
            Self::Bullet => "Bullet",
            Self::Water => "Water",
            Self::Forest => "Forest",
            Self::SolidWall => "Solid Wall",
            Self::NormalWall => "Normal Wall",
            Self::BreakableWall => "Breakable Wall",
            Self::Boulder => "Boulder",
            Self::SliderNs => "Slider (NS)",
            Self::SliderEw => "Slider (EW)",
            Self::FakeWall => "Fake Wall",
            Self::Invisible => "Invisible Wall",
            Self::BlinkWall => "Blink Wall",
            Self::Transporter => "Transporter",
            Self::Line => "Line Wall",
            Self::Ruffian => "Ruffian",
            Self::Object => "Object",
            Self::Slime => "Slime",
            Self::Shark => "Shark",
            Self::SpinningGun => "Spinning Gun",
            Self::Pusher => "Pusher",
            Self::Lion => "Lion",
            Self::Tiger => "Tiger",
            Self::Bear => "Bear",
            Self::CentipedeHead => "Centipede Head",
            Self::CentipedeBody => "Centipede Body",
            Self::Text => "Text",
        }
    }
}

/// One board cell: kind, color attribute, optional parameter block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tile {
    /// Element kind.
    pub kind: TileKind,
    /// Packed color attribute (or the glyph, for [`TileKind::Text`]).
    pub color: u8,
    /// Parameter block, present only for kinds where
    /// [`TileKind::has_param`] holds.
    pub param: Option<Param>,
}

impl Default for TileKind {
    fn default() -> Self {
        Self::Empty
    }
}

impl Tile {
    /// A tile with no parameter block.
    #[must_use]
    pub const fn new(kind: TileKind, color: u8) -> Self {
        Self {
            kind,
            color,
            param: None,
        }
    }

    /// A tile with a parameter block.
    #[must_use]
    pub const fn with_param(kind: TileKind, color: u8, param: Param) -> Self {
        Self {
            kind,
            color,
            param: Some(param),
        }
    }
}

/// Names of the sixteen text-mode colors, indexed by attribute nibble.
pub const COLOR_NAMES: [&str; 16] = [
    "Black",
    "Blue",
    "Green",
    "Cyan",
    "Red",
    "Purple",
    "Brown",
    "Gray",
    "Dark Gray",
    "Light Blue",
    "Light Green",
    "Light Cyan",
    "Light Red",
    "Light Purple",
    "Yellow",
    "White",
];

/// Foreground nibble of a packed color attribute.
#[must_use]
pub const fn color_foreground(attr: u8) -> u8 {
    attr & 0x0f
}

/// Background bits of a packed color attribute.
#[must_use]
pub const fn color_background(attr: u8) -> u8 {
    (attr >> 4) & 0x07
}

/// Blink bit of a packed color attribute.
#[must_use]
pub const fn color_blink(attr: u8) -> bool {
    attr & 0x80 != 0
}

/// Human-readable rendering of a packed color attribute, e.g.
/// `"White on Blue"` or `"Yellow on Black, blinking"`.
#[must_use]
pub fn color_name(attr: u8) -> String {
    let mut name = format!(
        "{} on {}",
        COLOR_NAMES[color_foreground(attr) as usize],
        COLOR_NAMES[color_background(attr) as usize]
    );
    if color_blink(attr) {
        name.push_str(", blinking");
    }
    name
}
