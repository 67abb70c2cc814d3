//! Gadgets: the named, fixed-geometry entities of a board.
//!
//! Every entity occupies grid cells, can be struck by a ball, and can be
//! an endpoint of the trigger graph.

use std::fmt;

/// A cell on the board grid (column `x`, row `y`, origin top-left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridPoint {
    /// Creates a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Clockwise rotation of a gadget, restricted to right angles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// 0 degrees.
    #[default]
    Deg0,
    /// 90 degrees.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees.
    Deg270,
}

impl Orientation {
    /// Converts a degree value; anything but 0, 90, 180 or 270 is `None`.
    #[must_use]
    pub const fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Returns the rotation in degrees.
    #[must_use]
    pub const fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

/// Which way a flipper swings. Fixed by the declaration keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Declared with `leftFlipper`.
    Left,
    /// Declared with `rightFlipper`.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// The kind of gadget and its kind-specific parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GadgetKind {
    /// 1×1 square bumper.
    SquareBumper,
    /// Circle inscribed in a 1×1 cell.
    CircularBumper,
    /// Right triangle in a 1×1 cell.
    TriangularBumper {
        /// Rotation of the right angle corner.
        orientation: Orientation,
    },
    /// Rectangular region that captures balls.
    Absorber {
        /// Width in cells (at least 1).
        width: u32,
        /// Height in cells (at least 1).
        height: u32,
    },
    /// A flipper swinging within a 2×2 bounding box.
    Flipper {
        /// Swing direction.
        side: Side,
        /// Rotation of the pivot corner.
        orientation: Orientation,
    },
}

impl GadgetKind {
    /// Returns a short human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SquareBumper => "square bumper",
            Self::CircularBumper => "circular bumper",
            Self::TriangularBumper { .. } => "triangular bumper",
            Self::Absorber { .. } => "absorber",
            Self::Flipper {
                side: Side::Left, ..
            } => "left flipper",
            Self::Flipper {
                side: Side::Right, ..
            } => "right flipper",
        }
    }

    /// Returns the cell size `(width, height)` the gadget occupies.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        match self {
            Self::SquareBumper | Self::CircularBumper | Self::TriangularBumper { .. } => (1, 1),
            Self::Absorber { width, height } => (*width, *height),
            Self::Flipper { .. } => (2, 2),
        }
    }
}

/// The rectangle of cells a gadget occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Top-left cell.
    pub origin: GridPoint,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Footprint {
    /// Returns true if `cell` lies within the footprint.
    #[must_use]
    pub fn contains(&self, cell: GridPoint) -> bool {
        let dx = i64::from(cell.x) - i64::from(self.origin.x);
        let dy = i64::from(cell.y) - i64::from(self.origin.y);
        (0..i64::from(self.width)).contains(&dx) && (0..i64::from(self.height)).contains(&dy)
    }
}

/// A named gadget placed on the board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    name: String,
    origin: GridPoint,
    kind: GadgetKind,
    line: u32,
}

impl Entity {
    /// Creates a new entity declared on `line`.
    #[must_use]
    pub fn new(name: impl Into<String>, origin: GridPoint, kind: GadgetKind, line: u32) -> Self {
        Self {
            name: name.into(),
            origin,
            kind,
            line,
        }
    }

    /// The entity's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-left cell.
    #[must_use]
    pub const fn origin(&self) -> GridPoint {
        self.origin
    }

    /// Kind and kind-specific parameters.
    #[must_use]
    pub const fn kind(&self) -> GadgetKind {
        self.kind
    }

    /// Source line of the declaration.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Cells the entity occupies.
    #[must_use]
    pub const fn footprint(&self) -> Footprint {
        let (width, height) = self.kind.size();
        Footprint {
            origin: self.origin,
            width,
            height,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at ({}, {})",
            self.kind.name(),
            self.name,
            self.origin.x,
            self.origin.y
        )?;
        match self.kind {
            GadgetKind::TriangularBumper { orientation } | GadgetKind::Flipper { orientation, .. } => {
                write!(f, " rotated {}", orientation.degrees())
            }
            GadgetKind::Absorber { width, height } => write!(f, " size {width}x{height}"),
            GadgetKind::SquareBumper | GadgetKind::CircularBumper => Ok(()),
        }
    }
}
