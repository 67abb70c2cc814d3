//! Balls seeded into the scene.

use std::fmt;

use pingboard_foundation::Vect;

/// A ball: the only moving object in a scene.
///
/// Balls are not registered by name and cannot be wired with `fire`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball {
    name: String,
    position: Vect,
    velocity: Vect,
    line: u32,
}

impl Ball {
    /// Creates a ball declared on `line`.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Vect, velocity: Vect, line: u32) -> Self {
        Self {
            name: name.into(),
            position,
            velocity,
            line,
        }
    }

    /// The ball's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Initial position in board units.
    #[must_use]
    pub const fn position(&self) -> Vect {
        self.position
    }

    /// Initial velocity in board units per second.
    #[must_use]
    pub const fn velocity(&self) -> Vect {
        self.velocity
    }

    /// Source line of the declaration.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ball {} at {} moving {}",
            self.name, self.position, self.velocity
        )
    }
}
