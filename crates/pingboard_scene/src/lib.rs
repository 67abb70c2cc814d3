//! Scene construction for Pingboard boards.
//!
//! This crate provides:
//! - [`SceneBuilder`] - Builds gadgets and balls from declarations and wires triggers
//! - [`NameRegistry`] - Unique gadget names
//! - [`TriggerGraph`] - Which gadgets act when another is struck
//! - [`Scene`] - The finished, immutable board
//! - [`parse_board`] - Source text straight to a [`Scene`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ball;
pub mod builder;
mod decode;
pub mod entity;
pub mod graph;
pub mod registry;
pub mod scene;

pub use ball::Ball;
pub use builder::SceneBuilder;
pub use entity::{Entity, Footprint, GadgetKind, GridPoint, Orientation, Side};
pub use graph::TriggerGraph;
pub use registry::NameRegistry;
pub use scene::Scene;

use pingboard_foundation::{Result, SimulationConfig};

/// Parses board source and builds its scene.
///
/// # Errors
///
/// Returns the first syntax, declaration, duplicate name, or unresolved
/// reference error. No partial scene is produced.
pub fn parse_board(source: &str, config: SimulationConfig) -> Result<Scene> {
    let file = pingboard_language::parse(source)?;
    SceneBuilder::build(&file, config)
}
