//! Pingboard - Board definition language front end
//!
//! This crate re-exports all layers of the Pingboard system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: pingboard_runtime    - File loading, scene serialization, CLI
//! Layer 2: pingboard_scene      - Entity builder, name registry, trigger graph, scene
//! Layer 1: pingboard_language   - Lexer, parser, declaration productions
//! Layer 0: pingboard_foundation - Core types (Vect, Error, SimulationConfig)
//! ```

pub use pingboard_foundation as foundation;
pub use pingboard_language as language;
pub use pingboard_runtime as runtime;
pub use pingboard_scene as scene;
