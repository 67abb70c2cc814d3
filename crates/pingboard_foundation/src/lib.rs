//! Core types shared by every Pingboard layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with source locations
//! - [`Vect`] - Two-dimensional vectors for ball positions and velocities
//! - [`SimulationConfig`] - Frame rate and default physical constants

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod vect;

pub use config::{DEFAULT_FRAME_RATE, DEFAULT_GRAVITY, DEFAULT_MU1, DEFAULT_MU2, SimulationConfig};
pub use error::{Error, ErrorContext, ErrorKind};
pub use vect::Vect;

/// Result type alias using the Pingboard [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
