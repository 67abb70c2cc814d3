//! Board loading, scene serialization, and CLI for Pingboard.
//!
//! This crate provides:
//! - [`load_board`] - Read a board file in a given [`Encoding`] and build its scene
//! - Scene serialization to and from `MessagePack`
//! - The `pingboard` command-line checker

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod loader;
pub mod serialize;

pub use loader::{Encoding, load_board, read_board};
pub use serialize::{FORMAT_VERSION, from_bytes, load_from_file, save_to_file, to_bytes};
