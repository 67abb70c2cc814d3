//! Scene serialization and deserialization using `MessagePack`.
//!
//! Used to ship a built scene to clients without re-parsing the board. The
//! encoded form carries a format version; decoding rejects other versions.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use pingboard_foundation::{Error, ErrorKind, Result};
use pingboard_scene::Scene;
use serde::{Deserialize, Serialize};

/// Version written into every encoded scene.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    scene: &'a Scene,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    scene: Scene,
}

/// Serializes a scene to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(scene: &Scene) -> Result<Vec<u8>> {
    let envelope = EnvelopeRef {
        version: FORMAT_VERSION,
        scene,
    };
    rmp_serde::to_vec_named(&envelope)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a scene from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are malformed or carry another format version.
pub fn from_bytes(bytes: &[u8]) -> Result<Scene> {
    let envelope: Envelope = rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))?;
    if envelope.version != FORMAT_VERSION {
        return Err(Error::new(ErrorKind::Serialization(format!(
            "unsupported scene format version {} (expected {FORMAT_VERSION})",
            envelope.version
        ))));
    }
    Ok(envelope.scene)
}

/// Saves a scene to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(scene)?;

    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to write to file '{}': {e}",
            path.display()
        )))
    })?;

    writer.flush().map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to flush file '{}': {e}",
            path.display()
        )))
    })?;

    log::info!("saved scene {} to {}", scene.name(), path.display());
    Ok(())
}

/// Loads a scene from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    from_bytes(&bytes)
}
