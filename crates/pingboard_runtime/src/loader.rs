//! Reading board files from disk.
//!
//! Board files are plain text in a caller-chosen encoding. Loading decodes
//! the bytes, builds the scene, and tags any error with the file path.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use pingboard_foundation::{Error, ErrorContext, ErrorKind, Result, SimulationConfig};
use pingboard_scene::{Scene, parse_board};

/// Character encoding of a board file.
///
/// Any WHATWG encoding label is accepted (`utf-8`, `windows-1252`,
/// `shift_jis`, `gbk`, ...). Note that `latin1` and `iso-8859-1` name
/// `windows-1252` under those rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoding(&'static encoding_rs::Encoding);

impl Encoding {
    /// UTF-8, the default for board files.
    #[must_use]
    pub fn utf8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    /// Looks up an encoding by label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn for_label(label: &str) -> Option<Self> {
        encoding_rs::Encoding::for_label(label.as_bytes()).map(Self)
    }

    /// Canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Decodes `bytes` into text. A leading byte-order mark for this
    /// encoding is skipped.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the bytes are malformed in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let (text, had_errors) = self.0.decode_with_bom_removal(bytes);
        if had_errors {
            return Err(Error::new(ErrorKind::Io(format!(
                "input is not valid {}",
                self.name()
            ))));
        }
        Ok(text.into_owned())
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::for_label(s).ok_or_else(|| format!("unsupported encoding: {s}"))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reads and decodes a board file.
///
/// # Errors
///
/// Returns an IO error if the file cannot be read or decoded.
pub fn read_board<P: AsRef<Path>>(path: P, encoding: Encoding) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;
    encoding.decode(&bytes)
}

/// Reads a board file and builds its scene.
///
/// # Errors
///
/// Returns the first IO, syntax, declaration, duplicate name, or unresolved
/// reference error, with the file path attached as context.
pub fn load_board<P: AsRef<Path>>(
    path: P,
    encoding: Encoding,
    config: SimulationConfig,
) -> Result<Scene> {
    let path = path.as_ref();
    log::debug!("loading {} as {encoding}", path.display());
    read_board(path, encoding)
        .and_then(|source| parse_board(&source, config))
        .map_err(|e| e.with_context(ErrorContext::new().with_source(path.display().to_string())))
}
