use std::path::PathBuf;
use std::{error, fmt, io};

/// Error type for the map loader.
///
/// Any of these aborts the load; there is never a partial map.
#[derive(Debug)]
pub enum MapError {
    /// JSON parse error, including missing or wrong-typed required fields
    Parse(serde_json::Error),
    /// `tileSize` must be a positive integer
    InvalidTileSize,
    /// File I/O error
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// Unsupported file format (non-JSON)
    UnsupportedFormat(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Parse(err) => write!(f, "Failed to parse map JSON: {}", err),
            MapError::InvalidTileSize => write!(f, "tileSize must be greater than zero"),
            MapError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            MapError::UnsupportedFormat(path) => write!(f, "Unsupported file format: {}", path),
        }
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Parse(err)
    }
}

impl error::Error for MapError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MapError::Parse(err) => Some(err),
            MapError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Spritesheet load failure.
///
/// Non-fatal: callers keep running and every tile degrades to its
/// layer-keyed flat fill color.
#[derive(Debug)]
pub struct AtlasError {
    /// Path of the sheet that could not be loaded or decoded
    pub path: String,
    /// Underlying texture load error
    pub source: macroquad::Error,
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to load spritesheet {}: {:?}", self.path, self.source)
    }
}

impl error::Error for AtlasError {}
