//! Map loading from text files.
//!
//! A map file holds one row of tile characters per line:
//!
//! ```text
//! XXXXX
//! X...X
//! X.X.X
//! X.|.X
//! XXXXX
//! ```
//!
//! Every row must have the same width. Lines may end in `\n`, `\r\n` or `\r`,
//! but one file must stick to a single style. Any number of empty lines may
//! end the file; an empty line between rows is an error.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::tile_map::TileMap;

/// Why a map could not be loaded.
#[derive(Debug)]
pub enum MapLoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The text holds no rows at all.
    Empty,
    /// A row (1-based) is empty while more rows follow.
    BlankRow { row: usize },
    /// A row (1-based) differs in width from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A line (1-based) ends differently from the lines before it.
    MixedLineEndings { line: usize },
}

impl fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapLoadError::Io { path, source } => {
                write!(f, "can't open map file {}: {}", path.display(), source)
            }
            MapLoadError::Empty => write!(f, "map file holds no rows"),
            MapLoadError::BlankRow { row } => write!(f, "row {} is blank", row),
            MapLoadError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} is {} tiles wide, expected {}",
                row, found, expected
            ),
            MapLoadError::MixedLineEndings { line } => {
                write!(f, "line {} uses a different line ending", line)
            }
        }
    }
}

impl std::error::Error for MapLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapLoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

/// Split text into lines, enforcing a single line ending style.
fn split_lines(text: &str) -> Result<Vec<&str>, MapLoadError> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut style: Option<LineEnding> = None;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let ending = match bytes[i] {
            b'\n' => Some((LineEnding::Lf, 1)),
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some((LineEnding::CrLf, 2)),
            b'\r' => Some((LineEnding::Cr, 1)),
            _ => None,
        };

        let Some((kind, len)) = ending else {
            i += 1;
            continue;
        };

        match style {
            None => style = Some(kind),
            Some(s) if s != kind => {
                return Err(MapLoadError::MixedLineEndings {
                    line: lines.len() + 1,
                })
            }
            Some(_) => {}
        }

        // Line breaks are ASCII, so these offsets are always char boundaries.
        lines.push(&text[start..i]);
        i += len;
        start = i;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    Ok(lines)
}

/// Parse map text into a [`TileMap`].
///
/// # Examples
///
/// ```
/// use dungeon_view_core::parse_map;
///
/// let map = parse_map("XXX\nX.X\nXXX\n\n").unwrap();
/// assert_eq!((map.width(), map.height()), (3, 3));
/// assert!(parse_map("XXX\r\nX.X\nXXX").is_err());
/// ```
pub fn parse_map(text: &str) -> Result<TileMap, MapLoadError> {
    let mut lines = split_lines(text)?;
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(MapLoadError::Empty);
    }
    TileMap::from_rows(&lines)
}

/// Read and parse a map file.
pub fn load_map_from_path(path: impl AsRef<Path>) -> Result<TileMap, MapLoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MapLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_map(&text)?;
    log::debug!(
        "loaded {}x{} map from {}",
        map.width(),
        map.height(),
        path.display()
    );
    Ok(map)
}
