//! Tile map module - the dungeon grid
//!
//! The map is a fixed-size grid of [`Tile`]s stored row-major in a flat vector.
//! Coordinates: (x, y) where x grows eastwards and y grows southwards.
//!
//! Reads outside the grid never fail: they report [`Tile::Wall`], so the
//! dungeon always looks enclosed to the renderer and to movement checks.

use std::fmt;

use crate::map_loader::MapLoadError;
use crate::types::Tile;

/// The dungeon grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a map of the given size filled with floor
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Floor; width * height],
        }
    }

    /// Build a map from equally wide rows of tile characters
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_view_core::TileMap;
    /// use dungeon_view_core::types::Tile;
    ///
    /// let map = TileMap::from_rows(&["XXX", "X.X", "XXX"]).unwrap();
    /// assert_eq!(map.tile(1, 1), Tile::Floor);
    /// assert_eq!(map.tile(-1, 0), Tile::Wall);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapLoadError> {
        let Some(first) = rows.first() else {
            return Err(MapLoadError::Empty);
        };
        let width = first.as_ref().chars().count();
        let mut tiles = Vec::with_capacity(width * rows.len());

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found == 0 {
                return Err(MapLoadError::BlankRow { row: i + 1 });
            }
            if found != width {
                return Err(MapLoadError::RaggedRow {
                    row: i + 1,
                    expected: width,
                    found,
                });
            }
            tiles.extend(row.chars().map(Tile::from_char));
        }

        Ok(Self {
            width,
            height: rows.len(),
            tiles,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if position lies on the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at position (x, y)
    /// Returns `Tile::Wall` if out of bounds
    pub fn tile(&self, x: i32, y: i32) -> Tile {
        self.index(x, y).map_or(Tile::Wall, |idx| self.tiles[idx])
    }

    /// Replace the tile at position (x, y)
    /// Returns false (and changes nothing) if out of bounds
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Iterate rows as strings of tile characters
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.tiles
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().map(Tile::as_char).collect())
    }

    /// Count tiles matching a predicate
    pub fn count(&self, mut pred: impl FnMut(Tile) -> bool) -> usize {
        self.tiles.iter().filter(|&&t| pred(t)).count()
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_map() -> TileMap {
        TileMap::from_rows(&[
            "XXXXXX", //
            "X....X", //
            "X.XX.X", //
            "X-XX.X", //
            "X..|.X", //
            "XXXXXX",
        ])
        .unwrap()
    }

    #[test]
    fn test_coordinates() {
        let map = demo_map();
        assert_eq!(map.tile(3, 4), Tile::VerticalDoor);
        assert_eq!(map.tile(1, 3), Tile::HorizontalDoor);
        assert_eq!(map.width(), 6);
        assert_eq!(map.height(), 6);
    }

    #[test]
    fn test_set_get_cycle() {
        let mut map = TileMap::new(1, 1);
        assert!(map.set_tile(0, 0, Tile::Other('Z')));
        assert_eq!(map.tile(0, 0), Tile::Other('Z'));
    }

    #[test]
    fn test_out_of_bounds_reads_as_wall() {
        let map = TileMap::new(3, 2);
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (i32::MIN, i32::MAX)] {
            assert_eq!(map.tile(x, y), Tile::Wall, "({}, {})", x, y);
        }
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut map = TileMap::new(2, 2);
        let before = map.clone();
        assert!(!map.set_tile(2, 0, Tile::Chest));
        assert!(!map.set_tile(0, -1, Tile::Chest));
        assert_eq!(map, before);
    }

    #[test]
    fn test_display_round_trips_rows() {
        let map = demo_map();
        let text = map.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(TileMap::from_rows(&rows).unwrap(), map);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = TileMap::from_rows(&["XXX", "XX"]).unwrap_err();
        assert!(
            matches!(
                err,
                MapLoadError::RaggedRow {
                    row: 2,
                    expected: 3,
                    found: 2
                }
            ),
            "{:?}",
            err
        );
    }
}
