//! Static tile map for level collision.
//!
//! A level is a grid of square tiles, each either passable or blocking.
//! The map is built once at level load and never changes afterwards.
//! Tiles are stored in row-major order: index = row * width + column.

use glam::DVec2;

use crate::core::geometry::Rect;
use crate::core::units::TILE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Passable,
    Blocking,
}

impl TileKind {
    /// Grid cell value: 0 is passable, anything else blocks.
    pub fn from_cell(value: u8) -> Self {
        if value == 0 {
            TileKind::Passable
        } else {
            TileKind::Blocking
        }
    }
}

/// A single tile with its world-space bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    pub bounds: Rect,
}

impl Tile {
    pub fn passable(bounds: Rect) -> Self {
        Self { kind: TileKind::Passable, bounds }
    }

    pub fn blocking(bounds: Rect) -> Self {
        Self { kind: TileKind::Blocking, bounds }
    }

    pub fn is_blocking(&self) -> bool {
        self.kind == TileKind::Blocking
    }
}

#[derive(Debug, Clone)]
pub struct TileMap {
    /// Width of the grid in tiles (longest row).
    width: usize,
    /// Height of the grid in tiles.
    height: usize,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Build a map from rows of cell values.
    ///
    /// The tile at `(column, row)` is centered on
    /// `(column * TILE_SIZE, row * TILE_SIZE)`. Rows shorter than the longest
    /// one are padded with passable tiles.
    pub fn from_grid<R: AsRef<[u8]>>(grid: &[R]) -> Self {
        let height = grid.len();
        let width = grid.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
        let mut tiles = Vec::with_capacity(width * height);

        for (row_index, row) in grid.iter().enumerate() {
            let cells = row.as_ref();
            for column_index in 0..width {
                let cell = cells.get(column_index).copied().unwrap_or(0);
                let center = DVec2::new(
                    column_index as f64 * TILE_SIZE,
                    row_index as f64 * TILE_SIZE,
                );
                tiles.push(Tile {
                    kind: TileKind::from_cell(cell),
                    bounds: Rect::from_center(center, DVec2::splat(TILE_SIZE)),
                });
            }
        }

        Self { width, height, tiles }
    }

    /// Build a map from an explicit tile list. Iteration order is the order given.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        let width = tiles.len();
        let height = usize::from(!tiles.is_empty());
        Self { width, height, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the tile at grid position (column, row).
    pub fn get(&self, column: usize, row: usize) -> Option<&Tile> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.tiles.get(row * self.width + column)
    }

    /// All tiles in map iteration order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Blocking tiles only, in map iteration order.
    pub fn blocking(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_blocking())
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn blocking_count(&self) -> usize {
        self.blocking().count()
    }

    /// World-space bounds covering every tile.
    pub fn bounds(&self) -> Option<Rect> {
        self.tiles
            .iter()
            .map(|t| t.bounds)
            .reduce(|acc, r| acc.union(&r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cells_map_to_kinds() {
        let map = TileMap::from_grid(&[[0u8, 1, 2], [0, 0, 0]]);
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.len(), 6);
        assert_eq!(map.blocking_count(), 2);
        assert_eq!(map.get(0, 0).unwrap().kind, TileKind::Passable);
        assert_eq!(map.get(1, 0).unwrap().kind, TileKind::Blocking);
        assert_eq!(map.get(2, 0).unwrap().kind, TileKind::Blocking);
    }

    #[test]
    fn tiles_are_centered_on_grid_points() {
        let map = TileMap::from_grid(&[[0u8, 0], [0, 1]]);
        let tile = map.get(1, 1).unwrap();
        assert_eq!(tile.bounds.center(), DVec2::new(TILE_SIZE, TILE_SIZE));
        assert_eq!(tile.bounds.left, TILE_SIZE / 2.0);
        assert_eq!(tile.bounds.width, TILE_SIZE);
    }

    #[test]
    fn blocking_preserves_row_major_order() {
        let map = TileMap::from_grid(&[[1u8, 0, 1], [1, 0, 0]]);
        let centers: Vec<DVec2> = map.blocking().map(|t| t.bounds.center()).collect();
        assert_eq!(
            centers,
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(2.0 * TILE_SIZE, 0.0),
                DVec2::new(0.0, TILE_SIZE),
            ]
        );
    }

    #[test]
    fn out_of_bounds_returns_none() {
        let map = TileMap::from_grid(&[[0u8; 4]; 4]);
        assert!(map.get(4, 0).is_none());
        assert!(map.get(0, 4).is_none());
    }

    #[test]
    fn ragged_rows_are_padded_with_passable_tiles() {
        let map = TileMap::from_grid(&[vec![1u8], vec![0, 0]]);
        assert_eq!(map.width(), 2);
        assert_eq!(map.len(), 4);
        assert_eq!(map.blocking_count(), 1);

        let padded = map.get(1, 0).unwrap();
        assert_eq!(padded.kind, TileKind::Passable);
        assert_eq!(padded.bounds.center(), DVec2::new(TILE_SIZE, 0.0));
        assert_eq!(map.get(0, 1).unwrap().bounds.center(), DVec2::new(0.0, TILE_SIZE));
        assert!(map.get(2, 0).is_none());
    }

    #[test]
    fn bounds_cover_all_tiles() {
        let map = TileMap::from_grid(&[[0u8; 4]; 2]);
        let half = TILE_SIZE / 2.0;
        let bounds = map.bounds().unwrap();
        assert_eq!(bounds.left, -half);
        assert_eq!(bounds.top, -half);
        assert_eq!(bounds.right(), 3.0 * TILE_SIZE + half);
        assert_eq!(bounds.bottom(), TILE_SIZE + half);
    }

    #[test]
    fn empty_map_has_no_bounds() {
        let map = TileMap::from_tiles(Vec::new());
        assert!(map.is_empty());
        assert!(map.bounds().is_none());
    }
}
