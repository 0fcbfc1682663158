//! Neighbor cell collection utilities

use super::Grid;
use crate::simulation::Cell;

/// Offsets of the 8 surrounding cells
///
/// Order: NW, N, NE, W, E, SW, S, SE (y grows downward)
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Offsets of the 4 orthogonal cells
///
/// Order: N, E, S, W
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Neighbor collection utilities - stateless methods for querying neighboring cells
pub struct NeighborQueries;

impl NeighborQueries {
    /// Collect in-bounds neighbors at the given offsets as `(x, y, cell)`
    pub fn collect(
        grid: &Grid,
        center_x: usize,
        center_y: usize,
        offsets: &[(i32, i32)],
    ) -> Vec<(usize, usize, Cell)> {
        let mut neighbors = Vec::with_capacity(offsets.len());

        for &(dx, dy) in offsets {
            let x = center_x as i32 + dx;
            let y = center_y as i32 + dy;

            if let Some(cell) = grid.get_checked(x, y) {
                neighbors.push((x as usize, y as usize, cell));
            }
        }

        neighbors
    }

    /// All in-bounds cells among the 8 surrounding positions
    pub fn get_8_neighbors(grid: &Grid, center_x: usize, center_y: usize) -> Vec<(usize, usize, Cell)> {
        Self::collect(grid, center_x, center_y, &MOORE_OFFSETS)
    }

    /// All in-bounds cells among the 4 orthogonal positions
    pub fn get_orthogonal_neighbors(
        grid: &Grid,
        center_x: usize,
        center_y: usize,
    ) -> Vec<(usize, usize, Cell)> {
        Self::collect(grid, center_x, center_y, &ORTHOGONAL_OFFSETS)
    }

    /// Grid positions within a circle of `radius` around the center, clipped to the grid
    ///
    /// Only the part of the disc's bounding box that overlaps the grid is
    /// scanned, so far-away centers cost nothing.
    pub fn positions_in_radius(
        grid: &Grid,
        center_x: i32,
        center_y: i32,
        radius: i32,
    ) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        if radius < 0 {
            return positions;
        }

        let (cx, cy, r) = (center_x as i64, center_y as i64, radius as i64);
        let max_x = grid.width() as i64 - 1;
        let max_y = grid.height() as i64 - 1;

        for y in (cy - r).max(0)..=(cy + r).min(max_y) {
            let dy = y - cy;
            for x in (cx - r).max(0)..=(cx + r).min(max_x) {
                let dx = x - cx;
                if dx * dx + dy * dy <= r * r {
                    positions.push((x as usize, y as usize));
                }
            }
        }

        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_8_neighbors_interior() {
        let grid = Grid::new(3, 3);
        let neighbors = NeighborQueries::get_8_neighbors(&grid, 1, 1);
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.iter().any(|&(x, y, _)| x == 1 && y == 1));
    }

    #[test]
    fn test_8_neighbors_corner_is_clipped() {
        let grid = Grid::new(3, 3);
        let neighbors = NeighborQueries::get_8_neighbors(&grid, 0, 0);
        assert_eq!(neighbors.len(), 3);
    }

    #[test]
    fn test_orthogonal_neighbors() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 0, Cell::Water);
        let neighbors = NeighborQueries::get_orthogonal_neighbors(&grid, 1, 1);
        assert_eq!(neighbors.len(), 4);
        assert_eq!(neighbors[0], (1, 0, Cell::Water));

        let edge = NeighborQueries::get_orthogonal_neighbors(&grid, 2, 1);
        assert_eq!(edge.len(), 3);
    }

    #[test]
    fn test_positions_in_radius() {
        let grid = Grid::new(10, 10);
        assert_eq!(NeighborQueries::positions_in_radius(&grid, 5, 5, 0), vec![(5, 5)]);
        // Radius 1 is a plus shape
        assert_eq!(NeighborQueries::positions_in_radius(&grid, 5, 5, 1).len(), 5);
        // Radius 2 disc has 13 cells
        assert_eq!(NeighborQueries::positions_in_radius(&grid, 5, 5, 2).len(), 13);
        // Clipped at the corner
        assert_eq!(NeighborQueries::positions_in_radius(&grid, 0, 0, 1).len(), 3);
        // Entirely outside
        assert!(NeighborQueries::positions_in_radius(&grid, -10, -10, 2).is_empty());
    }

    #[test]
    fn test_positions_in_radius_extreme_centers() {
        let grid = Grid::new(10, 10);
        assert!(NeighborQueries::positions_in_radius(&grid, i32::MAX, 0, 1).is_empty());
        assert!(NeighborQueries::positions_in_radius(&grid, i32::MIN, i32::MIN, 20).is_empty());
        // A huge disc centered far away still reaches the grid
        assert_eq!(
            NeighborQueries::positions_in_radius(&grid, -1_000, 5, i32::MAX).len(),
            100
        );
        assert!(NeighborQueries::positions_in_radius(&grid, 5, 5, -1).is_empty());
    }
}
