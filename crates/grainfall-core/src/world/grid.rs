//! Dense cell storage

use super::color_cache::{ColorCache, ColorResolver};
use crate::simulation::{Cell, Color, Material};

/// Fixed-size grid of cells, row-major, `y = 0` is the top row
///
/// Besides the cells it keeps the per-tick `updated` flags and the color
/// cache. Every write that changes a cell's material evicts the cached color
/// at that position.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    updated: Vec<bool>,
    colors: ColorCache,
}

impl Grid {
    /// Create a grid filled with empty cells
    ///
    /// Dimensions are expected to come from validated rules, which bound
    /// `width * height`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
            updated: vec![false; len],
            colors: ColorCache::new(len),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get cell at a valid position
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Get cell if the position is inside the grid
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32) -> Option<Cell> {
        if self.in_bounds(x, y) {
            Some(self.get(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Set cell at a valid position
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        if self.cells[idx].material() != cell.material() {
            self.colors.evict(idx);
        }
        self.cells[idx] = cell;
    }

    /// Swap two cells at valid positions
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        if self.cells[ia].material() != self.cells[ib].material() {
            self.colors.evict(ia);
            self.colors.evict(ib);
        }
        self.cells.swap(ia, ib);
    }

    #[inline]
    pub fn is_updated(&self, x: usize, y: usize) -> bool {
        self.updated[self.index(x, y)]
    }

    #[inline]
    pub fn mark_updated(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.updated[idx] = true;
    }

    pub fn clear_update_flags(&mut self) {
        self.updated.fill(false);
    }

    /// Reset every cell to empty and purge the color cache
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.updated.fill(false);
        self.colors.purge();
    }

    /// Cached color for the cell at `(x, y)`, resolving it on a miss
    pub fn color_at(&mut self, x: usize, y: usize, resolver: &ColorResolver) -> Option<Color> {
        let idx = self.index(x, y);
        if let Some(color) = self.colors.get(idx) {
            return Some(color);
        }

        let color = resolver.resolve(self.cells[idx].material(), x, y)?;
        self.colors.insert(idx, color);
        Some(color)
    }

    pub fn cached_colors(&self) -> usize {
        self.colors.cached_count()
    }

    /// Iterate `(x, y, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, *cell))
    }

    pub fn count(&self, material: Material) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.material() == material)
            .count()
    }
}
