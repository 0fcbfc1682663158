//! Cellular automata update logic - material movement physics

use super::Grid;
use crate::simulation::Cell;
use crate::world::{SimStats, WorldRng};

/// Cellular automata updater - handles sand and water movement
pub struct CellularAutomataUpdater;

impl CellularAutomataUpdater {
    /// Update powder material (falls down, slides diagonally, sinks through water)
    ///
    /// Returns true if the grain moved.
    pub fn update_powder<R: WorldRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        // Try to move down
        if Self::try_move(grid, x, y, 0, 1, Self::powder_can_enter, stats) {
            return true;
        }

        // Try diagonal dispersal (random direction)
        let dx = if rng.gen_bool() { -1 } else { 1 };
        if Self::try_move(grid, x, y, dx, 1, Self::powder_can_enter, stats) {
            return true;
        }

        // Try opposite diagonal
        Self::try_move(grid, x, y, -dx, 1, Self::powder_can_enter, stats)
    }

    /// Update liquid material (falls down, otherwise flows horizontally)
    ///
    /// Returns true if the liquid moved.
    pub fn update_liquid<R: WorldRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        // Try to move down first
        if Self::try_move(grid, x, y, 0, 1, Cell::is_empty, stats) {
            return true;
        }

        // Try to flow horizontally (random direction first)
        let dx = if rng.gen_bool() { -1 } else { 1 };
        if Self::try_move(grid, x, y, dx, 0, Cell::is_empty, stats) {
            return true;
        }

        // Try opposite direction
        Self::try_move(grid, x, y, -dx, 0, Cell::is_empty, stats)
    }

    /// Sand displaces empty space and water only
    fn powder_can_enter(target: &Cell) -> bool {
        matches!(target, Cell::Empty | Cell::Water)
    }

    /// Try to swap the cell at `(x, y)` with the one at `(x + dx, y + dy)`
    ///
    /// Out-of-bounds targets and targets rejected by `can_enter` are not a
    /// valid move. On success both positions are marked updated.
    fn try_move(
        grid: &mut Grid,
        x: usize,
        y: usize,
        dx: i32,
        dy: i32,
        can_enter: fn(&Cell) -> bool,
        stats: &mut dyn SimStats,
    ) -> bool {
        let to_x = x as i32 + dx;
        let to_y = y as i32 + dy;

        let Some(target) = grid.get_checked(to_x, to_y) else {
            return false;
        };

        if !can_enter(&target) {
            return false;
        }

        let (to_x, to_y) = (to_x as usize, to_y as usize);
        grid.swap((x, y), (to_x, to_y));
        grid.mark_updated(x, y);
        grid.mark_updated(to_x, to_y);
        stats.record_pixel_moved();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{NoopStats, TickStats};

    /// Test RNG that returns deterministic values
    struct TestRng {
        bool_value: bool,
    }

    impl TestRng {
        fn new(bool_value: bool) -> Self {
            Self { bool_value }
        }
    }

    impl WorldRng for TestRng {
        fn gen_bool(&mut self) -> bool {
            self.bool_value
        }

        fn gen_f32(&mut self) -> f32 {
            0.5
        }
    }

    fn grid_with(width: usize, height: usize, cells: &[(usize, usize, Cell)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y, cell) in cells {
            grid.set(x, y, cell);
        }
        grid
    }

    #[test]
    fn test_update_powder_falls_down() {
        let mut grid = grid_with(5, 5, &[(2, 1, Cell::Sand)]);
        let mut stats = TickStats::default();
        let mut rng = TestRng::new(true);

        assert!(CellularAutomataUpdater::update_powder(
            &mut grid, 2, 1, &mut stats, &mut rng
        ));

        assert_eq!(grid.get(2, 1), Cell::Empty);
        assert_eq!(grid.get(2, 2), Cell::Sand);
        assert!(grid.is_updated(2, 1));
        assert!(grid.is_updated(2, 2));
        assert_eq!(stats.pixels_moved, 1);
    }

    #[test]
    fn test_update_powder_stops_on_solid() {
        let mut grid = grid_with(
            5,
            5,
            &[
                (2, 1, Cell::Sand),
                (2, 2, Cell::Stone),
                (1, 2, Cell::Stone),
                (3, 2, Cell::Wood),
            ],
        );
        let mut stats = NoopStats;
        let mut rng = TestRng::new(true);

        assert!(!CellularAutomataUpdater::update_powder(
            &mut grid, 2, 1, &mut stats, &mut rng
        ));

        assert_eq!(grid.get(2, 1), Cell::Sand);
        assert!(!grid.is_updated(2, 1));
    }

    #[test]
    fn test_update_powder_slides_diagonally() {
        let mut grid = grid_with(5, 5, &[(2, 1, Cell::Sand), (2, 2, Cell::Stone)]);
        let mut stats = NoopStats;
        let mut rng = TestRng::new(true); // Will try left diagonal first

        CellularAutomataUpdater::update_powder(&mut grid, 2, 1, &mut stats, &mut rng);

        assert_eq!(grid.get(2, 1), Cell::Empty);
        assert_eq!(grid.get(1, 2), Cell::Sand);
    }

    #[test]
    fn test_update_powder_uses_opposite_diagonal() {
        let mut grid = grid_with(
            5,
            5,
            &[(2, 1, Cell::Sand), (2, 2, Cell::Stone), (1, 2, Cell::Stone)],
        );
        let mut stats = NoopStats;
        let mut rng = TestRng::new(true);

        CellularAutomataUpdater::update_powder(&mut grid, 2, 1, &mut stats, &mut rng);

        assert_eq!(grid.get(3, 2), Cell::Sand);
    }

    #[test]
    fn test_update_powder_sinks_through_water() {
        let mut grid = grid_with(3, 3, &[(1, 0, Cell::Sand), (1, 1, Cell::Water)]);
        let mut stats = NoopStats;
        let mut rng = TestRng::new(false);

        CellularAutomataUpdater::update_powder(&mut grid, 1, 0, &mut stats, &mut rng);

        assert_eq!(grid.get(1, 0), Cell::Water);
        assert_eq!(grid.get(1, 1), Cell::Sand);
    }

    #[test]
    fn test_update_powder_does_not_displace_fire() {
        let mut grid = grid_with(
            1,
            2,
            &[(0, 0, Cell::Sand), (0, 1, Cell::Fire { life: 10 })],
        );
        let mut stats = NoopStats;
        let mut rng = TestRng::new(false);

        assert!(!CellularAutomataUpdater::update_powder(
            &mut grid, 0, 0, &mut stats, &mut rng
        ));
        assert_eq!(grid.get(0, 1), Cell::Fire { life: 10 });
    }

    #[test]
    fn test_update_powder_at_bottom_row() {
        let mut grid = grid_with(3, 2, &[(1, 1, Cell::Sand)]);
        let mut stats = NoopStats;
        let mut rng = TestRng::new(true);

        assert!(!CellularAutomataUpdater::update_powder(
            &mut grid, 1, 1, &mut stats, &mut rng
        ));
        assert_eq!(grid.get(1, 1), Cell::Sand);
    }

    #[test]
    fn test_update_liquid_falls_down() {
        let mut grid = grid_with(5, 5, &[(2, 1, Cell::Water)]);
        let mut stats = NoopStats;
        let mut rng = TestRng::new(true);

        CellularAutomataUpdater::update_liquid(&mut grid, 2, 1, &mut stats, &mut rng);

        assert_eq!(grid.get(2, 1), Cell::Empty);
        assert_eq!(grid.get(2, 2), Cell::Water);
    }

    #[test]
    fn test_update_liquid_flows_horizontally() {
        let mut grid = grid_with(5, 5, &[(2, 1, Cell::Water), (2, 2, Cell::Stone)]);
        let mut stats = NoopStats;
        let mut rng = TestRng::new(true); // Try left first

        CellularAutomataUpdater::update_liquid(&mut grid, 2, 1, &mut stats, &mut rng);

        assert_eq!(grid.get(2, 1), Cell::Empty);
        assert_eq!(grid.get(1, 1), Cell::Water);
    }

    #[test]
    fn test_update_liquid_spreads_on_bottom_row() {
        let mut grid = grid_with(3, 1, &[(1, 0, Cell::Water)]);
        let mut stats = NoopStats;
        let mut rng = TestRng::new(false); // Try right first

        assert!(CellularAutomataUpdater::update_liquid(
            &mut grid, 1, 0, &mut stats, &mut rng
        ));
        assert_eq!(grid.get(2, 0), Cell::Water);
    }

    #[test]
    fn test_update_liquid_does_not_fall_into_water() {
        let mut grid = grid_with(
            3,
            2,
            &[
                (1, 0, Cell::Water),
                (1, 1, Cell::Water),
                (0, 0, Cell::Stone),
                (2, 0, Cell::Stone),
            ],
        );
        let mut stats = TickStats::default();
        let mut rng = TestRng::new(true);

        assert!(!CellularAutomataUpdater::update_liquid(
            &mut grid, 1, 0, &mut stats, &mut rng
        ));
        assert!(stats.is_settled());
    }

    #[test]
    fn test_update_liquid_blocked_at_edges() {
        let mut grid = grid_with(1, 1, &[(0, 0, Cell::Water)]);
        let mut stats = NoopStats;
        let mut rng = TestRng::new(true);

        assert!(!CellularAutomataUpdater::update_liquid(
            &mut grid, 0, 0, &mut stats, &mut rng
        ));
        assert_eq!(grid.get(0, 0), Cell::Water);
    }
}
