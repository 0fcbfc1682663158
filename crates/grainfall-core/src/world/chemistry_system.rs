//! Chemistry system for fire, burning, quenching and plant growth

use super::neighbor_queries::NeighborQueries;
use super::Grid;
use crate::simulation::{Cell, Materials, SimulationRules};
use crate::world::{SimStats, WorldRng};

/// Handles chemistry simulation: combustion and organic growth
pub struct ChemistrySystem;

impl ChemistrySystem {
    /// Draw a fresh fire life from the configured range
    pub fn fresh_fire_life<R: WorldRng>(rules: &SimulationRules, rng: &mut R) -> u16 {
        rng.gen_range_u16(rules.fire_life_min, rules.fire_life_max)
    }

    /// Update a burning cell
    ///
    /// Burns down one tick of life, then ignites flammable neighbors, gets
    /// quenched by adjacent water, and may rise into empty space above.
    #[allow(clippy::too_many_arguments)]
    pub fn update_fire<R: WorldRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        life: u16,
        materials: &Materials,
        rules: &SimulationRules,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        grid.mark_updated(x, y);

        // 1. Burn down; finite life or a random early burn-out
        let life = life.saturating_sub(1);
        if life == 0 || rng.check_probability(rules.fire_extinguish_chance) {
            grid.set(x, y, Cell::Empty);
            stats.record_state_change();
            return;
        }
        grid.set(x, y, Cell::Fire { life });

        // 2. Contact with neighbors
        for (nx, ny, neighbor) in NeighborQueries::get_8_neighbors(grid, x, y) {
            match neighbor {
                Cell::Water => {
                    if rng.check_probability(rules.quench_chance) {
                        log::trace!("Fire at ({}, {}) quenched by water at ({}, {})", x, y, nx, ny);
                        grid.set(x, y, Cell::Empty);
                        grid.set(nx, ny, Cell::Empty);
                        grid.mark_updated(nx, ny);
                        stats.record_reaction();
                        return;
                    }
                }
                _ if materials.is_flammable(neighbor.material()) => {
                    if rng.check_probability(rules.fire_spread_chance) {
                        let fresh = Self::fresh_fire_life(rules, rng);
                        log::trace!("Fire spread to {} at ({}, {})", neighbor.material(), nx, ny);
                        grid.set(nx, ny, Cell::Fire { life: fresh });
                        grid.mark_updated(nx, ny);
                        stats.record_reaction();
                    }
                }
                _ => {}
            }
        }

        // 3. Rise into empty space above, paying some life
        if y > 0
            && life > rules.fire_rise_life_cost
            && grid.get(x, y - 1).is_empty()
            && rng.check_probability(rules.fire_rise_chance)
        {
            grid.set(x, y - 1, Cell::Fire {
                life: life - rules.fire_rise_life_cost,
            });
            grid.set(x, y, Cell::Empty);
            grid.mark_updated(x, y - 1);
            stats.record_state_change();
        }
    }

    /// Update a plant cell: upward growth, sideways spread, feeding on water
    pub fn update_plant<R: WorldRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        rules: &SimulationRules,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        // (a) Grow upward
        if y > 0
            && grid.get(x, y - 1).is_empty()
            && rng.check_probability(rules.plant_growth_chance)
        {
            grid.set(x, y - 1, Cell::Plant { growing: true });
            grid.mark_updated(x, y - 1);
            grid.mark_updated(x, y);
            stats.record_state_change();
        }

        // (b) Spread sideways (random direction)
        if rng.check_probability(rules.plant_spread_chance) {
            let dx = if rng.gen_bool() { -1 } else { 1 };
            let side_x = x as i32 + dx;
            if let Some(Cell::Empty) = grid.get_checked(side_x, y as i32) {
                let side_x = side_x as usize;
                grid.set(side_x, y, Cell::Plant { growing: false });
                grid.mark_updated(side_x, y);
                grid.mark_updated(x, y);
                stats.record_state_change();
            }
        }

        // (c) Water feeds growth
        for (nx, ny, neighbor) in NeighborQueries::get_orthogonal_neighbors(grid, x, y) {
            if neighbor == Cell::Water && rng.check_probability(rules.plant_water_growth_chance) {
                grid.set(nx, ny, Cell::Plant { growing: true });
                grid.mark_updated(nx, ny);
                grid.mark_updated(x, y);
                stats.record_reaction();
            }
        }
    }
}
