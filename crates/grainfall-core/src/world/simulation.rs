//! Simulation owner - update pass, painting and render snapshot

use crate::paint::{self, PaintCommand, PaintError};
use crate::simulation::{Cell, Color, MaterialType, Materials, RulesError, SimulationRules};
use crate::world::{
    CellularAutomataUpdater, ChemistrySystem, ColorResolver, Grid, MaterialCounts, NoopStats,
    SimStats, WorldRng,
};

/// Fixed simulation step used by [`Simulation::update`]
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Most steps [`Simulation::update`] runs for a single frame
pub const MAX_STEPS_PER_FRAME: u32 = 2;

/// Owns the grid, the rule table and the color cache
///
/// `step` and `paint` are the only mutation paths; a renderer reads colors
/// after both have finished for the frame.
pub struct Simulation {
    grid: Grid,
    materials: Materials,
    rules: SimulationRules,
    resolver: ColorResolver,

    tick: u64,
    time_accumulator: f32,
    speed: f32,
    paused: bool,
}

impl Simulation {
    /// Create an all-empty simulation sized by `rules`
    pub fn new(rules: SimulationRules) -> Result<Self, RulesError> {
        rules.validate()?;

        let materials = Materials::new();
        let resolver = ColorResolver::new(&materials, rules.color_variation);
        let grid = Grid::new(rules.width, rules.height);

        log::info!(
            "Created {}x{} simulation ({} cells)",
            rules.width,
            rules.height,
            rules.width * rules.height
        );

        Ok(Self {
            grid,
            materials,
            rules,
            resolver,
            tick: 0,
            time_accumulator: 0.0,
            speed: 1.0,
            paused: false,
        })
    }

    /// Create a simulation with default tunables
    pub fn with_size(width: usize, height: usize) -> Result<Self, RulesError> {
        Self::new(SimulationRules::with_size(width, height))
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup; writes still evict cached colors
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn rules(&self) -> &SimulationRules {
        &self.rules
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    /// Number of completed steps
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the simulation speed multiplier (clamped to 0.25-4.0)
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(0.25, 4.0);
    }

    /// Advance by wall-clock time, running fixed steps
    ///
    /// Runs at most [`MAX_STEPS_PER_FRAME`] steps so a slow frame makes the
    /// simulation slow down instead of trying to catch up. Returns the number
    /// of steps taken. Does nothing while paused.
    pub fn update<R: WorldRng>(&mut self, dt: f32, rng: &mut R) -> u32 {
        if self.paused {
            return 0;
        }

        self.time_accumulator += dt.max(0.0) * self.speed;

        let mut steps = 0;
        while self.time_accumulator >= FIXED_TIMESTEP && steps < MAX_STEPS_PER_FRAME {
            self.step(rng);
            self.time_accumulator -= FIXED_TIMESTEP;
            steps += 1;
        }

        // Clamp accumulator to prevent runaway
        if self.time_accumulator > FIXED_TIMESTEP * 2.0 {
            self.time_accumulator = FIXED_TIMESTEP;
        }

        steps
    }

    /// Advance the whole grid by exactly one tick
    pub fn step<R: WorldRng>(&mut self, rng: &mut R) {
        self.step_with_stats(&mut NoopStats, rng);
    }

    /// Advance one tick, recording moves and transitions into `stats`
    pub fn step_with_stats<R: WorldRng>(&mut self, stats: &mut dyn SimStats, rng: &mut R) {
        // 1. Clear update flags
        self.grid.clear_update_flags();

        let width = self.grid.width();

        // 2. Bottom row first, so a falling cell lands in a row already processed
        for y in (0..self.grid.height()).rev() {
            // 3. Random scan direction per row to avoid lateral drift
            if rng.gen_bool() {
                for x in 0..width {
                    self.update_cell(x, y, stats, rng);
                }
            } else {
                for x in (0..width).rev() {
                    self.update_cell(x, y, stats, rng);
                }
            }
        }

        self.tick += 1;
    }

    fn update_cell<R: WorldRng>(
        &mut self,
        x: usize,
        y: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        // 4. Each cell takes one turn per tick
        if self.grid.is_updated(x, y) {
            return;
        }

        let cell = self.grid.get(x, y);

        // 5. Dispatch on material
        match cell {
            Cell::Empty => {}
            Cell::Fire { life } => {
                ChemistrySystem::update_fire(
                    &mut self.grid,
                    x,
                    y,
                    life,
                    &self.materials,
                    &self.rules,
                    stats,
                    rng,
                );
            }
            _ => match self.materials.get(cell.material()).material_type {
                MaterialType::Powder => {
                    CellularAutomataUpdater::update_powder(&mut self.grid, x, y, stats, rng);
                }
                MaterialType::Liquid => {
                    CellularAutomataUpdater::update_liquid(&mut self.grid, x, y, stats, rng);
                }
                MaterialType::Organic => {
                    ChemistrySystem::update_plant(&mut self.grid, x, y, &self.rules, stats, rng);
                }
                MaterialType::Solid | MaterialType::Gas => {
                    // Stone never changes; wood only changes by catching fire
                }
            },
        }
    }

    /// Reset the grid to all-empty and purge cached colors
    pub fn clear(&mut self) {
        self.grid.clear();
        log::info!("Cleared simulation at tick {}", self.tick);
    }

    /// Apply a brush command between ticks
    ///
    /// Invalid commands are rejected without touching the grid. Returns the
    /// number of cells written.
    pub fn paint<R: WorldRng>(
        &mut self,
        command: &PaintCommand,
        rng: &mut R,
    ) -> Result<usize, PaintError> {
        paint::apply(&mut self.grid, &self.rules, command, rng).inspect_err(|err| {
            log::debug!("Rejected paint command {:?}: {}", command, err);
        })
    }

    /// Display color of the cell at `(x, y)`, `None` for empty or out-of-range cells
    pub fn color_at(&mut self, x: usize, y: usize) -> Option<Color> {
        if x >= self.grid.width() || y >= self.grid.height() {
            return None;
        }
        self.grid.color_at(x, y, &self.resolver)
    }

    /// Every occupied cell as `(x, y, color)`, row-major
    pub fn snapshot(&mut self) -> Vec<(usize, usize, Color)> {
        let mut occupied = Vec::new();
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if let Some(color) = self.grid.color_at(x, y, &self.resolver) {
                    occupied.push((x, y, color));
                }
            }
        }
        occupied
    }

    /// Fill an RGBA buffer of `width * height * 4` bytes; empty cells are transparent
    ///
    /// A buffer of any other length is left untouched.
    pub fn write_rgba(&mut self, buffer: &mut [u8]) {
        let expected = self.grid.width() * self.grid.height() * 4;
        if buffer.len() != expected {
            log::warn!(
                "RGBA buffer has {} bytes, expected {} for a {}x{} grid",
                buffer.len(),
                expected,
                self.grid.width(),
                self.grid.height()
            );
            return;
        }

        let width = self.grid.width();
        for (i, pixel) in buffer.chunks_exact_mut(4).enumerate() {
            let (x, y) = (i % width, i / width);
            let rgba = self
                .grid
                .color_at(x, y, &self.resolver)
                .map_or([0, 0, 0, 0], |color| color.to_rgba());
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Count cells per material
    pub fn population(&self) -> MaterialCounts {
        let mut counts = MaterialCounts::default();
        for (_, _, cell) in self.grid.iter() {
            counts.add(cell.material());
        }
        counts
    }
}
