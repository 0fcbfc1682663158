//! Application state and headless run loop for the Powder demo

use anyhow::Result;
use grainfall_core::Simulation;
use grainfall_core::world::{MaterialCounts, SimRng, TickStats, seeded_rng};

use crate::config::PowderConfig;
use crate::scene::{Scene, SceneStroke};
use crate::tools::{Stroke, tool_for};

/// Totals over a whole run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub ticks: u64,
    pub pixels_moved: u64,
    pub state_changes: u64,
    pub reactions: u64,
    /// Strokes that painted at least one sample
    pub strokes_applied: usize,
    pub population: MaterialCounts,
}

/// Main application state
pub struct App {
    // Simulation
    sim: Simulation,
    rng: SimRng,
    config: PowderConfig,

    // Scripted input
    scene: Scene,
    stroke: Stroke,
}

impl App {
    /// Create a new app
    pub fn new(config: PowderConfig, scene: Scene) -> Result<Self> {
        let sim = Simulation::new(config.rules.clone())?;
        let rng = seeded_rng(config.run.seed);

        log::info!(
            "Seed {}, scene '{}' ({} strokes)",
            config.run.seed,
            scene.name,
            scene.strokes.len()
        );

        Ok(Self {
            sim,
            rng,
            config,
            scene,
            stroke: Stroke::new(),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn config(&self) -> &PowderConfig {
        &self.config
    }

    /// Run `ticks` steps, replaying scene strokes before each step
    pub fn run(&mut self, ticks: u64) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut interval = TickStats::default();
        let stats_interval = self.config.run.stats_interval;

        for _ in 0..ticks {
            let tick = self.sim.tick();
            summary.strokes_applied += self.apply_scene_strokes(tick);

            let mut stats = TickStats::default();
            self.sim.step_with_stats(&mut stats, &mut self.rng);

            summary.ticks += 1;
            summary.pixels_moved += stats.pixels_moved as u64;
            summary.state_changes += stats.state_changes as u64;
            summary.reactions += stats.reactions as u64;
            interval.pixels_moved += stats.pixels_moved;
            interval.state_changes += stats.state_changes;
            interval.reactions += stats.reactions;

            if stats_interval > 0 && self.sim.tick() % stats_interval == 0 {
                log::info!(
                    "Tick {}: moved={} changes={} reactions={} | {}",
                    self.sim.tick(),
                    interval.pixels_moved,
                    interval.state_changes,
                    interval.reactions,
                    self.sim.population()
                );
                interval.reset();
            }
        }

        summary.population = self.sim.population();
        summary
    }

    /// Apply every stroke scheduled for `tick`, returning how many painted
    fn apply_scene_strokes(&mut self, tick: u64) -> usize {
        let strokes: Vec<SceneStroke> = self.scene.strokes_at(tick).cloned().collect();

        let mut applied = 0;
        for stroke in &strokes {
            if self.apply_stroke(stroke) {
                applied += 1;
            }
        }
        applied
    }

    fn apply_stroke(&mut self, stroke: &SceneStroke) -> bool {
        let brush = match stroke.brush() {
            Ok(brush) => brush,
            Err(err) => {
                log::warn!("Skipping stroke at tick {}: {}", stroke.tick, err);
                return false;
            }
        };
        let tool = tool_for(brush);
        let radius = stroke.radius.unwrap_or(self.config.run.brush_radius);

        let mut painted = false;
        for point in stroke.points() {
            match self
                .stroke
                .apply(tool.as_ref(), &mut self.sim, point, radius, &mut self.rng)
            {
                Ok(_) => painted = true,
                Err(err) => log::warn!("{} stroke at {}: {}", tool.name(), point, err),
            }
        }

        let written = self.stroke.end();
        log::debug!(
            "{} '{}' over {} samples wrote {} cells",
            tool.name(),
            brush,
            stroke.path.len(),
            written
        );
        painted
    }
}
