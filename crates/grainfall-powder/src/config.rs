//! Demo configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `grainfall.ron` file (if exists), or an explicit file passed on the CLI
//! 3. Environment variables prefixed with `GRAINFALL_`
//!
//! Example environment variable: `GRAINFALL_RULES__FIRE_SPREAD_CHANCE=0.25`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use grainfall_simulation::SimulationRules;
use serde::{Deserialize, Serialize};

/// Main configuration for the Powder demo
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PowderConfig {
    #[serde(default)]
    pub rules: SimulationRules,

    #[serde(default)]
    pub run: RunConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Headless run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for the simulation RNG
    pub seed: u64,
    /// Ticks to simulate before rendering
    pub ticks: u64,
    /// Brush radius for scene strokes that don't set one
    pub brush_radius: i32,
    /// Log statistics every this many ticks (0 disables)
    pub stats_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks: 600,
            brush_radius: 3,
            stats_interval: 60,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Print the final grid as text
    pub ascii: bool,
    /// Background RGB for empty cells in image output
    pub background: [u8; 3],
    /// Output pixels per cell in image output
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ascii: true,
            background: [18, 18, 24],
            scale: 4,
        }
    }
}

impl PowderConfig {
    /// Load configuration from all sources
    ///
    /// `path` replaces the optional `grainfall.ron` lookup with a file that
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("grainfall")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1 is the serde defaults on every section
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (GRAINFALL_RUN__SEED, etc.)
            .add_source(Environment::with_prefix("GRAINFALL").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}
