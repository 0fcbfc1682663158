//! Simulation data - materials, cells, rule tunables

// Re-export from grainfall-simulation so callers only need this crate
pub use grainfall_simulation::{
    Cell, Color, Material, MaterialDef, MaterialType, Materials, ParseMaterialError, RulesError,
    SimulationRules,
};
