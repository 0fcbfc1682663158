//! Material simulation data for Grainfall
//!
//! This crate provides the foundational data types for the falling-sand engine:
//! - Material definitions (Material, MaterialDef, Materials)
//! - Density classes (MaterialType)
//! - Cell records (Cell)
//! - Rule tunables (SimulationRules)
//! - Display colors (Color)

mod cell;
mod color;
mod materials;
mod rules;

pub use cell::Cell;
pub use color::Color;
pub use materials::{Material, MaterialDef, MaterialType, Materials, ParseMaterialError};
pub use rules::{MAX_BRUSH_RADIUS, MAX_CELLS, RulesError, SimulationRules};
