pub mod paint;
pub mod simulation;
pub mod world;

pub use paint::{BrushMaterial, PaintCommand, PaintError};
pub use world::{Simulation, WorldRng};
