//! World management - grid storage, update pass, colors

mod ca_update;
mod chemistry_system;
mod color_cache;
mod grid;
mod neighbor_queries;
pub mod rng_trait;
mod simulation;
pub mod stats;

pub use ca_update::CellularAutomataUpdater;
pub use chemistry_system::ChemistrySystem;
pub use color_cache::{ColorCache, ColorResolver};
pub use grid::Grid;
pub use neighbor_queries::{MOORE_OFFSETS, NeighborQueries, ORTHOGONAL_OFFSETS};
pub use rng_trait::{SimRng, WorldRng, seeded_rng};
pub use simulation::{FIXED_TIMESTEP, MAX_STEPS_PER_FRAME, Simulation};
pub use stats::{MaterialCounts, NoopStats, SimStats, TickStats};
