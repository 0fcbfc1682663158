//! # Grainfall Powder - headless Powder Game demo
//!
//! Replays scripted paint strokes into a Grainfall simulation, logs
//! statistics while it runs and dumps the final grid as text or a PPM image.

pub mod app;
pub mod config;
pub mod render;
pub mod scene;
pub mod tools;

pub use app::{App, RunSummary};
pub use config::PowderConfig;
pub use scene::Scene;
