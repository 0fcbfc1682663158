//! Simulation statistics collection

use std::fmt;

use crate::simulation::Material;

/// Trait for collecting simulation statistics
///
/// Rule code records events through this trait so callers choose whether
/// counting costs anything.
pub trait SimStats {
    /// Record that a cell moved (swap or move into empty space)
    fn record_pixel_moved(&mut self);

    /// Record a spontaneous transition (burn-out, growth, rising fire)
    fn record_state_change(&mut self);

    /// Record a neighbor interaction (ignition, quench, water feeding a plant)
    fn record_reaction(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_pixel_moved(&mut self) {}
    fn record_state_change(&mut self) {}
    fn record_reaction(&mut self) {}
}

/// Counts events over one or more ticks
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickStats {
    pub pixels_moved: u32,
    pub state_changes: u32,
    pub reactions: u32,
}

impl TickStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing moved, changed or reacted
    pub fn is_settled(&self) -> bool {
        self.pixels_moved == 0 && self.state_changes == 0 && self.reactions == 0
    }
}

impl SimStats for TickStats {
    fn record_pixel_moved(&mut self) {
        self.pixels_moved += 1;
    }

    fn record_state_change(&mut self) {
        self.state_changes += 1;
    }

    fn record_reaction(&mut self) {
        self.reactions += 1;
    }
}

/// Number of cells holding each material
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaterialCounts {
    counts: [usize; Material::COUNT],
}

impl MaterialCounts {
    pub fn add(&mut self, material: Material) {
        self.counts[material.index()] += 1;
    }

    pub fn get(&self, material: Material) -> usize {
        self.counts[material.index()]
    }

    /// Total non-empty cells
    pub fn occupied(&self) -> usize {
        self.counts.iter().sum::<usize>() - self.get(Material::Empty)
    }
}

impl fmt::Display for MaterialCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for material in Material::ALL.into_iter().skip(1) {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}={}", material, self.get(material))?;
        }
        Ok(())
    }
}
