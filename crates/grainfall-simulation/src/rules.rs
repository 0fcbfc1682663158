//! Tunable rule constants for the update pass and paint interface

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted cell count (width * height)
pub const MAX_CELLS: usize = 1 << 24;

/// Largest accepted brush radius bound
pub const MAX_BRUSH_RADIUS: i32 = 1024;

/// Rule tunables, read-only while the simulation runs
///
/// All probabilities are per tick. Fire probabilities apply per burning cell,
/// spread applies per flammable neighbor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRules {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,

    /// Chance that fire ignites one flammable neighbor
    pub fire_spread_chance: f32,
    /// Chance that a fire cell burns out early
    pub fire_extinguish_chance: f32,
    /// Shortest fresh fire life in ticks
    pub fire_life_min: u16,
    /// Longest fresh fire life in ticks
    pub fire_life_max: u16,
    /// Chance that fire moves into the empty cell above it
    pub fire_rise_chance: f32,
    /// Life lost when fire rises
    pub fire_rise_life_cost: u16,
    /// Chance that fire and an adjacent water cell cancel out
    pub quench_chance: f32,

    /// Chance that plant grows into the empty cell above
    pub plant_growth_chance: f32,
    /// Chance that plant spreads into an empty side neighbor
    pub plant_spread_chance: f32,
    /// Chance that plant converts an adjacent water cell
    pub plant_water_growth_chance: f32,

    /// Smallest accepted brush radius
    pub min_brush_radius: i32,
    /// Largest accepted brush radius
    pub max_brush_radius: i32,

    /// Maximum lightness offset applied per position when resolving colors
    pub color_variation: u8,
}

impl Default for SimulationRules {
    fn default() -> Self {
        Self {
            width: 160,
            height: 100,
            fire_spread_chance: 0.1,
            fire_extinguish_chance: 0.02,
            fire_life_min: 20,
            fire_life_max: 80,
            fire_rise_chance: 0.3,
            fire_rise_life_cost: 2,
            quench_chance: 0.5,
            plant_growth_chance: 0.005,
            plant_spread_chance: 0.002,
            plant_water_growth_chance: 0.02,
            min_brush_radius: 0,
            max_brush_radius: 20,
            color_variation: 8,
        }
    }
}

/// Invalid rule configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid of {width}x{height} exceeds {max} cells")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("probability `{name}` must be within 0..=1 (got {value})")]
    Probability { name: &'static str, value: f32 },
    #[error("fire life range {min}..={max} is invalid")]
    FireLife { min: u16, max: u16 },
    #[error("brush radius range {min}..={max} is invalid")]
    BrushRadius { min: i32, max: i32 },
}

impl SimulationRules {
    /// Rules with the given grid size and default tunables
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Range a fresh fire life is drawn from
    pub fn fire_life_range(&self) -> RangeInclusive<u16> {
        self.fire_life_min..=self.fire_life_max
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.width == 0 || self.height == 0 {
            return Err(RulesError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        if self
            .width
            .checked_mul(self.height)
            .is_none_or(|cells| cells > MAX_CELLS)
        {
            return Err(RulesError::TooLarge {
                width: self.width,
                height: self.height,
                max: MAX_CELLS,
            });
        }

        for (name, value) in [
            ("fire_spread_chance", self.fire_spread_chance),
            ("fire_extinguish_chance", self.fire_extinguish_chance),
            ("fire_rise_chance", self.fire_rise_chance),
            ("quench_chance", self.quench_chance),
            ("plant_growth_chance", self.plant_growth_chance),
            ("plant_spread_chance", self.plant_spread_chance),
            ("plant_water_growth_chance", self.plant_water_growth_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RulesError::Probability { name, value });
            }
        }

        if self.fire_life_min == 0 || self.fire_life_min > self.fire_life_max {
            return Err(RulesError::FireLife {
                min: self.fire_life_min,
                max: self.fire_life_max,
            });
        }

        if self.min_brush_radius < 0
            || self.min_brush_radius > self.max_brush_radius
            || self.max_brush_radius > MAX_BRUSH_RADIUS
        {
            return Err(RulesError::BrushRadius {
                min: self.min_brush_radius,
                max: self.max_brush_radius,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let rules = SimulationRules::default();
        assert_eq!(rules.validate(), Ok(()));
        assert_eq!(rules.fire_life_range(), 20..=80);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let rules = SimulationRules::with_size(0, 10);
        assert_eq!(
            rules.validate(),
            Err(RulesError::EmptyGrid {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_rejects_bad_probability() {
        let rules = SimulationRules {
            fire_spread_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(RulesError::Probability {
                name: "fire_spread_chance",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_fire_life() {
        let rules = SimulationRules {
            fire_life_min: 50,
            fire_life_max: 10,
            ..Default::default()
        };
        assert_eq!(
            rules.validate(),
            Err(RulesError::FireLife { min: 50, max: 10 })
        );
    }

    #[test]
    fn test_rejects_zero_fire_life() {
        let rules = SimulationRules {
            fire_life_min: 0,
            ..Default::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        // Product overflows usize on 64-bit targets
        let rules = SimulationRules::with_size(1 << 32, 1 << 32);
        assert!(matches!(
            rules.validate(),
            Err(RulesError::TooLarge { max: MAX_CELLS, .. })
        ));

        let rules = SimulationRules::with_size(usize::MAX, 2);
        assert!(matches!(rules.validate(), Err(RulesError::TooLarge { .. })));

        let rules = SimulationRules::with_size(1 << 13, 1 << 12);
        assert_eq!(
            rules.validate(),
            Err(RulesError::TooLarge {
                width: 1 << 13,
                height: 1 << 12,
                max: MAX_CELLS
            })
        );
    }

    #[test]
    fn test_accepts_largest_grid() {
        let rules = SimulationRules::with_size(1 << 12, 1 << 12);
        assert_eq!(rules.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_huge_brush_radius() {
        let rules = SimulationRules {
            max_brush_radius: i32::MAX,
            ..Default::default()
        };
        assert_eq!(
            rules.validate(),
            Err(RulesError::BrushRadius {
                min: 0,
                max: i32::MAX
            })
        );
    }
}
