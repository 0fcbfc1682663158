//! Cell records stored in the grid

use serde::{Deserialize, Serialize};

use crate::Material;

/// A single cell in the grid
///
/// Only fire carries a lifespan and only plant carries a growth marker, so
/// records like "sand with a burn timer" cannot be built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Sand,
    Water,
    /// Burning cell with remaining life in ticks
    Fire { life: u16 },
    Stone,
    /// `growing` marks cells produced by upward growth
    Plant { growing: bool },
    Wood,
}

impl Cell {
    /// Build a cell for a material, using `fire_life` when the material is fire
    pub fn from_material(material: Material, fire_life: u16) -> Self {
        match material {
            Material::Empty => Cell::Empty,
            Material::Sand => Cell::Sand,
            Material::Water => Cell::Water,
            Material::Fire => Cell::Fire { life: fire_life },
            Material::Stone => Cell::Stone,
            Material::Plant => Cell::Plant { growing: false },
            Material::Wood => Cell::Wood,
        }
    }

    pub fn material(&self) -> Material {
        match self {
            Cell::Empty => Material::Empty,
            Cell::Sand => Material::Sand,
            Cell::Water => Material::Water,
            Cell::Fire { .. } => Material::Fire,
            Cell::Stone => Material::Stone,
            Cell::Plant { .. } => Material::Plant,
            Cell::Wood => Material::Wood,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_round_trip() {
        for material in Material::ALL {
            assert_eq!(Cell::from_material(material, 10).material(), material);
        }
    }

    #[test]
    fn test_fire_carries_life() {
        assert_eq!(Cell::from_material(Material::Fire, 42), Cell::Fire { life: 42 });
        assert_eq!(Cell::from_material(Material::Sand, 42), Cell::Sand);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::Stone.is_empty());
    }
}
