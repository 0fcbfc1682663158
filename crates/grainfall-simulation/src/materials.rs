//! Material definitions and registry

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Color;

/// Built-in materials
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Fire = 3,
    Stone = 4,
    Plant = 5,
    Wood = 6,
}

impl Material {
    /// Number of built-in materials
    pub const COUNT: usize = 7;

    /// All materials in id order
    pub const ALL: [Material; Self::COUNT] = [
        Material::Empty,
        Material::Sand,
        Material::Water,
        Material::Fire,
        Material::Stone,
        Material::Plant,
        Material::Wood,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Empty => "empty",
            Material::Sand => "sand",
            Material::Water => "water",
            Material::Fire => "fire",
            Material::Stone => "stone",
            Material::Plant => "plant",
            Material::Wood => "wood",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a material tag is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMaterialError {
    #[error("unknown material tag `{0}`")]
    UnknownTag(String),
}

impl FromStr for Material {
    type Err = ParseMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Material::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseMaterialError::UnknownTag(tag.to_string()))
    }
}

/// How a material behaves physically (its density class)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialType {
    /// Doesn't move (stone, wood)
    Solid,
    /// Falls straight down or diagonally, piles up (sand)
    Powder,
    /// Falls, then spreads horizontally to seek level (water)
    Liquid,
    /// Finite life, rises, spreads by contact (fire). Empty space is also gas-like.
    Gas,
    /// Grows in place, never falls (plant)
    Organic,
}

/// Definition of a material's static properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialDef {
    pub material: Material,
    pub material_type: MaterialType,

    /// Base display color (None = not drawn)
    pub color: Option<Color>,

    /// Whether fire can spread into this material
    pub flammable: bool,

    /// Glyph used by text renderers
    pub glyph: char,
}

impl Default for MaterialDef {
    fn default() -> Self {
        Self {
            material: Material::Empty,
            material_type: MaterialType::Gas,
            color: None,
            flammable: false,
            glyph: ' ',
        }
    }
}

/// Registry of all materials
pub struct Materials {
    materials: Vec<MaterialDef>,
}

impl Materials {
    pub fn new() -> Self {
        let mut materials = Self {
            materials: vec![MaterialDef::default(); Material::COUNT],
        };
        materials.register_defaults();
        materials
    }

    fn register_defaults(&mut self) {
        self.register(MaterialDef {
            material: Material::Empty,
            ..Default::default()
        });

        self.register(MaterialDef {
            material: Material::Sand,
            material_type: MaterialType::Powder,
            color: Some(Color::hsl(45, 70, 65)),
            glyph: '.',
            ..Default::default()
        });

        self.register(MaterialDef {
            material: Material::Water,
            material_type: MaterialType::Liquid,
            color: Some(Color::hsl(210, 80, 55)),
            glyph: '~',
            ..Default::default()
        });

        self.register(MaterialDef {
            material: Material::Fire,
            material_type: MaterialType::Gas,
            color: Some(Color::hsl(20, 100, 55)),
            glyph: '^',
            ..Default::default()
        });

        self.register(MaterialDef {
            material: Material::Stone,
            material_type: MaterialType::Solid,
            color: Some(Color::hsl(0, 0, 50)),
            glyph: '#',
            ..Default::default()
        });

        // Plant - grows, feeds on water, burns
        self.register(MaterialDef {
            material: Material::Plant,
            material_type: MaterialType::Organic,
            color: Some(Color::hsl(120, 60, 35)),
            flammable: true,
            glyph: '*',
        });

        self.register(MaterialDef {
            material: Material::Wood,
            material_type: MaterialType::Solid,
            color: Some(Color::hsl(30, 50, 30)),
            flammable: true,
            glyph: '=',
        });
    }

    fn register(&mut self, def: MaterialDef) {
        let index = def.material.index();
        self.materials[index] = def;
    }

    /// Get material definition
    pub fn get(&self, material: Material) -> &MaterialDef {
        &self.materials[material.index()]
    }

    pub fn is_flammable(&self, material: Material) -> bool {
        self.get(material).flammable
    }

    /// Get base color for a material
    pub fn get_color(&self, material: Material) -> Option<Color> {
        self.get(material).color
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialDef> {
        self.materials.iter()
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_ids() {
        let materials = Materials::new();
        for material in Material::ALL {
            assert_eq!(materials.get(material).material, material);
        }
    }

    #[test]
    fn test_flammability() {
        let materials = Materials::new();
        assert!(materials.is_flammable(Material::Plant));
        assert!(materials.is_flammable(Material::Wood));
        assert!(!materials.is_flammable(Material::Stone));
        assert!(!materials.is_flammable(Material::Sand));
        assert!(!materials.is_flammable(Material::Water));
        assert!(!materials.is_flammable(Material::Fire));
    }

    #[test]
    fn test_density_classes() {
        let materials = Materials::new();
        assert_eq!(materials.get(Material::Sand).material_type, MaterialType::Powder);
        assert_eq!(materials.get(Material::Water).material_type, MaterialType::Liquid);
        assert_eq!(materials.get(Material::Fire).material_type, MaterialType::Gas);
        assert_eq!(materials.get(Material::Plant).material_type, MaterialType::Organic);
        assert_eq!(materials.get(Material::Stone).material_type, MaterialType::Solid);
        assert_eq!(materials.get(Material::Wood).material_type, MaterialType::Solid);
    }

    #[test]
    fn test_empty_has_no_color() {
        let materials = Materials::new();
        assert!(materials.get_color(Material::Empty).is_none());
        assert!(materials.get_color(Material::Sand).is_some());
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("sand".parse::<Material>(), Ok(Material::Sand));
        assert_eq!(" Water ".parse::<Material>(), Ok(Material::Water));
        assert_eq!(
            "lava".parse::<Material>(),
            Err(ParseMaterialError::UnknownTag("lava".to_string()))
        );
    }
}
