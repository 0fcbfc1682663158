//! Per-cell color resolution with a positional cache
//!
//! Colors are a material's base HSL shifted by a small offset hashed from the
//! cell position, so a grain keeps its shade while it sits still and the
//! texture of a pile looks grainy rather than flat.

use crate::simulation::{Color, Material, Materials};

/// Resolves display colors for materials at grid positions
pub struct ColorResolver {
    base: [Option<Color>; Material::COUNT],
    variation: u8,
}

impl ColorResolver {
    pub fn new(materials: &Materials, variation: u8) -> Self {
        let mut base = [None; Material::COUNT];
        for material in Material::ALL {
            base[material.index()] = materials.get_color(material);
        }
        Self { base, variation }
    }

    /// Color for `material` at `(x, y)`; `None` for materials that are not drawn
    pub fn resolve(&self, material: Material, x: usize, y: usize) -> Option<Color> {
        let base = self.base[material.index()]?;
        if self.variation == 0 {
            return Some(base);
        }

        let hash = position_hash(x, y);
        let span = 2 * self.variation as u32 + 1;
        let dl = (hash % span) as i16 - self.variation as i16;
        let dh = ((hash >> 16) % 7) as i16 - 3;
        Some(base.offset(dh, dl))
    }
}

/// Stable integer hash of a grid position
fn position_hash(x: usize, y: usize) -> u32 {
    let mut h = (x as u32).wrapping_mul(0x9E37_79B1) ^ (y as u32).wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h = h.wrapping_mul(0x297A_2D39);
    h ^= h >> 15;
    h
}

/// Memoized colors, one slot per grid cell (indexed `y * width + x`)
///
/// A slot is `None` until the color is first looked up, and is reset to
/// `None` by the grid whenever the material at that position changes.
pub struct ColorCache {
    slots: Vec<Option<Color>>,
}

impl ColorCache {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.slots[index]
    }

    pub fn insert(&mut self, index: usize, color: Color) {
        self.slots[index] = Some(color);
    }

    pub fn evict(&mut self, index: usize) {
        self.slots[index] = None;
    }

    pub fn purge(&mut self) {
        self.slots.fill(None);
    }

    /// Number of populated slots
    pub fn cached_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
