//! Brush painting - turns pointer strokes into batched cell writes
//!
//! A command carries the current pointer cell and optionally the previous one.
//! The segment between them is interpolated so a fast drag leaves no gaps,
//! and a circular brush is stamped at every interpolated point.
//!
//! Painting a material only fills empty cells. Erasing clears anything.
//! Commands are validated up front, so a rejected command writes nothing.

mod stroke;

pub use stroke::{clip, interpolate};

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::simulation::{Cell, Material, ParseMaterialError, SimulationRules};
use crate::world::{ChemistrySystem, Grid, NeighborQueries, WorldRng};

/// Caller-visible reasons a paint command is dropped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    #[error("brush radius must not be negative (got {0})")]
    NegativeRadius(i32),
    #[error("brush radius {radius} outside {min}..={max}")]
    RadiusOutOfRange { radius: i32, min: i32, max: i32 },
    #[error(transparent)]
    UnknownMaterial(#[from] ParseMaterialError),
}

/// What a brush writes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BrushMaterial {
    /// Fill empty cells with a material
    Paint(Material),
    /// Clear any cell back to empty
    Erase,
}

impl BrushMaterial {
    /// Material written into target cells
    pub fn material(&self) -> Material {
        match self {
            BrushMaterial::Paint(material) => *material,
            BrushMaterial::Erase => Material::Empty,
        }
    }

    /// Whether this brush may write over `target`
    pub fn can_overwrite(&self, target: &Cell) -> bool {
        match self {
            BrushMaterial::Erase => true,
            BrushMaterial::Paint(_) => target.is_empty(),
        }
    }
}

impl From<Material> for BrushMaterial {
    fn from(material: Material) -> Self {
        match material {
            Material::Empty => BrushMaterial::Erase,
            other => BrushMaterial::Paint(other),
        }
    }
}

impl FromStr for BrushMaterial {
    type Err = ParseMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "erase" | "eraser" => Ok(BrushMaterial::Erase),
            other => other.parse::<Material>().map(BrushMaterial::from),
        }
    }
}

impl TryFrom<String> for BrushMaterial {
    type Error = ParseMaterialError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<BrushMaterial> for String {
    fn from(brush: BrushMaterial) -> Self {
        brush.to_string()
    }
}

impl fmt::Display for BrushMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrushMaterial::Paint(material) => write!(f, "{}", material),
            BrushMaterial::Erase => f.write_str("erase"),
        }
    }
}

/// One brush application in grid coordinates
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintCommand {
    pub material: BrushMaterial,
    /// Current pointer cell (brush center)
    pub to: IVec2,
    /// Previous pointer cell of the drag, if any
    #[serde(default)]
    pub from: Option<IVec2>,
    /// Brush radius in cells
    pub radius: i32,
}

impl PaintCommand {
    pub fn new(material: impl Into<BrushMaterial>, to: IVec2, radius: i32) -> Self {
        Self {
            material: material.into(),
            to,
            from: None,
            radius,
        }
    }

    /// Build a command from a material tag such as `"sand"` or `"erase"`
    pub fn from_tag(tag: &str, to: IVec2, radius: i32) -> Result<Self, PaintError> {
        let material: BrushMaterial = tag.parse()?;
        Ok(Self::new(material, to, radius))
    }

    /// Interpolate from the previous pointer cell
    pub fn with_previous(mut self, from: IVec2) -> Self {
        self.from = Some(from);
        self
    }

    pub fn validate(&self, rules: &SimulationRules) -> Result<(), PaintError> {
        if self.radius < 0 {
            return Err(PaintError::NegativeRadius(self.radius));
        }
        if self.radius < rules.min_brush_radius || self.radius > rules.max_brush_radius {
            return Err(PaintError::RadiusOutOfRange {
                radius: self.radius,
                min: rules.min_brush_radius,
                max: rules.max_brush_radius,
            });
        }
        Ok(())
    }
}

/// Apply a validated command to the grid, returning the number of cells written
pub fn apply<R: WorldRng>(
    grid: &mut Grid,
    rules: &SimulationRules,
    command: &PaintCommand,
    rng: &mut R,
) -> Result<usize, PaintError> {
    command.validate(rules)?;

    let from = command.from.unwrap_or(command.to);

    // Centers farther than one radius outside the grid can't touch it
    let padding = IVec2::splat(command.radius);
    let grid_max = IVec2::new(
        i32::try_from(grid.width()).unwrap_or(i32::MAX) - 1,
        i32::try_from(grid.height()).unwrap_or(i32::MAX) - 1,
    );
    let Some((start, end)) = clip(
        from,
        command.to,
        IVec2::ZERO.saturating_sub(padding),
        grid_max.saturating_add(padding),
    ) else {
        log::trace!("Stroke {:?} -> {:?} misses the grid", from, command.to);
        return Ok(0);
    };

    let mut targets: Vec<(usize, usize)> = interpolate(start, end)
        .into_iter()
        .flat_map(|point| NeighborQueries::positions_in_radius(grid, point.x, point.y, command.radius))
        .collect();
    targets.sort_unstable_by_key(|&(x, y)| (y, x));
    targets.dedup();

    let mut written = 0;
    for (x, y) in targets {
        if !command.material.can_overwrite(&grid.get(x, y)) {
            continue;
        }
        let life = match command.material.material() {
            Material::Fire => ChemistrySystem::fresh_fire_life(rules, rng),
            _ => 0,
        };
        grid.set(x, y, Cell::from_material(command.material.material(), life));
        written += 1;
    }

    log::trace!(
        "Painted {} cells of {} along {:?} -> {:?}",
        written,
        command.material,
        from,
        command.to
    );

    Ok(written)
}
