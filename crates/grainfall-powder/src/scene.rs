//! Scripted scenes - paint strokes replayed at fixed ticks
//!
//! Scenes are RON files:
//!
//! ```text
//! (
//!     name: "campfire",
//!     strokes: [
//!         (tick: 0, material: "wood", path: [(30, 50), (50, 50)], radius: Some(1)),
//!         (tick: 5, material: "fire", path: [(40, 47)]),
//!     ],
//! )
//! ```

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use glam::IVec2;
use grainfall_core::BrushMaterial;
use serde::{Deserialize, Serialize};

/// One drag gesture applied at the start of `tick`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStroke {
    pub tick: u64,
    /// Material tag, `"erase"` clears
    pub material: String,
    /// Pointer samples of the drag in grid cells
    pub path: Vec<(i32, i32)>,
    /// Brush radius, the configured default when absent
    #[serde(default)]
    pub radius: Option<i32>,
}

impl SceneStroke {
    pub fn brush(&self) -> Result<BrushMaterial, grainfall_simulation::ParseMaterialError> {
        BrushMaterial::from_str(&self.material)
    }

    pub fn points(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.path.iter().map(|&(x, y)| IVec2::new(x, y))
    }
}

/// A named list of strokes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub strokes: Vec<SceneStroke>,
}

impl Scene {
    /// Parse a scene and order its strokes by tick
    ///
    /// Strokes with unknown materials are logged and dropped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut scene: Scene = ron::from_str(source).context("Failed to parse scene")?;

        scene.strokes.retain(|stroke| match stroke.brush() {
            Ok(_) => true,
            Err(err) => {
                log::warn!("Dropping stroke at tick {}: {}", stroke.tick, err);
                false
            }
        });
        // Stable, so strokes sharing a tick keep file order
        scene.strokes.sort_by_key(|stroke| stroke.tick);

        Ok(scene)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        let scene = Self::parse(&source)?;
        log::info!(
            "Loaded scene '{}' with {} strokes from {}",
            scene.name,
            scene.strokes.len(),
            path.display()
        );
        Ok(scene)
    }

    /// Strokes scheduled for `tick`, in file order
    pub fn strokes_at(&self, tick: u64) -> impl Iterator<Item = &SceneStroke> {
        let start = self.strokes.partition_point(|stroke| stroke.tick < tick);
        self.strokes[start..]
            .iter()
            .take_while(move |stroke| stroke.tick == tick)
    }

    /// Tick of the last stroke, if any
    pub fn last_tick(&self) -> Option<u64> {
        self.strokes.last().map(|stroke| stroke.tick)
    }
}
