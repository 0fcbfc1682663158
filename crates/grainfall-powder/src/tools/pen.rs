//! Pen tool for drawing materials

use super::Tool;
use grainfall_core::BrushMaterial;
use grainfall_simulation::Material;

/// Pen tool that draws a specific material into empty cells
pub struct PenTool {
    material: Material,
}

impl PenTool {
    /// Create a new pen tool for the given material
    pub fn new(material: Material) -> Self {
        Self { material }
    }
}

impl Tool for PenTool {
    fn name(&self) -> &str {
        "Pen"
    }

    fn brush(&self) -> BrushMaterial {
        BrushMaterial::from(self.material)
    }
}
