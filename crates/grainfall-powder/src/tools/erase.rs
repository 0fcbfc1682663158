//! Eraser tool

use super::Tool;
use grainfall_core::BrushMaterial;

/// Eraser tool that clears any cell back to empty
pub struct EraseTool;

impl Tool for EraseTool {
    fn name(&self) -> &str {
        "Eraser"
    }

    fn brush(&self) -> BrushMaterial {
        BrushMaterial::Erase
    }
}
