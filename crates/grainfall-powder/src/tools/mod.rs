//! Tools module for the Powder demo

mod erase;
mod pen;
mod stroke;

pub use erase::EraseTool;
pub use pen::PenTool;
pub use stroke::Stroke;

use glam::IVec2;
use grainfall_core::{BrushMaterial, PaintCommand};

/// Trait for drawing tools
pub trait Tool {
    /// Tool display name
    fn name(&self) -> &str;

    /// What the tool writes into the grid
    fn brush(&self) -> BrushMaterial;

    /// Build the paint command for one pointer sample
    fn command(&self, from: Option<IVec2>, to: IVec2, radius: i32) -> PaintCommand {
        let command = PaintCommand::new(self.brush(), to, radius);
        match from {
            Some(from) => command.with_previous(from),
            None => command,
        }
    }
}

/// Pick the tool that writes `brush`
pub fn tool_for(brush: BrushMaterial) -> Box<dyn Tool> {
    match brush {
        BrushMaterial::Paint(material) => Box::new(PenTool::new(material)),
        BrushMaterial::Erase => Box::new(EraseTool),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grainfall_simulation::Material;

    #[test]
    fn test_tool_for_brush() {
        assert_eq!(tool_for(BrushMaterial::Erase).name(), "Eraser");

        let pen = tool_for(BrushMaterial::Paint(Material::Water));
        assert_eq!(pen.name(), "Pen");
        assert_eq!(pen.brush(), BrushMaterial::Paint(Material::Water));
    }

    #[test]
    fn test_command_carries_previous_sample() {
        let pen = PenTool::new(Material::Sand);

        let first = pen.command(None, IVec2::new(3, 4), 2);
        assert_eq!(first.from, None);
        assert_eq!(first.radius, 2);

        let next = pen.command(Some(IVec2::new(3, 4)), IVec2::new(9, 4), 2);
        assert_eq!(next.from, Some(IVec2::new(3, 4)));
        assert_eq!(next.to, IVec2::new(9, 4));
    }
}
