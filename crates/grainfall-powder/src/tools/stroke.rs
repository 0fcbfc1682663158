//! Pointer stroke tracking for drag painting

use glam::IVec2;
use grainfall_core::{PaintError, Simulation, WorldRng};

use super::Tool;

/// Tracks the previous pointer sample of a drag
///
/// Each sample after the first paints the whole segment from the previous
/// one, so fast pointer motion leaves a continuous line.
#[derive(Debug, Default)]
pub struct Stroke {
    /// Last position for segment interpolation
    last_pos: Option<IVec2>,
    /// Cells written since the stroke started
    written: usize,
}

impl Stroke {
    /// Create an idle stroke
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one pointer sample with `tool`
    ///
    /// A rejected command leaves the stroke where it was.
    pub fn apply<R: WorldRng>(
        &mut self,
        tool: &dyn Tool,
        sim: &mut Simulation,
        pos: IVec2,
        radius: i32,
        rng: &mut R,
    ) -> Result<usize, PaintError> {
        let command = tool.command(self.last_pos, pos, radius);
        let written = sim.paint(&command, rng)?;

        self.last_pos = Some(pos);
        self.written += written;
        Ok(written)
    }

    /// End the drag, returning the number of cells written during it
    pub fn end(&mut self) -> usize {
        self.last_pos = None;
        std::mem::take(&mut self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{EraseTool, PenTool};
    use grainfall_core::world::seeded_rng;
    use grainfall_simulation::{Cell, Material};

    #[test]
    fn test_drag_paints_continuous_line() {
        let mut sim = Simulation::with_size(20, 10).unwrap();
        let mut rng = seeded_rng(1);
        let pen = PenTool::new(Material::Stone);
        let mut stroke = Stroke::new();

        stroke.apply(&pen, &mut sim, IVec2::new(1, 5), 0, &mut rng).unwrap();
        stroke.apply(&pen, &mut sim, IVec2::new(15, 5), 0, &mut rng).unwrap();

        for x in 1..=15 {
            assert_eq!(sim.grid().get(x, 5), Cell::Stone);
        }
        assert_eq!(stroke.end(), 15);
    }

    #[test]
    fn test_new_stroke_does_not_connect_to_old_one() {
        let mut sim = Simulation::with_size(20, 10).unwrap();
        let mut rng = seeded_rng(1);
        let pen = PenTool::new(Material::Wood);
        let mut stroke = Stroke::new();

        stroke.apply(&pen, &mut sim, IVec2::new(2, 2), 0, &mut rng).unwrap();
        stroke.end();
        stroke.apply(&pen, &mut sim, IVec2::new(12, 2), 0, &mut rng).unwrap();

        assert_eq!(sim.grid().count(Material::Wood), 2);
    }

    #[test]
    fn test_rejected_sample_keeps_position() {
        let mut sim = Simulation::with_size(20, 10).unwrap();
        let mut rng = seeded_rng(1);
        let mut stroke = Stroke::new();

        assert!(stroke.apply(&EraseTool, &mut sim, IVec2::new(4, 4), -1, &mut rng).is_err());

        // Nothing to connect to, so the next sample paints a single cell
        let pen = PenTool::new(Material::Sand);
        assert_eq!(stroke.apply(&pen, &mut sim, IVec2::new(12, 4), 0, &mut rng), Ok(1));
        assert_eq!(stroke.end(), 1);
    }
}
