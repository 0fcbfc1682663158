//! Terminal dump, one glyph per cell

use grainfall_core::Simulation;

/// Render the grid as text rows, top row first
pub fn render(sim: &Simulation) -> String {
    let materials = sim.materials();
    let grid = sim.grid();

    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(materials.get(grid.get(x, y).material()).glyph);
        }
        out.push('\n');
    }
    out
}

/// Glyph legend, e.g. `. sand  ~ water`
pub fn legend(sim: &Simulation) -> String {
    sim.materials()
        .iter()
        .filter(|def| !def.glyph.is_whitespace())
        .map(|def| format!("{} {}", def.glyph, def.material))
        .collect::<Vec<_>>()
        .join("  ")
}
