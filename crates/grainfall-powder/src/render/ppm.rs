//! Binary PPM (P6) export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use grainfall_core::Simulation;

/// Write the grid as a P6 image, `scale` output pixels per cell
///
/// Cell colors are composited over `background`.
pub fn write<W: Write>(
    sim: &mut Simulation,
    background: [u8; 3],
    scale: u32,
    out: &mut W,
) -> io::Result<()> {
    let scale = scale.max(1) as usize;
    let (width, height) = (sim.width(), sim.height());

    let mut rgba = vec![0u8; width * height * 4];
    sim.write_rgba(&mut rgba);

    write!(out, "P6\n{} {}\n255\n", width * scale, height * scale)?;

    let mut row = Vec::with_capacity(width * scale * 3);
    for cells in rgba.chunks_exact(width * 4) {
        row.clear();
        for pixel in cells.chunks_exact(4) {
            let rgb = blend([pixel[0], pixel[1], pixel[2]], pixel[3], background);
            for _ in 0..scale {
                row.extend_from_slice(&rgb);
            }
        }
        for _ in 0..scale {
            out.write_all(&row)?;
        }
    }
    Ok(())
}

/// Write the image to `path`
pub fn save(sim: &mut Simulation, background: [u8; 3], scale: u32, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(sim, background, scale, &mut out)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {}x{} image to {}", sim.width(), sim.height(), path.display());
    Ok(())
}

fn blend(color: [u8; 3], alpha: u8, background: [u8; 3]) -> [u8; 3] {
    let a = alpha as u32;
    let mix = |c: u8, b: u8| ((c as u32 * a + b as u32 * (255 - a)) / 255) as u8;
    [
        mix(color[0], background[0]),
        mix(color[1], background[1]),
        mix(color[2], background[2]),
    ]
}
