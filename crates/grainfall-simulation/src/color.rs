//! Display colors in hue/saturation/lightness space

use std::fmt;

use serde::{Deserialize, Serialize};

/// A display color stored as HSL
///
/// `h` is in degrees (0-359), `s` and `l` are percentages (0-100).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Color {
    pub const fn hsl(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Shift hue and lightness, wrapping hue and clamping lightness to 0-100
    pub fn offset(self, dh: i16, dl: i16) -> Self {
        let h = (self.h as i32 + dh as i32).rem_euclid(360) as u16;
        let l = (self.l as i16 + dl).clamp(0, 100) as u8;
        Self { h, s: self.s, l }
    }

    /// CSS color string, e.g. `hsl(45, 70%, 65%)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Convert to opaque RGBA
    pub fn to_rgba(&self) -> [u8; 4] {
        let h = self.h as f32 / 360.0;
        let s = self.s.min(100) as f32 / 100.0;
        let l = self.l.min(100) as f32 / 100.0;

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return [v, v, v, 255];
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let r = hue_to_channel(p, q, h + 1.0 / 3.0);
        let g = hue_to_channel(p, q, h);
        let b = hue_to_channel(p, q, h - 1.0 / 3.0);

        [
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            255,
        ]
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}
