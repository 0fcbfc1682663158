//! Headless renderers for the final grid

pub mod ascii;
pub mod ppm;
