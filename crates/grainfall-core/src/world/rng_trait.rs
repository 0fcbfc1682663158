//! RNG trait abstraction for the simulation
//!
//! Allows the update pass to work with both:
//! - A seeded generator (deterministic replay)
//! - Hand-rolled stubs in tests

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Default seedable generator used by the demo and the benchmarks
pub type SimRng = Xoshiro256StarStar;

/// Create a generator that replays the same sequence for the same seed
pub fn seeded_rng(seed: u64) -> SimRng {
    Xoshiro256StarStar::seed_from_u64(seed)
}

/// Random number generator trait for the simulation
pub trait WorldRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Generate a value in `min..=max`
    fn gen_range_u16(&mut self, min: u16, max: u16) -> u16 {
        if max <= min {
            return min;
        }
        let span = (max - min) as f32 + 1.0;
        min + ((self.gen_f32() * span) as u16).min(max - min)
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }

    fn gen_range_u16(&mut self, min: u16, max: u16) -> u16 {
        if max <= min {
            return min;
        }
        rand::Rng::gen_range(self, min..=max)
    }
}
