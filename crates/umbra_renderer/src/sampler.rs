//! Deterministic random sample sources.
//!
//! Every random number a pixel sample consumes is derived from
//! `(seed, x, y, sample index, bounce)`, so renders reproduce exactly no
//! matter how pixels are spread over threads.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hash::{Hash, Hasher};
use umbra_math::Vec2;

/// Largest `f32` below 1.0.
pub const ONE_MINUS_EPSILON: f32 = 1.0 - f32::EPSILON / 2.0;

/// Odd constant used to decorrelate the strata of successive dimensions.
const DIMENSION_SCRAMBLE: u32 = 0x9E37_79B9;

/// Generator behind every sampler.
pub type SamplerRng = Xoshiro256PlusPlus;

/// Source of uniform random numbers in `[0, 1)`.
pub trait Sampler {
    fn next_1d(&mut self) -> f32;

    /// A pair of numbers, stratified where the implementation supports it.
    fn next_2d(&mut self) -> Vec2;
}

/// Identity of one pixel sample.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SampleSeed {
    pub seed: u64,
    pub x: u32,
    pub y: u32,
    pub sample_index: u32,
}

impl SampleSeed {
    pub fn new(seed: u64, x: u32, y: u32, sample_index: u32) -> Self {
        Self {
            seed,
            x,
            y,
            sample_index,
        }
    }

    /// Independent generator for one stream of this sample.
    pub fn into_rng(self, stream: u32) -> SamplerRng {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut hasher);
        stream.hash(&mut hasher);
        SamplerRng::seed_from_u64(hasher.finish())
    }
}

/// Sampler for one pixel sample, with one random stream per bounce.
///
/// 2D draws are jittered inside a `strata x strata` grid; the cell is picked
/// from the sample index, so successive samples of a pixel cover the grid.
#[derive(Debug, Clone)]
pub struct PixelSampler {
    seed: SampleSeed,
    strata: u32,
    dimension: u32,
    rng: SamplerRng,
}

impl PixelSampler {
    /// Sampler for `seed`, stratified for `samples_per_pixel` samples.
    pub fn new(seed: SampleSeed, samples_per_pixel: u32) -> Self {
        let strata = (samples_per_pixel.max(1) as f64).sqrt().floor() as u32;
        Self {
            seed,
            strata: strata.max(1),
            dimension: 0,
            rng: seed.into_rng(0),
        }
    }

    /// Switch to the random stream of `bounce`. Bounce 0 is the camera ray.
    pub fn start_bounce(&mut self, bounce: u32) {
        self.rng = self.seed.into_rng(bounce);
        self.dimension = 0;
    }

    pub fn seed(&self) -> SampleSeed {
        self.seed
    }

    pub fn strata(&self) -> u32 {
        self.strata
    }
}

impl Sampler for PixelSampler {
    fn next_1d(&mut self) -> f32 {
        self.rng.gen()
    }

    fn next_2d(&mut self) -> Vec2 {
        let jitter = Vec2::new(self.rng.gen(), self.rng.gen());
        if self.strata == 1 {
            return jitter;
        }

        let cells = self.strata * self.strata;
        let cell = self
            .seed
            .sample_index
            .wrapping_add(self.dimension.wrapping_mul(DIMENSION_SCRAMBLE))
            % cells;
        self.dimension += 1;

        let corner = Vec2::new((cell % self.strata) as f32, (cell / self.strata) as f32);
        ((corner + jitter) / self.strata as f32).min(Vec2::splat(ONE_MINUS_EPSILON))
    }
}

/// Plain independent samples from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: SamplerRng,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SamplerRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn next_1d(&mut self) -> f32 {
        self.rng.gen()
    }

    fn next_2d(&mut self) -> Vec2 {
        Vec2::new(self.rng.gen(), self.rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(sampler: &mut impl Sampler, n: usize) -> Vec<f32> {
        (0..n)
            .flat_map(|_| {
                let p = sampler.next_2d();
                [p.x, p.y, sampler.next_1d()]
            })
            .collect()
    }

    #[test]
    fn test_pixel_sampler_is_deterministic() {
        let seed = SampleSeed::new(7, 12, 34, 5);
        let mut a = PixelSampler::new(seed, 16);
        let mut b = PixelSampler::new(seed, 16);
        assert_eq!(draw(&mut a, 10), draw(&mut b, 10));

        a.start_bounce(3);
        b.start_bounce(3);
        assert_eq!(draw(&mut a, 10), draw(&mut b, 10));
    }

    #[test]
    fn test_streams_differ() {
        let seed = SampleSeed::new(7, 12, 34, 5);
        let mut a = PixelSampler::new(seed, 16);
        let mut b = PixelSampler::new(SampleSeed { sample_index: 6, ..seed }, 16);
        assert_ne!(draw(&mut a, 4), draw(&mut b, 4));

        let first = draw(&mut a, 4);
        a.start_bounce(1);
        assert_ne!(first, draw(&mut a, 4));
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut sampler = PixelSampler::new(SampleSeed::new(1, 0, 0, 0), 64);
        for bounce in 0..8 {
            sampler.start_bounce(bounce);
            for v in draw(&mut sampler, 100) {
                assert!((0.0..1.0).contains(&v), "{v}");
            }
        }
    }

    #[test]
    fn test_first_dimension_covers_every_stratum() {
        let spp = 16;
        let mut cells = vec![0; spp as usize];

        for sample_index in 0..spp {
            let mut sampler = PixelSampler::new(SampleSeed::new(3, 1, 1, sample_index), spp);
            let p = sampler.next_2d() * 4.0;
            cells[(p.y as usize) * 4 + p.x as usize] += 1;
        }

        assert!(cells.iter().all(|&c| c == 1), "{cells:?}");
    }

    #[test]
    fn test_random_sampler_mean() {
        let mut sampler = RandomSampler::new(42);
        let n = 20_000;
        let mean = (0..n).map(|_| sampler.next_1d()).sum::<f32>() / n as f32;
        assert!((mean - 0.5).abs() < 0.01);
    }
}
