use rand::Rng;

use crate::SeededNoise;
use crate::color::ColorConfig;
use crate::fbm2::Fbm2D;
use crate::mask2::{MaskConfig, RadialMask2D};
use crate::utils::ColorGrid;

// Everything the fractal synthesis stage needs for one generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    // Wavelength divisor of the first octave
    pub frequency: f64,
    // Amplitude decay per octave, in (0, 1)
    pub persistence: f64,
    // Octave count
    pub iterations: usize,
    // Offset fed to the noise primitive's seed axis
    pub seed: f64,
    // Draw a fresh seed from the seed source on each generation
    pub randomise_seed: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            frequency: 640.0,
            persistence: 0.6,
            iterations: 8,
            seed: 0.0,
            randomise_seed: false,
        }
    }
}

// Source of fresh generation seeds. Injected into `generate` so tests
// and replays can pin the draw.
pub trait SeedSource {
    fn next_seed(&mut self) -> f64;
}

// Uniform draw over the generator's historical seed range
pub struct RandomSeed<R: Rng>(pub R);

impl<R: Rng> SeedSource for RandomSeed<R> {
    fn next_seed(&mut self) -> f64 {
        self.0.gen_range(0.0..=65535.0)
    }
}

// Always hands out the same seed
pub struct FixedSeed(pub f64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> f64 {
        self.0
    }
}

// Orchestrates one full generation: fractal height per cell, radial
// attenuation, color classification, written row-major into a fresh
// grid. The previous grid is never touched; callers swap the returned
// one into whatever surface displays it.
pub struct LandmassPipeline<'a> {
    source: &'a dyn SeededNoise,
    pub generation: GenerationConfig,
    pub mask: MaskConfig,
    pub color: ColorConfig,
}

impl<'a> LandmassPipeline<'a> {
    pub fn new(
        source: &'a dyn SeededNoise,
        generation: GenerationConfig,
        mask: MaskConfig,
        color: ColorConfig,
    ) -> Self {
        assert!(generation.width > 0 && generation.height > 0, "grid must not be empty");
        assert!(generation.frequency > 0.0, "frequency must be positive");
        assert!(generation.iterations >= 1, "need at least one octave");

        Self {
            source,
            generation,
            mask,
            color,
        }
    }

    // Seed used for the next generation: the configured one, or a fresh
    // draw when randomisation is on
    fn pick_seed(&self, seeds: &mut dyn SeedSource) -> f64 {
        if self.generation.randomise_seed {
            seeds.next_seed()
        } else {
            self.generation.seed
        }
    }

    // Build the whole color grid. Cell order is row-major; cells are
    // independent, so the order only fixes the memory layout.
    pub fn generate(&self, seeds: &mut dyn SeedSource) -> ColorGrid {
        let seed = self.pick_seed(seeds);
        let fbm = Fbm2D::new(
            self.source,
            self.generation.frequency,
            self.generation.persistence,
            self.generation.iterations,
        );
        let mask = RadialMask2D::new(&self.mask, self.generation.width, self.generation.height);

        let mut grid = ColorGrid::new(self.generation.width, self.generation.height);
        for y in 0..self.generation.height {
            for x in 0..self.generation.width {
                let raw = fbm.height(x as f64, y as f64, seed) as f32;
                let masked = mask.apply(raw, x as f32, y as f32);
                grid.set(x, y, self.color.color_at(masked));
            }
        }
        grid
    }

    // Masked height field alone, row-major, for callers that persist the
    // terrain rather than its colors
    pub fn heights(&self, seed: f64) -> Vec<f32> {
        let fbm = Fbm2D::new(
            self.source,
            self.generation.frequency,
            self.generation.persistence,
            self.generation.iterations,
        );
        let mask = RadialMask2D::new(&self.mask, self.generation.width, self.generation.height);

        let mut out = Vec::with_capacity(self.generation.width * self.generation.height);
        for y in 0..self.generation.height {
            for x in 0..self.generation.width {
                let raw = fbm.height(x as f64, y as f64, seed) as f32;
                out.push(mask.apply(raw, x as f32, y as f32));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::color::{ColorConfig, ColorScheme};
    use crate::mask2::{MaskConfig, MaskMode};
    use crate::{Fbm2D, SeededNoise, Simplex3D};

    use super::{FixedSeed, GenerationConfig, LandmassPipeline, RandomSeed, SeedSource};

    struct Zero;
    impl SeededNoise for Zero {
        fn sample(&self, _x: f64, _y: f64, _seed: f64) -> f64 {
            0.0
        }
    }

    fn small_config() -> GenerationConfig {
        GenerationConfig {
            width: 16,
            height: 12,
            seed: 1234.0,
            ..Default::default()
        }
    }

    #[test]
    fn pipeline_determinism() {
        // Same primitive, configs and seed ⇒ bit-identical grids
        let noise = Simplex3D::new(7);
        let p1 = LandmassPipeline::new(&noise, small_config(), MaskConfig::default(), ColorConfig::default());
        let p2 = LandmassPipeline::new(&noise, small_config(), MaskConfig::default(), ColorConfig::default());
        assert_eq!(p1.generate(&mut FixedSeed(0.0)), p2.generate(&mut FixedSeed(0.0)));
    }

    #[test]
    fn pipeline_randomise_draws_from_the_source() {
        let noise = Simplex3D::new(7);

        let mut randomised = small_config();
        randomised.randomise_seed = true;
        let p1 = LandmassPipeline::new(&noise, randomised, MaskConfig::default(), ColorConfig::default());

        // Pinning the drawn seed must reproduce a non-randomised run with
        // the same seed value
        let mut fixed = small_config();
        fixed.seed = 777.0;
        let p2 = LandmassPipeline::new(&noise, fixed, MaskConfig::default(), ColorConfig::default());

        assert_eq!(p1.generate(&mut FixedSeed(777.0)), p2.generate(&mut FixedSeed(0.0)));
    }

    #[test]
    fn pipeline_ignores_the_source_without_randomise() {
        let noise = Simplex3D::new(7);
        let p = LandmassPipeline::new(&noise, small_config(), MaskConfig::default(), ColorConfig::default());
        // Different sources, same configured seed
        let a = p.generate(&mut FixedSeed(1.0));
        let b = p.generate(&mut FixedSeed(2.0));
        assert_eq!(a, b);
    }

    #[test]
    fn pipeline_random_seed_is_reproducible() {
        // A seeded RNG behind RandomSeed gives replayable draws
        let mut s1 = RandomSeed(ChaCha8Rng::seed_from_u64(42));
        let mut s2 = RandomSeed(ChaCha8Rng::seed_from_u64(42));
        for _ in 0..8 {
            let a = s1.next_seed();
            let b = s2.next_seed();
            assert_eq!(a, b);
            assert!((0.0..=65535.0).contains(&a));
        }
    }

    #[test]
    fn pipeline_zero_noise_paints_one_color() {
        // A zero primitive synthesizes height 0 everywhere; with no mask
        // the whole grid is the color of height 0
        let mask = MaskConfig {
            mode: MaskMode::None,
            ..Default::default()
        };
        let color = ColorConfig::default();
        let expected = color.color_at(0.0);

        let p = LandmassPipeline::new(&Zero, small_config(), mask, color);
        let grid = p.generate(&mut FixedSeed(0.0));
        assert!(grid.pixels().iter().all(|&c| c == expected));
    }

    #[test]
    fn pipeline_none_mask_passes_raw_heights() {
        // With the mask off, the stored heights are exactly the fbm output
        let noise = Simplex3D::new(11);
        let generation = small_config();
        let mask = MaskConfig {
            mode: MaskMode::None,
            ..Default::default()
        };
        let p = LandmassPipeline::new(&noise, generation, mask, ColorConfig::default());
        let heights = p.heights(generation.seed);

        let fbm = Fbm2D::new(&noise, generation.frequency, generation.persistence, generation.iterations);
        for &(x, y) in &[(0usize, 0usize), (5, 7), (15, 11)] {
            let expected = fbm.height(x as f64, y as f64, generation.seed) as f32;
            assert_eq!(heights[y * generation.width + x], expected);
        }
    }

    #[test]
    fn pipeline_grid_dimensions_and_layout() {
        let noise = Simplex3D::new(3);
        let generation = small_config();
        let p = LandmassPipeline::new(&noise, generation, MaskConfig::default(), ColorConfig::default());
        let grid = p.generate(&mut FixedSeed(0.0));
        assert_eq!(grid.width(), generation.width);
        assert_eq!(grid.height(), generation.height);
        assert_eq!(grid.pixels().len(), generation.width * generation.height);
        // Row-major: get(x, y) reads pixels[y * width + x]
        assert_eq!(grid.get(3, 2), grid.pixels()[2 * generation.width + 3]);
    }

    #[test]
    fn pipeline_band_scheme_colors_every_cell_from_the_palette() {
        let noise = Simplex3D::new(5);
        let color = ColorConfig {
            scheme: ColorScheme::bands(),
            ..Default::default()
        };
        let p = LandmassPipeline::new(&noise, small_config(), MaskConfig::default(), color);
        let grid = p.generate(&mut FixedSeed(9.0));
        if let ColorScheme::Bands {
            deep_water,
            water,
            sand,
            land,
        } = color.scheme
        {
            assert!(grid
                .pixels()
                .iter()
                .all(|&c| c == deep_water || c == water || c == sand || c == land));
        }
    }

    #[test]
    #[should_panic]
    fn pipeline_rejects_zero_frequency() {
        let generation = GenerationConfig {
            frequency: 0.0,
            ..Default::default()
        };
        let _ = LandmassPipeline::new(&Zero, generation, MaskConfig::default(), ColorConfig::default());
    }

    #[test]
    #[should_panic]
    fn pipeline_rejects_empty_grid() {
        let generation = GenerationConfig {
            width: 0,
            ..Default::default()
        };
        let _ = LandmassPipeline::new(&Zero, generation, MaskConfig::default(), ColorConfig::default());
    }
}
