// core holds the landmass synthesis pipeline: seeded noise primitives,
// fractal height synthesis, radial masking, color classification
pub mod color;
pub mod fbm2;
pub mod mask2;
pub mod perlin3;
pub mod pipeline;
pub mod simplex3;
pub mod utils;

pub use color::{ColorConfig, ColorScheme};
pub use fbm2::Fbm2D;
pub use mask2::{MaskConfig, MaskMode, RadialMask2D};
pub use perlin3::Perlin3D;
pub use pipeline::{FixedSeed, GenerationConfig, LandmassPipeline, RandomSeed, SeedSource};
pub use simplex3::Simplex3D;
pub use utils::ColorGrid;

// 2D coherent noise parameterized by a float seed offset.
// Implementations must be pure and deterministic: the same (x, y, seed)
// always yields the same value, roughly in [-1, 1]. Moving the seed
// moves the whole noise field, so one instance serves any number of
// generations.
pub trait SeededNoise {
    // Sample the noise field at (x, y) for the given seed offset.
    fn sample(&self, x: f64, y: f64, seed: f64) -> f64;
}
