use core::{ColorConfig, GenerationConfig, LandmassPipeline, MaskConfig, Simplex3D};

fn main() {
    // Synthesize a 129×129 masked landmass height field with seed 2025
    let noise = Simplex3D::new(2025);
    let generation = GenerationConfig {
        width: 129,
        height: 129,
        seed: 2025.0,
        ..Default::default()
    };
    let pipeline = LandmassPipeline::new(
        &noise,
        generation,
        MaskConfig::default(),
        ColorConfig::default(),
    );
    let heights = pipeline.heights(generation.seed);

    // Print the top-left 16×16 corner of the field
    for y in 0..16 {
        for x in 0..16 {
            print!("{:>6.3} ", heights[y * generation.width + x]);
        }
        println!();
    }
}
