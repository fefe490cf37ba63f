// Generates and saves three 257×257 landmass images:
// Discrete biome bands
// Continuous tide-aware gradient
// Gradient with the sand border flattened

use core::utils::ColorGrid;
use core::{
    ColorConfig, ColorScheme, FixedSeed, GenerationConfig, LandmassPipeline, MaskConfig, MaskMode,
    Simplex3D,
};
use image::RgbImage;
use std::path::Path;

fn save_grid(grid: &ColorGrid, filename: &str) {
    let img =
        RgbImage::from_raw(grid.width() as u32, grid.height() as u32, grid.to_rgb8()).unwrap();
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let noise = Simplex3D::new(2025);
    let generation = GenerationConfig {
        width: 257,
        height: 257,
        frequency: 320.0,
        seed: 2025.0,
        ..Default::default()
    };
    // Cosine falloff sinks the coastline into deep water at the border
    let mask = MaskConfig {
        mode: MaskMode::Cosine,
        ..Default::default()
    };

    // 1) Discrete biome bands
    let bands = ColorConfig {
        scheme: ColorScheme::bands(),
        ..Default::default()
    };
    let pipeline = LandmassPipeline::new(&noise, generation, mask, bands);
    save_grid(&pipeline.generate(&mut FixedSeed(0.0)), "landmass_bands.png");

    // 2) Continuous tide-aware gradient
    let pipeline = LandmassPipeline::new(&noise, generation, mask, ColorConfig::default());
    save_grid(&pipeline.generate(&mut FixedSeed(0.0)), "landmass_gradient.png");

    // 3) Gradient with sand as a flat border
    let mut bordered = ColorConfig::default();
    if let ColorScheme::Gradient { sand_as_border, .. } = &mut bordered.scheme {
        *sand_as_border = true;
    }
    let pipeline = LandmassPipeline::new(&noise, generation, mask, bordered);
    save_grid(
        &pipeline.generate(&mut FixedSeed(0.0)),
        "landmass_sand_border.png",
    );
}
