use landmass_core::{ColorConfig, GenerationConfig, LandmassPipeline, MaskConfig, Simplex3D};
use storage::HeightStore2D;
use storage::LandmassStore;
use storage::models::{LandmassDoc2D, LandmassParams};
use tokio;

#[tokio::main]
async fn main() -> mongodb::error::Result<()> {
    // Synthesize a 257×257 masked height field
    let noise = Simplex3D::new(2025);
    let generation = GenerationConfig {
        width: 257,
        height: 257,
        seed: 2025.0,
        ..Default::default()
    };
    let mask = MaskConfig::default();
    let pipeline = LandmassPipeline::new(&noise, generation, mask, ColorConfig::default());

    // Stage it through the scalar store
    let mut store2d = HeightStore2D::new(generation.width, generation.height);
    store2d.load_flat(&pipeline.heights(generation.seed));

    // Build the document
    let params = LandmassParams {
        frequency: generation.frequency,
        persistence: generation.persistence,
        iterations: generation.iterations,
        mask_mode: "linear".to_string(),
        edge_value: mask.edge_value,
        from_centre: mask.from_centre,
    };
    let doc = LandmassDoc2D {
        id: None,
        name: "roundtrip-demo".to_string(),
        seed: generation.seed,
        params,
        height_map: store2d.flatten(),
        width: generation.width,
        height: generation.height,
    };

    // Init storage
    let storage =
        LandmassStore::init("mongodb://localhost:27017", "landmass_db", "landmass2d").await?;

    // Insert & read back
    storage.create(doc).await?;
    if let Some(found) = storage.read_by_seed(2025.0).await? {
        println!(
            "Round-trip success: sample [128,128] = {}",
            found.height_map[128 * 257 + 128]
        );
    } else {
        println!("Document not found!");
    }

    // Clean up
    storage.delete_by_seed(2025.0).await?;

    Ok(())
}
