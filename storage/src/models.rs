use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// Generation settings stored next to the height field so a landmass can
// be regenerated from its document alone
#[derive(Debug, Serialize, Deserialize)]
pub struct LandmassParams {
    pub frequency: f64,
    pub persistence: f64,
    pub iterations: usize,
    pub mask_mode: String, // e.g. "linear", "cosine", "smoothstep", "none"
    pub edge_value: f32,
    pub from_centre: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LandmassDoc2D {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    // Noise seed offset the field was sampled at
    pub seed: f64,
    pub params: LandmassParams,
    // Flattened row-major: length = width×height
    pub height_map: Vec<f32>,
    pub width: usize,
    pub height: usize,
}
