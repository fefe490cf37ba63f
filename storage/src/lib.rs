//storage holds the 2D scalar store plus MongoDB schema & async CRUD

pub mod height_store;
pub mod models;

pub use height_store::HeightStore2D;

use crate::models::LandmassDoc2D;
use bson::doc;
use futures_util::stream::TryStreamExt;
use mongodb::{
    Client, Collection, IndexModel,
    options::{ClientOptions, IndexOptions},
};

pub struct LandmassStore {
    col: Collection<LandmassDoc2D>,
}

impl LandmassStore {
    // Initialize the MongoDB collection
    pub async fn init(uri: &str, db_name: &str, col_name: &str) -> mongodb::error::Result<Self> {
        let mut opts = ClientOptions::parse(uri).await?;
        opts.app_name = Some("LandmassStorage".to_string());
        let client = Client::with_options(opts)?;
        let col = client.database(db_name).collection(col_name);

        // Create unique index on (name, seed)
        let index_model = IndexModel::builder()
            .keys(doc! { "name": 1, "seed": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        col.create_index(index_model).await?;

        Ok(Self { col })
    }

    pub async fn list_names(&self) -> mongodb::error::Result<Vec<String>> {
        let mut cursor = self.col.find(doc! {}).await?;
        let mut names = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            names.push(doc.name);
        }
        Ok(names)
    }

    pub async fn read_by_name(&self, name: &str) -> mongodb::error::Result<Option<LandmassDoc2D>> {
        self.col.find_one(doc! { "name": name }).await
    }

    // Insert a landmass document.
    pub async fn create(&self, doc_obj: LandmassDoc2D) -> mongodb::error::Result<()> {
        // Delete any existing document with same name+seed
        let filter = doc! {
            "name": &doc_obj.name,
            "seed": doc_obj.seed,
        };
        let _ = self.col.delete_one(filter.clone()).await;

        // Insert the new document
        self.col.insert_one(doc_obj).await?;
        Ok(())
    }

    // Read a landmass by seed.
    pub async fn read_by_seed(&self, seed: f64) -> mongodb::error::Result<Option<LandmassDoc2D>> {
        self.col.find_one(doc! { "seed": seed }).await
    }

    // Delete by seed (for clean-up).
    pub async fn delete_by_seed(&self, seed: f64) -> mongodb::error::Result<()> {
        let filter = doc! {
            "seed": seed,
        };
        self.col.delete_one(filter).await?;
        Ok(())
    }
}
