//! Shared application state

use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::pricing::PricingConfig;

/// State handed to every handler via axum's `State` extractor.
///
/// Cheap to clone: everything inside is pooled or reference-counted.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub pricing: Arc<PricingConfig>,
}

impl ServerState {
    /// Open the database and load pricing tables.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let db = DbService::new(&config.data_dir).await?;

        let pricing = match &config.pricing_config {
            Some(path) => {
                let loaded = PricingConfig::load(Path::new(path))?;
                tracing::info!(path, "pricing config loaded");
                loaded
            }
            None => PricingConfig::default(),
        };

        Ok(Self {
            config: Arc::new(config.clone()),
            db,
            pricing: Arc::new(pricing),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }
}
