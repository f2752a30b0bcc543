use crate::{
    auth::repo::{PgUserRepository, UserRepository},
    categories::repo::{CategoryRepository, PgCategoryRepository},
    config::AppConfig,
    products::repo::{PgProductRepository, ProductRepository},
    profiles::repo::{PgProfileRepository, ProfileRepository},
    storage::{LocalStorage, StorageClient},
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub storage: Arc<dyn StorageClient>,
}

impl AppState {
    /// Postgres-backed repositories sharing one pool, images on local disk.
    pub async fn init(config: AppConfig, db: PgPool) -> anyhow::Result<Self> {
        let storage = Arc::new(LocalStorage::new(&config.upload_dir).await?) as Arc<dyn StorageClient>;

        Ok(Self {
            config: Arc::new(config),
            users: Arc::new(PgUserRepository::new(db.clone())),
            products: Arc::new(PgProductRepository::new(db.clone())),
            categories: Arc::new(PgCategoryRepository::new(db.clone())),
            profiles: Arc::new(PgProfileRepository::new(db)),
            storage,
        })
    }
}
