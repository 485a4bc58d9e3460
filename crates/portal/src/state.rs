use crate::di::{DependenciesInject, Repositories};
use anyhow::{Context, Result};
use shared::{
    abstract_trait::{hashing::DynHashing, jwt::DynJwtService},
    config::{Config, ConnectionManager, Hashing, JwtConfig},
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
            .await
            .context("Failed to initialize database pool")?;

        let hashing = Arc::new(Hashing::new()) as DynHashing;

        Ok(Self::from_repositories(
            config,
            Repositories::postgres(pool),
            hashing,
        ))
    }

    pub fn from_repositories(config: &Config, repos: Repositories, hashing: DynHashing) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret, config.token_ttl_minutes))
            as DynJwtService;

        let di_container = DependenciesInject::new(
            repos,
            hashing,
            jwt_config.clone(),
            config.calendar.clone(),
            config.average_divisor,
        );

        Self {
            jwt_config,
            di_container,
        }
    }
}
