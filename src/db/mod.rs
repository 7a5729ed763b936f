pub mod ocr_projects;
pub mod permissions;
pub mod projects;
pub mod roles;
pub mod seed;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::PoolConfig;

pub async fn connect(database_url: &str, pool: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .max_lifetime(pool.max_lifetime)
        .connect(database_url)
        .await
}

pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
