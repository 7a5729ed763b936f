#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use projehub::config::{Config, JwtConfig, PoolConfig};
use projehub::models::OcrProjectType;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn put(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn delete(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// DELETE with a bearer token.
    pub async fn delete_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create a project with the given extra fields, return the `data` object.
    pub async fn create_project(&self, name: &str, code: &str, extra: Value) -> Value {
        let mut body = json!({ "projectName": name, "projectCode": code });
        if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), extra) {
            body.extend(extra);
        }
        let (resp, status) = self.post("/api/v1/projects", &body).await;
        assert_eq!(status, StatusCode::CREATED, "create project failed: {resp}");
        resp["data"].clone()
    }

    /// Count rows in `projects` with the given code.
    pub async fn count_projects_with_code(&self, code: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE project_code = $1")
            .bind(code)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

pub fn test_config(database_url: String) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        database_url,
        pool: PoolConfig {
            max_connections: 5,
            min_connections: 0,
            max_lifetime: Duration::from_secs(300),
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiration_hours: 1,
        },
        log_level: "warn".to_string(),
        seed: false,
    }
}

fn database_url() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests")
}

fn with_database(base_url: &str, db_name: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Create a fresh database, run migrations, and return a pool to it with its name.
pub async fn fresh_database() -> (PgPool, String) {
    let base_url = database_url();

    let db_name = format!("projehub_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    // Connect to default postgres DB to create test DB
    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&with_database(&base_url, "postgres"))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&with_database(&base_url, &db_name))
        .await
        .expect("Failed to connect to test database");

    projehub::db::migrate(&pool)
        .await
        .expect("Failed to run migrations on test database");

    (pool, db_name)
}

/// Make every insert of an OCR child of `kind` fail, so project creation
/// breaks part-way through its transaction.
pub async fn reject_ocr_type(pool: &PgPool, kind: OcrProjectType) {
    sqlx::query(&format!(
        "ALTER TABLE ocr_projects ADD CONSTRAINT ck_test_reject_type CHECK (type <> {})",
        kind.ordinal()
    ))
    .execute(pool)
    .await
    .expect("Failed to add test constraint");
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let (pool, db_name) = fresh_database().await;
    let config = test_config(with_database(&database_url(), &db_name));

    let app = projehub::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder().build().unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop a test database created by [`fresh_database`].
pub async fn drop_database(pool: PgPool, db_name: &str) {
    pool.close().await;

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&with_database(&database_url(), "postgres"))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    drop_database(app.pool, &app.db_name).await;
}
