#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use folio_contact::SubmitFormInput;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub fn create_test_config() -> folio::Config {
    folio::Config {
        server: folio::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        database: folio::config::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        contact: folio::config::ContactConfig::default(),
        observability: folio::config::ObservabilityConfig::default(),
    }
}

/// Router over an on-disk database, optionally left unmigrated so every
/// write fails.
pub async fn setup_test_app(config: folio::Config, migrated: bool) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let pool = folio::db::create_pool(&url, 1).await?;

    if migrated {
        folio::db::migrate(&pool).await?;
    }

    Ok(TestApp {
        app: folio::create_app(config, pool.clone()),
        pool,
        _dir: dir,
    })
}

pub fn valid_input() -> SubmitFormInput {
    SubmitFormInput {
        name: "Jo".to_owned(),
        email: "jo@x.com".to_owned(),
        subject: "Hello there".to_owned(),
        message: "This is a test message.".to_owned(),
    }
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, String)> {
    let request = Request::builder().uri(uri).body(Body::empty())?;

    send(app, request).await
}

pub async fn post_contact(
    app: &Router,
    input: &SubmitFormInput,
) -> anyhow::Result<(StatusCode, String)> {
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(input)?))?;

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, String)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    Ok((status, String::from_utf8(body.to_vec())?))
}

pub async fn stored_documents(
    pool: &SqlitePool,
    collection: &str,
) -> anyhow::Result<Vec<serde_json::Value>> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT data FROM document WHERE collection = ? ORDER BY timestamp")
            .bind(collection)
            .fetch_all(pool)
            .await?;

    rows.into_iter()
        .map(|(data,)| Ok(serde_json::from_str(&data)?))
        .collect()
}
