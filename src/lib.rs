pub mod config;
pub mod db;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Build the application router over an existing pool
///
/// Used by `serve` and by integration tests, which drive the router without
/// binding a socket.
pub fn create_app(config: Config, pool: sqlx::SqlitePool) -> axum::Router {
    let state = AppState {
        config,
        store: folio_contact::SqliteStore::new(pool.clone()),
        pool,
    };

    routes::router(state)
}
