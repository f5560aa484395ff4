use std::sync::Arc;

use folio_db::table::Document;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use time::OffsetDateTime;
use ulid::Ulid;

/// Body of a document: a flat JSON object of scalar fields.
pub type DocumentData = Map<String, Value>;

/// Append-only client for a document collection.
///
/// The store owns every document it accepts: it assigns the id and the
/// timestamp, and nothing is handed back besides the id.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn add_document(&self, collection: &str, data: DocumentData) -> anyhow::Result<String>;
}

#[async_trait::async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn add_document(&self, collection: &str, data: DocumentData) -> anyhow::Result<String> {
        (**self).add_document(collection, data).await
    }
}

/// Unix time in milliseconds, taken when the store accepts a write.
pub fn server_timestamp() -> anyhow::Result<i64> {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

    Ok(i64::try_from(millis)?)
}

#[derive(Clone)]
pub struct SqliteStore(pub SqlitePool);

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }
}

#[async_trait::async_trait]
impl DocumentStore for SqliteStore {
    #[tracing::instrument(skip(self, data), err)]
    async fn add_document(&self, collection: &str, data: DocumentData) -> anyhow::Result<String> {
        let id = Ulid::new().to_string();
        let timestamp = server_timestamp()?;
        let data = serde_json::to_string(&data)?;

        let statement = Query::insert()
            .into_table(Document::Table)
            .columns([
                Document::Id,
                Document::Collection,
                Document::Data,
                Document::Timestamp,
            ])
            .values_panic([
                id.to_owned().into(),
                collection.to_owned().into(),
                data.into(),
                timestamp.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::debug!(id, timestamp, "document stored");

        Ok(id)
    }
}
