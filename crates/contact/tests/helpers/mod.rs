use std::{
    path::PathBuf,
    str::FromStr,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use folio_contact::{DocumentData, DocumentStore, SubmitFormInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use tokio::sync::Notify;

#[allow(dead_code)]
pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    folio_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub fn valid_input() -> SubmitFormInput {
    SubmitFormInput {
        name: "Jo".to_owned(),
        email: "jo@x.com".to_owned(),
        subject: "Hello there".to_owned(),
        message: "This is a test message.".to_owned(),
    }
}

/// In-memory store that records every write. It can be told to reject
/// writes, or to hold each write until [`RecordingStore::release`].
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingStore {
    writes: Mutex<Vec<(String, DocumentData)>>,
    fail: AtomicBool,
    gated: bool,
    gate: Notify,
}

#[allow(dead_code)]
impl RecordingStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_fail(true);
        store
    }

    pub fn gated() -> Self {
        Self {
            gated: true,
            ..Default::default()
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn writes(&self) -> Vec<(String, DocumentData)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub async fn wait_for_writes(&self, n: usize) {
        while self.count() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for RecordingStore {
    async fn add_document(&self, collection: &str, data: DocumentData) -> anyhow::Result<String> {
        let id = {
            let mut writes = self.writes.lock().unwrap();
            writes.push((collection.to_owned(), data));
            format!("doc-{}", writes.len())
        };

        if self.gated {
            self.gate.notified().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("permission denied");
        }

        Ok(id)
    }
}
