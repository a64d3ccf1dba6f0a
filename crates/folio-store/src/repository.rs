//! The read-only content seam the API server is built against.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use folio_shared::models::{Education, Experience, Profile, Project, Service};

use crate::database::Database;
use crate::documents::Collection;
use crate::error::{Result, StoreError};

/// Read access to the portfolio content.
///
/// List reads return an empty `Vec` when a collection has no documents;
/// `Err` is reserved for store failures.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// The first profile document, if any.
    async fn profile(&self) -> Result<Option<Profile>>;

    async fn services(&self) -> Result<Vec<Service>>;

    async fn projects(&self) -> Result<Vec<Project>>;

    /// A single project by document id or slug.
    async fn project(&self, key: &str) -> Result<Option<Project>>;

    async fn education(&self) -> Result<Vec<Education>>;

    async fn experience(&self) -> Result<Vec<Experience>>;
}

/// [`ContentRepository`] over a shared SQLite [`Database`].
///
/// The connection is opened once and reused by every request; queries run on
/// tokio's blocking pool so they never stall the async workers.
#[derive(Clone)]
pub struct SqliteRepository {
    db: Arc<Mutex<Database>>,
}

impl SqliteRepository {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let guard = db.lock().map_err(|_| StoreError::Poisoned)?;
            f(&guard)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

#[async_trait]
impl ContentRepository for SqliteRepository {
    async fn profile(&self) -> Result<Option<Profile>> {
        self.with_db(|db| db.first_document(Collection::Profiles)).await
    }

    async fn services(&self) -> Result<Vec<Service>> {
        self.with_db(|db| db.list_documents(Collection::Services)).await
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.with_db(|db| db.list_documents(Collection::Projects)).await
    }

    async fn project(&self, key: &str) -> Result<Option<Project>> {
        let key = key.to_string();
        self.with_db(move |db| db.find_document(Collection::Projects, &key))
            .await
    }

    async fn education(&self) -> Result<Vec<Education>> {
        self.with_db(|db| db.list_documents(Collection::Education)).await
    }

    async fn experience(&self) -> Result<Vec<Experience>> {
        self.with_db(|db| db.list_documents(Collection::Experience)).await
    }
}
