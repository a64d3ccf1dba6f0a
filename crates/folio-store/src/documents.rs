//! Typed document helpers on [`Database`].
//!
//! Documents are stored as JSON bodies keyed by `(collection, id)`. The id is
//! kept out of the body and re-attached as `_id` when a document is read.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use folio_shared::models::{Education, Experience, Profile, Project, Service};

use crate::database::Database;
use crate::error::{Result, StoreError};

/// The named collections the content API reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Profiles,
    Services,
    Projects,
    Education,
    Experience,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Profiles => "profiles",
            Collection::Services => "services",
            Collection::Projects => "projects",
            Collection::Education => "education",
            Collection::Experience => "experience",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial content loaded from a JSON file (see [`Database::import_seed`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub profile: Option<Profile>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
}

impl Database {
    /// Store `doc` in `collection` and return its id.
    ///
    /// A non-empty `_id` on the document is kept; otherwise a fresh UUID is
    /// assigned.
    pub fn insert_document<T: Serialize>(&self, collection: Collection, doc: &T) -> Result<String> {
        let mut body = match serde_json::to_value(doc)? {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".into(), other);
                map
            }
        };

        let id = match body.remove("_id") {
            Some(Value::String(id)) if !id.is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };

        self.conn().execute(
            "INSERT INTO documents (id, collection, body, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                id,
                collection.as_str(),
                Value::Object(body).to_string(),
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(id)
    }

    /// All documents of a collection, in insertion order.
    pub fn list_documents<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, body FROM documents WHERE collection = ?1 ORDER BY seq ASC",
        )?;
        let rows = stmt.query_map(params![collection.as_str()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut docs = Vec::new();
        for row in rows {
            let (id, body) = row?;
            docs.push(decode_document(id, &body)?);
        }
        Ok(docs)
    }

    /// The first document of a collection, if any.
    pub fn first_document<T: DeserializeOwned>(&self, collection: Collection) -> Result<Option<T>> {
        let row = self
            .conn()
            .query_row(
                "SELECT id, body FROM documents WHERE collection = ?1 ORDER BY seq ASC LIMIT 1",
                params![collection.as_str()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        row.map(|(id, body)| decode_document(id, &body)).transpose()
    }

    /// Look a document up by id, or by its `slug` field. An id match wins.
    pub fn find_document<T: DeserializeOwned>(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<T>> {
        let row = self
            .conn()
            .query_row(
                "SELECT id, body FROM documents
                 WHERE collection = ?1 AND (id = ?2 OR json_extract(body, '$.slug') = ?2)
                 ORDER BY (id = ?2) DESC, seq ASC
                 LIMIT 1",
                params![collection.as_str(), key],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        row.map(|(id, body)| decode_document(id, &body)).transpose()
    }

    /// Whether no collection holds any document yet.
    pub fn is_empty(&self) -> Result<bool> {
        let n: i64 = self
            .conn()
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(n == 0)
    }

    /// Insert every record of `seed` in one transaction. Returns how many
    /// documents were written.
    pub fn import_seed(&self, seed: &Seed) -> Result<usize> {
        // Dropping the transaction without commit rolls every insert back.
        let tx = self.conn().unchecked_transaction()?;
        let n = self.insert_seed(seed)?;
        tx.commit()?;

        tracing::info!(documents = n, "seed content imported");
        Ok(n)
    }

    /// Import the JSON seed file at `path`, but only into an empty store.
    ///
    /// Returns `None` when the store already had content and the file was
    /// not read.
    pub fn seed_if_empty(&self, path: &Path) -> Result<Option<usize>> {
        if !self.is_empty()? {
            tracing::info!(path = %path.display(), "store already has content; skipping seed");
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&raw)?;
        self.import_seed(&seed).map(Some)
    }

    fn insert_seed(&self, seed: &Seed) -> Result<usize> {
        let mut n = 0;
        if let Some(profile) = &seed.profile {
            self.insert_document(Collection::Profiles, profile)?;
            n += 1;
        }
        n += self.insert_all(Collection::Services, &seed.services)?;
        n += self.insert_all(Collection::Projects, &seed.projects)?;
        n += self.insert_all(Collection::Education, &seed.education)?;
        n += self.insert_all(Collection::Experience, &seed.experience)?;
        Ok(n)
    }

    fn insert_all<T: Serialize>(&self, collection: Collection, docs: &[T]) -> Result<usize> {
        for doc in docs {
            self.insert_document(collection, doc)?;
        }
        Ok(docs.len())
    }
}

fn decode_document<T: DeserializeOwned>(id: String, body: &str) -> Result<T> {
    let mut value: Value = serde_json::from_str(body)?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("_id".into(), Value::String(id));
        }
        None => {
            return Err(StoreError::Document(serde::de::Error::custom(
                "stored document is not a JSON object",
            )))
        }
    }
    Ok(serde_json::from_value(value)?)
}
