//! Filesystem record store.
//!
//! Every operation is a short async pipeline over `tokio::fs`. There is no
//! locking: concurrent writes to the same id race and the last writer wins.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::record::{check_segment, record_id, Record};

/// Record store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Root directory; holds one subdirectory per schema.
    root: PathBuf,
}

impl RecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.data_root.clone())
    }

    /// Get root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for a schema. Callers must have validated `schema`.
    fn schema_dir(&self, schema: &str) -> PathBuf {
        self.root.join(schema)
    }

    /// File for a record. Callers must have validated both segments.
    fn record_path(&self, schema: &str, id: &str) -> PathBuf {
        self.schema_dir(schema).join(format!("{}.json", id))
    }

    /// Persist `item` under `schema`, creating the schema directory if needed.
    ///
    /// Overwrites any existing record with the same id. Returns `item`
    /// itself, not a re-read copy.
    pub async fn create_item(&self, schema: &str, item: Record) -> Result<Record> {
        debug!(schema, "create_item");

        check_segment(schema, "schemaName")?;
        if item.is_null() {
            return Err(StoreError::invalid("expected an item"));
        }
        if !item.is_object() {
            return Err(StoreError::invalid("expected an item object"));
        }
        let id = record_id(&item).ok_or_else(|| StoreError::invalid("expected an item id"))?;
        check_segment(&id, "id")?;

        let json = serde_json::to_string(&item)?;
        self.ensure_schema_dir(schema).await?;

        let path = self.record_path(schema, &id);
        fs::write(&path, json.as_bytes()).await?;

        info!(schema, id = %id, path = %path.display(), bytes = json.len(), "record written");
        Ok(item)
    }

    /// Same primitive as [`create_item`](Self::create_item): the record is
    /// upserted.
    pub async fn update_item(&self, schema: &str, item: Record) -> Result<Record> {
        self.create_item(schema, item).await
    }

    /// Read a record by id.
    pub async fn fetch_item(&self, schema: &str, id: &str) -> Result<Record> {
        debug!(schema, id, "fetch_item");
        check_segment(schema, "schemaName")?;
        check_segment(id, "id")?;

        let path = self.record_path(schema, id);
        let contents = match fs::read_to_string(&path).await {
            Ok(c) => c,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                return Err(StoreError::NotFound(format!("{}/{}", schema, id)));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&contents)?)
    }

    /// Remove a record. The schema directory is left in place.
    pub async fn delete_item(&self, schema: &str, id: &str) -> Result<()> {
        debug!(schema, id, "delete_item");
        check_segment(schema, "schemaName")?;
        check_segment(id, "id")?;

        let path = self.record_path(schema, id);
        match fs::remove_file(&path).await {
            Ok(()) => {
                info!(schema, id, "record deleted");
                Ok(())
            }
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                Err(StoreError::NotFound(format!("{}/{}", schema, id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List record ids in a schema, sorted. An unknown schema is empty.
    pub async fn list_ids(&self, schema: &str) -> Result<Vec<String>> {
        check_segment(schema, "schemaName")?;

        let mut entries = match fs::read_dir(self.schema_dir(schema)).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();

        debug!(schema, count = ids.len(), "listed records");
        Ok(ids)
    }

    /// Make sure the schema directory exists.
    ///
    /// A concurrent creator winning the race is fine: `create_dir_all`
    /// succeeds when the directory is already there.
    async fn ensure_schema_dir(&self, schema: &str) -> Result<()> {
        let dir = self.schema_dir(schema);
        match fs::metadata(&dir).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                info!(dir = %dir.display(), "creating schema directory");
                fs::create_dir_all(&dir).await?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
