//! # Recordstore
//!
//! Minimal persistence for JSON records: one file per record, one directory
//! per schema.
//!
//! ## Key Features
//!
//! - **Plain files**: `<data_root>/<schema>/<id>.json`, readable with any tool
//! - **Lazy layout**: schema directories appear on first write
//! - **Upsert**: create and update share one primitive; last write wins
//! - **Small error surface**: invalid argument, not found, internal
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recordstore::RecordStore;
//! use serde_json::json;
//!
//! # async fn demo() -> recordstore::Result<()> {
//! let store = RecordStore::new("data");
//! store.create_item("duck", json!({"id": "a", "name": "larry"})).await?;
//! let duck = store.fetch_item("duck", "a").await?;
//! assert_eq!(duck["name"], "larry");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod storage;

// Re-exports for convenience
pub use config::StoreConfig;
pub use error::{ErrorKind, Result, StoreError};
pub use record::{assign_id, record_id, Record};
pub use storage::RecordStore;
