//! Storage module — JSON-file persistence for records.
//!
//! ## Layout
//!
//! ```text
//! <data_root>/
//! ├── duck/
//! │   ├── 1f0c….json
//! │   └── 7a9e….json
//! └── goose/
//!     └── honk.json
//! ```
//!
//! One directory per schema, one file per record. Directories are created
//! lazily on first write and never removed.

pub mod fs;

pub use fs::RecordStore;
