//! Persistence for the brandmatch root document.
//!
//! Everything the tool remembers lives in one JSON [`RootDocument`] stored
//! under a single key of a [`KeyValueStore`]. A [`Store`] owns the loaded
//! document, applies mutations in memory and writes back on [`Store::save`].
//!
//! [`RootDocument`]: brandmatch_core::RootDocument

pub mod kv;
pub mod store;
pub mod transfer;

pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use store::{Store, DATA_KEY};
pub use transfer::{export_document, import_document};

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{entity} {id} already exists")]
    DuplicateId { entity: &'static str, id: Uuid },

    #[error("invalid import: {0}")]
    InvalidImport(String),
}
