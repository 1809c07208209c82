//! Error types for store and backend operations

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("record codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("ledger backend error: {0}")]
    Backend(String),

    #[error("write conflict on key {0}")]
    Conflict(String),

    #[error("the donation {0} does not exist")]
    NotFound(String),

    #[error("the donation {0} already exists")]
    AlreadyExists(String),

    #[error("donation id must not be empty")]
    EmptyId,

    #[error("database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),
}
