use thiserror::Error;

use crate::models::RecordKind;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Duplicate {kind}: {key}")]
    Duplicate { kind: RecordKind, key: String },

    #[error("Invalid record: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl StoreError {
    /// Maps a unique-constraint violation on insert to [`StoreError::Duplicate`].
    pub(crate) fn on_insert(kind: RecordKind, key: &str) -> impl FnOnce(sqlx::Error) -> Self {
        move |err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Duplicate {
                kind,
                key: key.to_string(),
            },
            _ => StoreError::Database(err),
        }
    }
}
