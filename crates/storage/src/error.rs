use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        self.database_code().as_deref() == Some("23505")
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.database_code().as_deref() == Some("23503")
    }

    pub fn is_check_violation(&self) -> bool {
        self.database_code().as_deref() == Some("23514")
    }

    fn database_code(&self) -> Option<String> {
        match self {
            StorageError::Database(sqlx::Error::Database(e)) => e.code().map(|c| c.into_owned()),
            _ => None,
        }
    }

    /// Maps well-known Postgres constraint failures to a readable violation,
    /// passing every other error through untouched.
    pub fn with_constraint_message(self, message: &str) -> Self {
        if self.is_unique_violation()
            || self.is_foreign_key_violation()
            || self.is_check_violation()
        {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}
