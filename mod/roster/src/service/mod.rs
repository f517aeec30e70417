pub mod class;
pub mod schema;
pub mod student;

use std::sync::Arc;

use thiserror::Error;

use schoolrec_sql::SQLStore;

/// Roster service error type.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("storage: {0}")]
    Storage(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl From<RosterError> for schoolrec_core::ServiceError {
    fn from(e: RosterError) -> Self {
        match e {
            RosterError::NotFound(m) => schoolrec_core::ServiceError::NotFound(m),
            RosterError::Conflict(m) => schoolrec_core::ServiceError::Conflict(m),
            RosterError::Validation(m) => schoolrec_core::ServiceError::BadRequest(m),
            RosterError::Storage(m) | RosterError::Internal(m) => {
                schoolrec_core::ServiceError::Unexpected(m)
            }
        }
    }
}

impl From<schoolrec_sql::SQLError> for RosterError {
    fn from(e: schoolrec_sql::SQLError) -> Self {
        RosterError::Storage(e.to_string())
    }
}

/// The roster service. Holds the storage backend; one instance is built at
/// process start and shared behind an `Arc`.
pub struct RosterService {
    pub(crate) sql: Arc<dyn SQLStore>,
}

impl RosterService {
    /// Create a new RosterService, initializing the DB schema.
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Arc<Self>, RosterError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Arc::new(Self { sql }))
    }
}

#[cfg(test)]
pub(crate) fn test_service() -> Arc<RosterService> {
    let sql = Arc::new(schoolrec_sql::SqliteStore::open_in_memory().unwrap());
    RosterService::new(sql).unwrap()
}
