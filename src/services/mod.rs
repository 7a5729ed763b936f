pub mod projects;

use std::fmt;

/// Failure of a service operation.
#[derive(Debug)]
pub enum ServiceError {
    /// No row with this id exists.
    NotFound { entity: &'static str, id: i32 },
    /// The store rejected or failed the operation named by `op`.
    Storage { op: &'static str, source: sqlx::Error },
}

impl ServiceError {
    pub fn storage(op: &'static str) -> impl FnOnce(sqlx::Error) -> ServiceError {
        move |source| ServiceError::Storage { op, source }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound { entity, id } => write!(f, "{entity} with ID {id} not found"),
            ServiceError::Storage { op, source } => write!(f, "failed to {op}: {source}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::NotFound { .. } => None,
            ServiceError::Storage { source, .. } => Some(source),
        }
    }
}
