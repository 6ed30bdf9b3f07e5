//! Runner error types.

/// Errors that can occur while running a query.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Parameters file loading errors.
    #[error(transparent)]
    Params(#[from] crate::params::ParamsError),

    /// Validation, API and matching errors.
    #[error(transparent)]
    Query(#[from] crate::query::QueryError),
}

impl RunnerError {
    /// Release tag associated with the failure, when one was resolved.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Query(e) => e.tag(),
            Self::Params(_) => None,
        }
    }
}
