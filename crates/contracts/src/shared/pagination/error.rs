use thiserror::Error;

/// Errors raised while building a page window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Invalid argument '{field}': {value}")]
    InvalidArgument { field: &'static str, value: i64 },
}

impl PaginationError {
    pub(crate) fn invalid(field: &'static str, value: i64) -> Self {
        PaginationError::InvalidArgument { field, value }
    }
}
