use thiserror::Error;

/// Errors raised by table configuration and state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A page size of zero would make every page empty.
    #[error("page size must be at least 1 (got {0})")]
    InvalidPageSize(usize),

    #[error("unknown employee status: {0:?}")]
    UnknownStatus(String),

    /// A configured column key does not name any employee field.
    #[error("unknown column key: {0:?}")]
    UnknownColumn(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TableError::InvalidPageSize(0).to_string(),
            "page size must be at least 1 (got 0)"
        );
        assert_eq!(
            TableError::UnknownStatus("Retired".to_string()).to_string(),
            "unknown employee status: \"Retired\""
        );
        assert_eq!(
            TableError::UnknownColumn("age".to_string()).to_string(),
            "unknown column key: \"age\""
        );
    }
}
