use thiserror::Error;

/// Errors raised by the hashing operations.
///
/// Callers only ever see one kind of failure: every variant is surfaced as
/// an internal error carrying this type's `Display` text.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("{0}")]
    PasswordHash(String),

    #[error("{0}")]
    Stream(#[from] std::io::Error),

    #[error("hashing task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_error_keeps_io_message() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "connection reset");
        let err = HashError::from(io);
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn test_password_error_message_is_verbatim() {
        let err = HashError::PasswordHash("invalid cost: 99".to_string());
        assert_eq!(err.to_string(), "invalid cost: 99");
    }
}
