use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("pattern has {pattern} bytes but mask has {mask} entries")]
    PatternMaskMismatch { pattern: usize, mask: usize },

    #[error("pattern is empty")]
    EmptyPattern,

    #[error("invalid pattern token '{0}'")]
    InvalidToken(String),

    #[error("invalid mask character '{0}' (expected 'x' or '?')")]
    InvalidMask(char),

    #[error("start offset {offset:#x} is outside the image (size {size:#x})")]
    StartOffsetOutOfRange { offset: usize, size: usize },

    #[error("no match for '{name}' in the loaded image")]
    NotFound { name: String },

    #[error("refusing to call '{name}': address never resolved")]
    Unresolved { name: String },

    #[error("signature entry '{0}' not found in catalog")]
    UnknownSignature(String),

    #[error("failed to query module information: {0}")]
    ImageQueryFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a pattern authoring defect rather than an
    /// environment condition.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::PatternMaskMismatch { .. }
                | Error::EmptyPattern
                | Error::InvalidToken(_)
                | Error::InvalidMask(_)
                | Error::StartOffsetOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_configuration() {
        let err = Error::EmptyPattern;
        assert!(err.is_configuration());

        let err = Error::NotFound {
            name: "getName".to_string(),
        };
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_error_messages_carry_identifier() {
        let err = Error::NotFound {
            name: "getName".to_string(),
        };
        assert!(err.to_string().contains("getName"));

        let err = Error::Unresolved {
            name: "getName".to_string(),
        };
        assert!(err.to_string().contains("getName"));
    }
}
