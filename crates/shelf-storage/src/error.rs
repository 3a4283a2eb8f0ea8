//! Storage error types

use std::path::PathBuf;

/// Errors from key-value storage access
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Write would exceed the storage quota
    #[error("quota exceeded writing '{key}': {needed} bytes needed, {limit} allowed")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Total bytes the store would hold after the write
        needed: usize,
        /// Configured limit
        limit: usize,
    },

    /// Storage access is not permitted
    #[error("storage access denied")]
    AccessDenied,

    /// IO error on the backing file
    #[error("io error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Stored value is not the expected format
    #[error("malformed value under '{key}': {message}")]
    Malformed {
        /// Key that was read
        key: String,
        /// Parser message
        message: String,
    },

    /// Value could not be encoded
    #[error("encode failed: {0}")]
    Encode(String),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create malformed-value error for key
    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_error_display() {
        let err = StoreError::QuotaExceeded {
            key: "products".to_string(),
            needed: 120,
            limit: 100,
        };
        assert_eq!(
            err.to_string(),
            "quota exceeded writing 'products': 120 bytes needed, 100 allowed"
        );
    }

    #[test]
    fn malformed_error_display() {
        let err = StoreError::malformed("products", "expected array");
        assert!(err.to_string().contains("malformed value under 'products'"));
    }
}
