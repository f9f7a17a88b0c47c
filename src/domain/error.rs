use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("product name required")]
    NameRequired,
    #[error("{field} must be a non-negative whole number (got {value:?})")]
    InvalidPrice { field: &'static str, value: String },
    #[error("no product at position {index} (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown sales platform: {0}")]
    UnknownPlatform(String),
}

impl ProductError {
    /// Validation failures are user-facing; everything else is a wiring bug.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::NameRequired | ProductError::InvalidPrice { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
