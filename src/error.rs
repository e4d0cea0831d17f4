use thiserror::Error;

/// Error type for resultrs operations
#[derive(Debug, Error)]
pub enum ResultError {
    #[error("Payload is not a relational row set")]
    InvalidRowSet,

    #[error("Class `{class}` is not a model")]
    ClassIsNotModel { class: String },
}

/// Result type alias for resultrs operations
pub type Result<T> = std::result::Result<T, ResultError>;
